//! Error display for the CLI.

use arm_client::ClientError;
use arm_lookup::LookupError;
use colored::Colorize;

fn hint(message: &str) {
    eprintln!("\n{}", format!("Hint: {message}").yellow());
}

fn client_hint(err: &ClientError) {
    match err {
        ClientError::Authorization(_) => hint("Set ARM_ACCESS_TOKEN to a Resource Manager token."),
        ClientError::Api { status: 401, .. } => {
            hint("The access token may have expired. Refresh ARM_ACCESS_TOKEN.")
        }
        ClientError::Api { status: 403, .. } => {
            hint("The identity may not have permission for this operation.")
        }
        ClientError::Api {
            request_id: Some(request_id),
            ..
        } => eprintln!("\nRequest ID: {request_id}"),
        ClientError::Network(_) => {
            hint("Check your network connection and ARM_RESOURCE_MANAGER_ENDPOINT.")
        }
        ClientError::UnknownEnvironment(_) => {
            hint("ARM_ENVIRONMENT must be one of: public, china, usgovernment.")
        }
        _ => {}
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(client_err) = err.downcast_ref::<ClientError>() {
        client_hint(client_err);
    } else if let Some(lookup_err) = err.downcast_ref::<LookupError>() {
        match lookup_err {
            LookupError::Ambiguous { .. } => {
                hint("Display names are not unique. Pass the definition ID instead.")
            }
            LookupError::Listing(source) => {
                if let Some(client_err) = source.downcast_ref::<ClientError>() {
                    client_hint(client_err);
                }
            }
            _ => {}
        }
    }
}
