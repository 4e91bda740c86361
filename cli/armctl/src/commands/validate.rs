//! Validator commands.

use anyhow::{bail, Result};
use arm_validate::{by_name, Validation, VALIDATOR_NAMES};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::output::{print_failure, print_single, print_success, print_warning, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Validator name: capacity, suppression_name, not_empty, subscription_id,
    /// or resource_id:<kind>.
    validator: String,

    /// Value to validate. Parsed as JSON when possible, otherwise taken as a string.
    value: String,

    /// Field key to tag diagnostics with.
    #[arg(long, default_value = "value")]
    field: String,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl From<Validation> for ValidationReport {
    fn from(result: Validation) -> Self {
        Self {
            valid: result.is_valid(),
            warnings: result.warnings,
            errors: result.errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Interprets a command-line argument as a JSON value.
///
/// `36` is a number and `"36"` a string; anything that is not JSON is a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn run(ctx: &CommandContext, args: ValidateArgs) -> Result<()> {
    let Some(validator) = by_name(&args.validator) else {
        bail!(
            "Unknown validator '{}'. Expected one of: {}, resource_id:<kind>",
            args.validator,
            VALIDATOR_NAMES.join(", ")
        );
    };

    let report = ValidationReport::from(validator(&parse_value(&args.value), args.field.as_str()));

    match ctx.format {
        OutputFormat::Json => print_single(&report),
        OutputFormat::Table => {
            for warning in &report.warnings {
                print_warning(warning);
            }
            for error in &report.errors {
                print_failure(error);
            }
            if report.valid {
                print_success(&format!("{} is valid", args.field));
            }
        }
    }

    if !report.valid {
        bail!("{} validation error(s) for {}", report.errors.len(), args.field);
    }
    Ok(())
}
