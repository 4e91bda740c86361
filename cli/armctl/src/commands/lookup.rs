//! Display-name lookup commands.

use anyhow::Result;
use arm_client::policy::{
    find_policy_definition_by_display_name, find_policy_set_definition_by_display_name,
};
use clap::{Args, Subcommand};
use tracing::info;

use crate::output::print_single;

use super::CommandContext;

/// Display-name lookup commands.
#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(subcommand)]
    command: LookupSubcommand,
}

#[derive(Debug, Subcommand)]
enum LookupSubcommand {
    /// Find a policy definition by display name.
    PolicyDefinition(LookupArgs),

    /// Find a policy set definition (initiative) by display name.
    PolicySetDefinition(LookupArgs),
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// Exact display name (case-sensitive).
    display_name: String,
}

impl LookupCommand {
    pub async fn run(self, ctx: &CommandContext) -> Result<()> {
        let client = ctx.client()?;
        info!(
            subscription_id = %client.subscription_id(),
            base_uri = %client.base_uri(),
            "Resolving by display name"
        );

        match self.command {
            LookupSubcommand::PolicyDefinition(args) => {
                let definition =
                    find_policy_definition_by_display_name(&client, &args.display_name).await?;
                print_single(&definition);
            }
            LookupSubcommand::PolicySetDefinition(args) => {
                let definition =
                    find_policy_set_definition_by_display_name(&client, &args.display_name)
                        .await?;
                print_single(&definition);
            }
        }
        Ok(())
    }
}
