//! CLI commands.

mod ids;
mod lookup;
mod validate;

use anyhow::Result;
use arm_client::{ArmClient, ClientConfig};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// armctl - Parse, validate, and resolve Azure Resource Manager IDs.
#[derive(Debug, Parser)]
#[command(name = "armctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List supported resource kinds.
    Kinds,

    /// Parse an ID as a specific resource kind.
    Parse(ids::ParseArgs),

    /// Split any resource ID into scopes and key/value pairs.
    Inspect(ids::InspectArgs),

    /// Run a field validator against a value.
    Validate(validate::ValidateArgs),

    /// Resolve items by display name.
    Lookup(lookup::LookupCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self, config: ClientConfig) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Kinds => ids::list_kinds(&ctx),
            Commands::Parse(args) => ids::parse(&ctx, args),
            Commands::Inspect(args) => ids::inspect(&ctx, args),
            Commands::Validate(args) => validate::run(&ctx, args),
            Commands::Lookup(cmd) => cmd.run(&ctx).await,
            Commands::Version => {
                println!("armctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: ClientConfig,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Get an authenticated Resource Manager client.
    pub fn client(&self) -> Result<ArmClient> {
        Ok(ArmClient::from_config(&self.config)?)
    }
}
