//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::Subcommand;

pub mod check;
pub mod extract;
pub mod tokens;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate expressions or named algorithms against a menu
    Validate(validate::ValidateArgs),

    /// Print the reverse-Polish token stream of an expression
    Tokens(tokens::TokensArgs),

    /// Print the objects, externals and cuts of an expression
    Extract(extract::ExtractArgs),

    /// Validate every algorithm of one or more menu snapshots
    Check(check::CheckArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Validate(args) => args.execute(config),
            Commands::Tokens(args) => args.execute(config),
            Commands::Extract(args) => args.execute(config),
            Commands::Check(args) => args.execute(config),
        }
    }
}
