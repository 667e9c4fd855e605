//! Validate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::MenuReader;
use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::PathBuf;
use tmeditor_core::{tokenize, AlgorithmSyntaxValidator, Error, Menu};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["expression", "algorithm"])
))]
pub struct ValidateArgs {
    /// Menu snapshot providing cuts and scales
    #[arg(short, long, value_name = "FILE", required = true)]
    pub menu: PathBuf,

    /// Expression to validate
    #[arg(short, long, value_name = "EXPR")]
    pub expression: Vec<String>,

    /// Name of a menu algorithm to validate
    #[arg(short, long, value_name = "NAME")]
    pub algorithm: Vec<String>,

    /// Also require defined cuts and permitted function cut types
    #[arg(short, long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let core = config.core_config(self.strict)?;
        let menu = MenuReader::read(&self.menu, core.max_algorithms)?;
        let validator = core.validator();

        for expression in self.targets(&menu)? {
            log::info!("validating `{expression}`");
            match validate(&expression, &menu, &validator) {
                Ok(()) => println!("✓ {expression}"),
                Err(e) => {
                    println!("✗ {expression}");
                    for line in e.to_string().lines() {
                        println!("  {line}");
                    }
                    let mut source = std::error::Error::source(&e);
                    while let Some(cause) = source {
                        println!("  Caused by: {cause}");
                        source = std::error::Error::source(cause);
                    }
                    if let Error::Rule(rule) = &e {
                        if let Some(token) = rule.token() {
                            println!("  Token: {token}");
                        }
                    }
                    return Err(CliError::ValidationFailed(1).into());
                }
            }
        }
        Ok(())
    }

    fn targets(&self, menu: &Menu) -> Result<Vec<String>> {
        let mut targets = self.expression.clone();
        for name in &self.algorithm {
            let algorithm = menu
                .algorithm_by_name(name)
                .ok_or_else(|| CliError::UnknownAlgorithm(name.clone()))?;
            targets.push(algorithm.expression.clone());
        }
        Ok(targets)
    }
}

/// Syntax first, then the validator's rules.
fn validate(
    expression: &str,
    menu: &Menu,
    validator: &AlgorithmSyntaxValidator,
) -> tmeditor_core::Result<()> {
    tokenize(expression)?;
    validator.validate(expression, menu)
}
