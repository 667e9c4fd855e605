//! Tokens command implementation

use crate::config::CliConfig;
use crate::output::{stdout_formatter, OutputFormat, TokenRecord};
use anyhow::Result;
use clap::Args;
use tmeditor_core::{classify, tokenize};

/// Arguments for the tokens command
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Algorithm expression
    #[arg(short, long, value_name = "EXPR")]
    pub expression: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let records = token_records(&self.expression)?;
        let mut formatter =
            stdout_formatter(config.output_format(self.format), config.output.pretty_json);
        formatter.format_tokens(&self.expression, &records)?;
        formatter.finish()
    }
}

/// Reverse-Polish tokens of an expression with their classification
pub fn token_records(expression: &str) -> Result<Vec<TokenRecord>> {
    let records = tokenize(expression)?
        .into_iter()
        .map(|token| {
            let kind = classify(&token).map_or_else(|| "unknown".to_string(), |kind| kind.to_string());
            TokenRecord { token, kind }
        })
        .collect();
    Ok(records)
}
