//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON array of records
    Json,
}

/// One classified token of an RPN stream
#[derive(Debug, Clone, Serialize)]
pub struct TokenRecord {
    pub token: String,
    pub kind: String,
}

/// References of one expression
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub expression: String,
    pub objects: Vec<String>,
    pub externals: Vec<String>,
    pub cuts: Vec<String>,
}

/// Validation outcome of one algorithm
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmOutcome {
    pub index: u32,
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Validation outcome of a menu snapshot
#[derive(Debug, Clone, Serialize)]
pub struct MenuReport {
    pub path: String,
    pub menu: String,
    pub algorithms: Vec<AlgorithmOutcome>,
}

impl MenuReport {
    /// Number of algorithms that failed validation
    pub fn failures(&self) -> usize {
        self.algorithms.iter().filter(|outcome| !outcome.valid).count()
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output the token stream of an expression
    fn format_tokens(&mut self, expression: &str, tokens: &[TokenRecord]) -> Result<()>;

    /// Output the references of an expression
    fn format_extraction(&mut self, extraction: &Extraction) -> Result<()>;

    /// Output the validation report of a menu
    fn format_report(&mut self, report: &MenuReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatter writing to stdout
pub fn stdout_formatter(format: OutputFormat, pretty_json: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), pretty_json)),
    }
}
