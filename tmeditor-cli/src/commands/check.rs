//! Check command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, MenuReader};
use crate::output::{stdout_formatter, AlgorithmOutcome, MenuReport, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::Path;
use tmeditor_core::{AlgorithmReport, AlgorithmSyntaxValidator, Config, Error};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Menu snapshot files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub menu: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also require defined cuts and permitted function cut types
    #[arg(short, long)]
    pub strict: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let core = config.core_config(self.strict)?;
        let validator = core.validator();
        let files = resolve_patterns(&self.menu)?;

        let mut formatter =
            stdout_formatter(config.output_format(self.format), config.output.pretty_json);
        let mut failures = 0;
        for path in &files {
            let report = check_menu(path, &core, &validator)?;
            failures += report.failures();
            formatter.format_report(&report)?;
        }
        formatter.finish()?;

        if failures > 0 {
            return Err(CliError::ValidationFailed(failures).into());
        }
        Ok(())
    }
}

/// Validate every algorithm of a snapshot
pub fn check_menu(
    path: &Path,
    config: &Config,
    validator: &AlgorithmSyntaxValidator,
) -> Result<MenuReport> {
    let menu = MenuReader::read(path, config.max_algorithms)?;
    let algorithms: Vec<_> = menu
        .validate_algorithms(validator)
        .into_iter()
        .map(outcome)
        .collect();
    log::info!(
        "checked {} algorithm(s) of {}",
        algorithms.len(),
        path.display()
    );
    Ok(MenuReport {
        path: path.display().to_string(),
        menu: menu.name,
        algorithms,
    })
}

fn outcome(report: AlgorithmReport) -> AlgorithmOutcome {
    let (error, token) = match &report.result {
        Ok(()) => (None, None),
        Err(Error::Rule(rule)) => (
            Some(rule.to_string()),
            rule.token().map(str::to_string),
        ),
        Err(e) => (Some(e.to_string()), None),
    };
    AlgorithmOutcome {
        index: report.index,
        name: report.name,
        valid: error.is_none(),
        error,
        token,
    }
}
