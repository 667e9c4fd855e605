//! Extract command implementation

use crate::config::CliConfig;
use crate::output::{stdout_formatter, Extraction, OutputFormat};
use anyhow::Result;
use clap::Args;
use tmeditor_core::{extract_cut_names, extract_externals, extract_objects};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Algorithm expression
    #[arg(short, long, value_name = "EXPR")]
    pub expression: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let extraction = extraction(&self.expression)?;
        let mut formatter =
            stdout_formatter(config.output_format(self.format), config.output.pretty_json);
        formatter.format_extraction(&extraction)?;
        formatter.finish()
    }
}

/// Distinct references of an expression, first occurrence order
pub fn extraction(expression: &str) -> Result<Extraction> {
    Ok(Extraction {
        expression: expression.to_string(),
        objects: extract_objects(expression)?
            .iter()
            .map(|object| object.name().to_string())
            .collect(),
        externals: extract_externals(expression)?
            .iter()
            .map(|external| external.name().to_string())
            .collect(),
        cuts: extract_cut_names(expression)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction() {
        let extraction =
            extraction("comb{MU10[MU-ETA_2p1],EG20}[CHGCOR_OS] AND MU10 AND EXT_BPTX_plus.v0-1")
                .unwrap();
        assert_eq!(extraction.objects, vec!["MU10", "EG20"]);
        assert_eq!(extraction.externals, vec!["EXT_BPTX_plus.v0-1"]);
        assert_eq!(extraction.cuts, vec!["CHGCOR_OS", "MU-ETA_2p1"]);
    }
}
