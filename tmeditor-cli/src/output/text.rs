//! Plain text output formatter

use super::{Extraction, MenuReport, OutputFormatter, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn section(&mut self, title: &str, items: &[String]) -> Result<()> {
        writeln!(self.writer, "{title}:")?;
        for item in items {
            writeln!(self.writer, "  {item}")?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_tokens(&mut self, _expression: &str, tokens: &[TokenRecord]) -> Result<()> {
        for record in tokens {
            writeln!(self.writer, "{}\t{}", record.token, record.kind)?;
        }
        Ok(())
    }

    fn format_extraction(&mut self, extraction: &Extraction) -> Result<()> {
        self.section("objects", &extraction.objects)?;
        self.section("externals", &extraction.externals)?;
        self.section("cuts", &extraction.cuts)
    }

    fn format_report(&mut self, report: &MenuReport) -> Result<()> {
        writeln!(self.writer, "{} ({})", report.menu, report.path)?;
        for outcome in &report.algorithms {
            let mark = if outcome.valid { '✓' } else { '✗' };
            writeln!(self.writer, "  {mark} {:>3} {}", outcome.index, outcome.name)?;
            if let Some(error) = &outcome.error {
                for line in error.lines() {
                    writeln!(self.writer, "        {line}")?;
                }
            }
        }
        writeln!(
            self.writer,
            "  {} of {} algorithm(s) valid",
            report.algorithms.len() - report.failures(),
            report.algorithms.len()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::AlgorithmOutcome;

    fn render(f: impl FnOnce(&mut TextFormatter<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        f(&mut formatter).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_tokens_one_per_line() {
        let tokens = vec![
            TokenRecord {
                token: "MU10".to_string(),
                kind: "object".to_string(),
            },
            TokenRecord {
                token: "NOT".to_string(),
                kind: "operator".to_string(),
            },
        ];
        let output = render(|f| f.format_tokens("NOT MU10", &tokens));
        assert_eq!(output, "MU10\tobject\nNOT\toperator\n");
    }

    #[test]
    fn test_extraction_sections() {
        let extraction = Extraction {
            expression: "MU10 AND EXT_ZeroBias".to_string(),
            objects: vec!["MU10".to_string()],
            externals: vec!["EXT_ZeroBias".to_string()],
            cuts: Vec::new(),
        };
        let output = render(|f| f.format_extraction(&extraction));
        assert_eq!(output, "objects:\n  MU10\nexternals:\n  EXT_ZeroBias\ncuts:\n");
    }

    #[test]
    fn test_report_marks_failures() {
        let report = MenuReport {
            path: "menu.toml".to_string(),
            menu: "L1Menu_Test".to_string(),
            algorithms: vec![
                AlgorithmOutcome {
                    index: 0,
                    name: "L1_Good".to_string(),
                    valid: true,
                    error: None,
                    token: None,
                },
                AlgorithmOutcome {
                    index: 1,
                    name: "L1_Bad".to_string(),
                    valid: false,
                    error: Some("first\nsecond".to_string()),
                    token: None,
                },
            ],
        };
        let output = render(|f| f.format_report(&report));
        assert!(output.starts_with("L1Menu_Test (menu.toml)\n"));
        assert!(output.contains("✓   0 L1_Good"));
        assert!(output.contains("✗   1 L1_Bad\n        first\n        second\n"));
        assert!(output.ends_with("1 of 2 algorithm(s) valid\n"));
    }
}
