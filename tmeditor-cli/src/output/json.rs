//! JSON output formatter

use super::{Extraction, MenuReport, OutputFormatter, TokenRecord};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Value>,
}

#[derive(Serialize)]
struct TokenStream<'a> {
    expression: &'a str,
    tokens: &'a [TokenRecord],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    fn push(&mut self, record: impl Serialize) -> Result<()> {
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_tokens(&mut self, expression: &str, tokens: &[TokenRecord]) -> Result<()> {
        self.push(TokenStream { expression, tokens })
    }

    fn format_extraction(&mut self, extraction: &Extraction) -> Result<()> {
        self.push(extraction)
    }

    fn format_report(&mut self, report: &MenuReport) -> Result<()> {
        self.push(report)
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
