//! Result rendering.

use std::io::Write;

use palindrome_analysis::PalindromeMatch;
use palindrome_core::config::OutputFormat;
use serde::Serialize;

/// One line of output. Positions are in characters.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    pub output: &'a str,
    pub start: usize,
    pub len: usize,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a str, found: &PalindromeMatch<'a>) -> Self {
        Self {
            input,
            output: found.text,
            start: found.span.start,
            len: found.span.len,
        }
    }
}

/// Write `report` as a text line or a single-line JSON object.
pub fn render<W: Write>(out: &mut W, report: &Report<'_>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Input: '{}' -> Output: '{}'", report.input, report.output)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
