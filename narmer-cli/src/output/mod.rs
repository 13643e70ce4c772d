//! Output formatting module

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;

use crate::error::CliError;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one transcribed word
    fn format_entry(&mut self, word: &str, ipa: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Word and transcription separated by a tab, one per line
    Text,
    /// JSON array of words with their transcription
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Word and transcription separated by a tab, one per line",
            OutputFormat::Json => "JSON array of words with their transcription",
            OutputFormat::Markdown => "Markdown table",
        }
    }

    /// Create the formatter for this format over `writer`
    pub fn formatter<W>(self, writer: W, stage: &str, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, stage).pretty(pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(CliError::ConfigError(format!("unknown output format '{s}'")).into()),
        }
    }
}
