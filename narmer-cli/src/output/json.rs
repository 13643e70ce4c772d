//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    stage: String,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryData {
    /// The word as given
    pub word: String,
    /// Its IPA transcription
    pub ipa: String,
    /// Stage or rule table code used
    pub stage: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, stage: &str) -> Self {
        Self {
            writer,
            stage: stage.to_string(),
            pretty: true,
            entries: Vec::new(),
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, word: &str, ipa: &str) -> Result<()> {
        self.entries.push(EntryData {
            word: word.to_string(),
            ipa: ipa.to_string(),
            stage: self.stage.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), "mhg").pretty(false);
        formatter.format_entry("hûs", "xuːs").unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        let parsed: Vec<EntryData> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].word, "hûs");
        assert_eq!(parsed[0].ipa, "xuːs");
        assert_eq!(parsed[0].stage, "mhg");
    }

    #[test]
    fn test_empty_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), "nhg");
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap().trim(), "[]");
    }
}
