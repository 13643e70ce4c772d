//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs words as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, word: &str, ipa: &str) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| Word | IPA |")?;
            writeln!(self.writer, "|------|-----|")?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | /{}/ |",
            escape_cell(word),
            escape_cell(ipa)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
