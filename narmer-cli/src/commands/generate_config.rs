//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use narmer_core::Stage;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code for the new rule table
    #[arg(short, long, value_name = "CODE", required = true)]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Built-in stage the new table falls back to
    #[arg(long, value_name = "STAGE", default_value_t = Stage::Nhg)]
    pub extends: Stage,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule table template...");
        println!("  Code: {}", self.code);
        println!("  Extends: {}", self.extends);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the productions to describe your orthography");
        println!("2. Validate your rule table:");
        println!("   narmer validate --rules {}", self.output.display());
        println!("3. Use it for transcription:");
        println!(
            "   narmer transcribe --rules {} WORD...",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template rule table content
    fn generate_template(&self) -> String {
        format!(
            r#"# Rule table for {code}

[metadata]
code = "{code}"
name = "Custom rule table"
# Built-in table consulted after the productions below
extends = "{extends}"

# Single-character substitutions applied after uppercasing
[normalization]
substitutions = [
    # Example: {{ from = "Â", to = "Ā" }}
]

# Productions are tried in order; the first match wins.
# pattern  - literal uppercase text that must match at the current position
# output   - IPA appended when the production fires
# consumes - characters swallowed after the first one (default 0)
# when     - contexts that must all hold (default none):
#            {{ after = "SET" }}, {{ before = "SET" }},
#            {{ ahead = {{ offset = 2, set = "SET" }} }}, "word_initial"

# Velar fricative after back vowels
[[productions]]
pattern = "CH"
output = "x"
consumes = 1
when = [{{ after = "AOU" }}]

# Word-initial S before a stop
[[productions]]
pattern = "S"
output = "ʃ"
when = ["word_initial", {{ before = "PT" }}]
"#,
            code = self.code,
            extends = self.extends,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narmer_core::RuleTable;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template_is_loadable() {
        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: PathBuf::from("test.toml"),
            extends: Stage::Mhg,
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"test\""));
        assert!(template.contains("extends = \"mhg\""));

        let table = RuleTable::from_toml_str(&template).unwrap();
        assert_eq!(table.code(), "test");
        assert_eq!(table.productions()[0].pattern, "CH");
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test_rules.toml");

        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: output_path.clone(),
            extends: Stage::Nhg,
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("extends = \"nhg\""));
    }
}
