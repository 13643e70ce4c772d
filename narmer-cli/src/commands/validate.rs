//! Validate command implementation

use anyhow::Result;
use clap::Args;
use narmer_core::language::tables;
use narmer_core::{CharSet, RuleTable};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule table to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule table: {}", self.rules.display());

        let table = match RuleTable::from_file(&self.rules) {
            Ok(table) => table,
            Err(e) => {
                println!("✗ Rule table is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {e}"));
            }
        };

        let shadowed = table.shadowed();

        println!("✓ Rule table is valid!");
        println!("  Code: {}", table.code());
        println!("  Name: {}", table.name());
        println!("  Productions: {}", table.productions().len());

        if !shadowed.is_empty() {
            println!("  Unreachable productions: {}", shadowed.len());
            for s in &shadowed {
                println!(
                    "    #{} {} (always preceded by #{} {})",
                    s.index,
                    table.productions()[s.index].pattern,
                    s.by,
                    table.productions()[s.by].pattern
                );
            }
        }

        let uncovered = table.missing_fallbacks(&coverage_alphabet(&table));
        if !uncovered.is_empty() {
            let letters: String = uncovered.into_iter().collect();
            println!("  Letters without a single-letter fallback: {letters}");
        }

        Ok(())
    }
}

/// Letters a table should cover: those of the stage it extends, NHG otherwise
fn coverage_alphabet(table: &RuleTable) -> CharSet {
    tables::alphabet(table.stage().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use narmer_core::Stage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_table() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
code = "test"
name = "Test table"
extends = "enhg"

[[productions]]
pattern = "V"
output = "v"
"#
        )
        .unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_coverage_follows_extended_stage() {
        let mhg = RuleTable::from_toml_str(
            r#"
[metadata]
code = "mhg-local"
name = "Local MHG"
extends = "mhg"
"#,
        )
        .unwrap();
        assert!(coverage_alphabet(&mhg).contains('Ā'));
        assert!(coverage_alphabet(&mhg).contains('Œ'));
        assert!(mhg.missing_fallbacks(&coverage_alphabet(&mhg)).is_empty());

        let standalone = RuleTable::from_toml_str(
            r#"
[metadata]
code = "vowels"
name = "Vowels only"

[[productions]]
pattern = "A"
output = "a"
"#,
        )
        .unwrap();
        let alphabet = coverage_alphabet(&standalone);
        assert_eq!(alphabet, tables::alphabet(Stage::Nhg));
        let uncovered = standalone.missing_fallbacks(&alphabet);
        assert!(uncovered.contains(&'B'));
        assert!(!uncovered.contains(&'A'));
        assert!(!uncovered.contains(&'Ā'));
    }

    #[test]
    fn test_validate_invalid_table() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
code = ""
name = "Test"
extends = "nhg"
"#
        )
        .unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
