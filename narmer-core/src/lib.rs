//! Orthography to IPA transcription for historical stages of German
//!
//! Words are normalized (uppercase, NFKC, `ß → SS`, stage-specific
//! substitutions) and then scanned left to right against an ordered table of
//! productions. At each position the first matching production in authored
//! order emits its IPA output and may swallow following characters.
//!
//! # Architecture
//!
//! - **language**: production model, the four built-in tables and TOML rule
//!   tables
//! - **domain**: normalizer and scan engine
//! - **api**: stage selection, configuration and the [`Transcriber`]
//!
//! # Example
//!
//! ```rust
//! use narmer_core::{transcribe, Stage, Transcriber};
//!
//! assert_eq!(transcribe("Wasser", "nhg").unwrap(), "vaser");
//! assert!(transcribe("Hund", "xyz").is_err());
//!
//! let mhg = Transcriber::with_stage("mhg").unwrap();
//! assert_eq!(mhg.transcribe("hûs").unwrap(), "xuːs");
//! assert_eq!(narmer_core::transcribe_stage("Boot", Stage::Nhg), "bot");
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod language;
pub mod stats;

pub use api::{Config, ConfigBuilder, Stage, Transcriber};
pub use domain::{normalize, transduce, NormalizedWord, Normalizer, Scanner, UnmappedPolicy};
pub use error::{Error, Result};
pub use language::{CharSet, Context, Production, RuleTable, RuleTableConfig, Shadowed};
pub use stats::{weissman_score, DEFAULT_SCALE};

/// Transcribe a word for a stage given by code (`ohg`, `mhg`, `enhg`, `nhg`)
pub fn transcribe(word: &str, stage: &str) -> Result<String> {
    let stage: Stage = stage.parse()?;
    Ok(transcribe_stage(word, stage))
}

/// Transcribe a word with the built-in table of `stage`
pub fn transcribe_stage(word: &str, stage: Stage) -> String {
    let table = RuleTable::for_stage(stage);
    transduce(&table.normalize(word), table)
}
