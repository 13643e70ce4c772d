//! Transcribe command implementation

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use narmer_core::{Stage, Transcriber, UnmappedPolicy};
use rayon::prelude::*;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_words, FileReader};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use crate::rules_source::RulesSource;

/// Arguments for the transcribe command
#[derive(Debug, Args)]
pub struct TranscribeArgs {
    /// Words to transcribe
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Word list files or patterns (supports glob), split on whitespace
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Historical stage: ohg, mhg, enhg or nhg
    #[arg(short, long, value_name = "STAGE")]
    pub stage: Option<Stage>,

    /// External rule table (TOML) used instead of the stage's table
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Handling of characters no production covers: drop, pass-through or reject
    #[arg(short, long, value_name = "POLICY")]
    pub unmapped: Option<UnmappedPolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Transcribe words in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl TranscribeArgs {
    /// Execute the transcribe command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting transcription");
        log::debug!("Arguments: {self:?}");

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let stage = match self.stage {
            Some(stage) => stage,
            None => config.stage()?,
        };
        let unmapped = match self.unmapped {
            Some(policy) => policy,
            None => config.unmapped()?,
        };
        let format = match self.format {
            Some(format) => format,
            None => config.format()?,
        };

        let source = RulesSource::new(stage, self.rules.clone());
        log::info!("Rules: {}", source.display_name());
        let transcriber = source.transcriber(unmapped)?;

        let words = self.collect_words()?;
        log::info!("Transcribing {} words", words.len());

        let transcriptions = self.transcribe_words(&transcriber, &words)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let code = transcriber.table().code().to_string();
        let mut formatter = format.formatter(writer, &code, config.output.pretty_json);

        for (word, ipa) in words.iter().zip(&transcriptions) {
            formatter.format_entry(word, ipa)?;
        }
        formatter.finish()?;

        log::info!("Transcription complete");
        Ok(())
    }

    /// Words from the command line, then from each input file in order
    ///
    /// Falls back to standard input when neither words nor files are given.
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let text = FileReader::read_text(path)?;
                let before = words.len();
                words.extend(split_words(&text).map(str::to_string));
                progress.file_completed(&path.display().to_string(), words.len() - before);
            }
            progress.finish();
        } else if words.is_empty() {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::NoInput.into());
            }
            let text = FileReader::read_stream(stdin.lock())?;
            words.extend(split_words(&text).map(str::to_string));
        }

        if words.is_empty() {
            return Err(CliError::NoInput.into());
        }
        Ok(words)
    }

    fn transcribe_words(&self, transcriber: &Transcriber, words: &[String]) -> Result<Vec<String>> {
        let transcribe = |word: &String| {
            transcriber
                .transcribe(word)
                .with_context(|| format!("Failed to transcribe '{word}'"))
        };

        if self.parallel {
            words.par_iter().map(transcribe).collect()
        } else {
            words.iter().map(transcribe).collect()
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(words: &[&str]) -> TranscribeArgs {
        TranscribeArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            input: Vec::new(),
            stage: None,
            rules: None,
            unmapped: None,
            format: None,
            output: None,
            parallel: false,
            quiet: true,
            verbose: 0,
            config: None,
        }
    }

    #[test]
    fn test_transcribe_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut args = args(&["Wasser", "Quatsch"]);
        args.output = Some(output.clone());
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "Wasser\tvaser\nQuatsch\tkvatʃ\n");
    }

    #[test]
    fn test_words_then_files() {
        let temp_dir = TempDir::new().unwrap();
        let list = temp_dir.path().join("words.txt");
        fs::write(&list, "Boot\n  schon\n").unwrap();

        let mut args = args(&["Wasser"]);
        args.input = vec![list.display().to_string()];
        assert_eq!(args.collect_words().unwrap(), vec!["Wasser", "Boot", "schon"]);
    }

    #[test]
    fn test_parallel_keeps_order() {
        let mut args = args(&[]);
        args.parallel = true;
        let transcriber = Transcriber::new();
        let words: Vec<String> = ["Boot", "Wasser", "schon"].iter().map(|w| w.to_string()).collect();
        assert_eq!(
            args.transcribe_words(&transcriber, &words).unwrap(),
            vec!["bot", "vaser", "ʃon"]
        );
    }

    #[test]
    fn test_reject_reports_word() {
        let args = args(&[]);
        let transcriber = Transcriber::new().unmapped(UnmappedPolicy::Reject);
        let err = args
            .transcribe_words(&transcriber, &["Hund!".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("Hund!"));
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("narmer.toml");
        fs::write(
            &config,
            "[transcription]\ndefault_stage = \"mhg\"\nunmapped = \"drop\"\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
        )
        .unwrap();
        let output = temp_dir.path().join("out.json");

        let mut args = args(&["hûs"]);
        args.config = Some(config);
        args.output = Some(output.clone());
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"ipa\":\"xuːs\""));
        assert!(content.contains("\"stage\":\"mhg\""));
    }
}
