//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use narmer_core::Stage;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod transcribe;
pub mod validate;
pub mod weissman;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe words into IPA
    Transcribe(transcribe::TranscribeArgs),

    /// Compute a Weissman score
    Weissman(weissman::WeissmanArgs),

    /// Validate a rule table file
    Validate(validate::ValidateArgs),

    /// Generate a rule table template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in stages
    Stages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Transcribe(args) => args.execute(),
            Commands::Weissman(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Stages => Stage::ALL
                .iter()
                .map(|stage| {
                    let default = if *stage == Stage::default() {
                        " (default)"
                    } else {
                        ""
                    };
                    format!("{:<6}{}{default}", stage.code(), stage.name())
                })
                .collect(),
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| format!("{:<10}{}", format.as_str(), format.description()))
                .collect(),
        }
    }
}
