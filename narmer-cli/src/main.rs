//! `narmer` command-line entry point

use clap::Parser;
use narmer_cli::commands::Commands;
use narmer_cli::CliResult;

/// Historical German orthography to IPA
#[derive(Debug, Parser)]
#[command(name = "narmer", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
