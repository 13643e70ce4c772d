//! Weissman score command implementation

use anyhow::{Context, Result};
use clap::Args;
use narmer_core::{weissman_score, DEFAULT_SCALE};

/// Arguments for the weissman command
#[derive(Debug, Args)]
pub struct WeissmanArgs {
    /// Ratio achieved by the target algorithm
    #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
    pub target_ratio: f64,

    /// Time taken by the target algorithm
    #[arg(long, value_name = "TIME", allow_negative_numbers = true)]
    pub target_time: f64,

    /// Ratio achieved by the standard algorithm
    #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
    pub source_ratio: f64,

    /// Time taken by the standard algorithm
    #[arg(long, value_name = "TIME", allow_negative_numbers = true)]
    pub source_time: f64,

    /// Scaling constant
    #[arg(long, value_name = "ALPHA", default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: f64,
}

impl WeissmanArgs {
    pub fn score(&self) -> Result<f64> {
        weissman_score(
            self.target_ratio,
            self.target_time,
            self.source_ratio,
            self.source_time,
            self.scale,
        )
        .context("Failed to compute Weissman score")
    }

    /// Execute the weissman command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.score()?);
        Ok(())
    }
}
