//! Historical stage of German

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Historical stages of German with their own rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Old High German
    Ohg,
    /// Middle High German
    Mhg,
    /// Early New High German
    Enhg,
    /// New High German
    #[default]
    Nhg,
}

impl Stage {
    /// All stages, oldest first
    pub const ALL: [Stage; 4] = [Stage::Ohg, Stage::Mhg, Stage::Enhg, Stage::Nhg];

    /// Get the stage code
    pub fn code(&self) -> &'static str {
        match self {
            Stage::Ohg => "ohg",
            Stage::Mhg => "mhg",
            Stage::Enhg => "enhg",
            Stage::Nhg => "nhg",
        }
    }

    /// Get the full stage name
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Ohg => "Old High German",
            Stage::Mhg => "Middle High German",
            Stage::Enhg => "Early New High German",
            Stage::Nhg => "New High German",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Stage::Ohg => 0,
            Stage::Mhg => 1,
            Stage::Enhg => 2,
            Stage::Nhg => 3,
        }
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_lowercase().as_str() {
            "ohg" => Ok(Stage::Ohg),
            "mhg" => Ok(Stage::Mhg),
            "enhg" => Ok(Stage::Enhg),
            "nhg" => Ok(Stage::Nhg),
            _ => Err(Error::InvalidStage(code.to_string())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
