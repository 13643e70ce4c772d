//! Public transcription API
//!
//! Wraps stage selection, normalization and scanning behind a small surface
//! shared by the CLI and the Python bindings.

mod config;
mod stage;
mod transcriber;

pub use config::{Config, ConfigBuilder};
pub use stage::Stage;
pub use transcriber::Transcriber;
