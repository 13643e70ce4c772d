//! Production model and rule tables

pub mod config;
pub mod loader;
pub mod production;
pub mod table;
pub mod tables;

pub use config::RuleTableConfig;
pub use production::{CharSet, Context, Production};
pub use table::{RuleTable, Shadowed};
