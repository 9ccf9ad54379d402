//! Configuration loading for the shift ledger engine.
//!
//! The rule table maps shift codes to durations and sets the normal-hours cap
//! per worked day. It is loaded once and passed explicitly to every stage.
//!
//! # Example
//!
//! ```no_run
//! use shift_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shift_rules.yaml").unwrap();
//! println!("{} shift codes configured", config.rules().durations().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DAILY_HOURS, ShiftRules, ShiftRulesDocument};
