//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift rule
//! table from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ShiftRules, ShiftRulesDocument};

/// Loads and provides access to the shift rule table.
///
/// # File Format
///
/// ```text
/// config/shift_rules.yaml
///
/// default_daily_hours: 12      # optional, defaults to 12
/// turn_durations_hours:
///   D: 12
///   N: 12
///   FOTS: 12
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shift_rules.yaml").unwrap();
/// println!("Daily cap: {}h", loader.rules().default_daily_hours());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: ShiftRules,
}

impl ConfigLoader {
    /// Loads the rule table from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file is not valid YAML or lacks `turn_durations_hours`
    /// - A duration or the daily cap is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_ledger::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/shift_rules.yaml")?;
    /// # Ok::<(), shift_ledger::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a rule table held in memory.
    ///
    /// `origin` labels the document in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_ledger::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let yaml = "turn_durations_hours:\n  D: 12\n  DTS: 14\n";
    /// let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
    ///
    /// assert_eq!(loader.duration("DTS"), Some(Decimal::from(14)));
    /// assert_eq!(loader.rules().default_daily_hours(), Decimal::from(12));
    /// ```
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let document: ShiftRulesDocument =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let rules = ShiftRules::try_from(document)?;
        debug!(
            origin = %origin,
            codes = rules.durations().len(),
            default_daily_hours = %rules.default_daily_hours(),
            "Loaded shift rule table"
        );

        Ok(Self { rules })
    }

    /// Returns the validated rule table.
    pub fn rules(&self) -> &ShiftRules {
        &self.rules
    }

    /// Consumes the loader and returns the rule table.
    pub fn into_rules(self) -> ShiftRules {
        self.rules
    }

    /// Gets the configured duration of a shift code.
    ///
    /// The code is normalized before the lookup.
    pub fn duration(&self, code: &str) -> Option<Decimal> {
        self.rules.duration(&crate::models::normalize_code(code))
    }
}
