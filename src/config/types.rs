//! Configuration types for shift classification.
//!
//! This module contains the raw document shape deserialized from YAML and the
//! validated, immutable [`ShiftRules`] value that every pipeline stage receives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{EngineError, EngineResult};
use crate::models::normalize_code;

/// Normal-hours cap per worked day used when the document omits one.
pub const DEFAULT_DAILY_HOURS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

fn default_daily_hours() -> Decimal {
    DEFAULT_DAILY_HOURS
}

/// The rule table document as written in YAML.
///
/// ```yaml
/// default_daily_hours: 12
/// turn_durations_hours:
///   D: 12
///   N: 12
///   DTS: 12
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftRulesDocument {
    /// Map of shift code to the hours that shift lasts.
    pub turn_durations_hours: HashMap<String, Decimal>,
    /// Normal-hours cap for a single worked day.
    #[serde(default = "default_daily_hours")]
    pub default_daily_hours: Decimal,
}

/// The validated rule table.
///
/// Codes are stored normalized (trimmed, upper-cased) so lookups match the
/// codes produced by schedule normalization.
///
/// # Example
///
/// ```
/// use shift_ledger::config::ShiftRules;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut durations = BTreeMap::new();
/// durations.insert("d".to_string(), Decimal::from(12));
/// let rules = ShiftRules::new(durations, Decimal::from(12)).unwrap();
///
/// assert_eq!(rules.duration("D"), Some(Decimal::from(12)));
/// assert_eq!(rules.duration("N"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRules {
    /// Map of normalized shift code to duration in hours.
    durations: BTreeMap<String, Decimal>,
    /// Normal-hours cap per worked day.
    default_daily_hours: Decimal,
}

impl ShiftRules {
    /// Builds a rule table, normalizing codes and rejecting negative values.
    pub fn new(
        durations: impl IntoIterator<Item = (String, Decimal)>,
        default_daily_hours: Decimal,
    ) -> EngineResult<Self> {
        if default_daily_hours.is_sign_negative() && !default_daily_hours.is_zero() {
            return Err(EngineError::InvalidRule {
                code: "default_daily_hours".to_string(),
                message: format!("must not be negative, got {}", default_daily_hours),
            });
        }

        let mut normalized = BTreeMap::new();
        for (raw_code, hours) in durations {
            let code = normalize_code(&raw_code);
            if hours.is_sign_negative() && !hours.is_zero() {
                return Err(EngineError::InvalidRule {
                    code,
                    message: format!("duration must not be negative, got {}", hours),
                });
            }
            if normalized.insert(code.clone(), hours).is_some() {
                return Err(EngineError::InvalidRule {
                    code,
                    message: "code is listed more than once".to_string(),
                });
            }
        }

        Ok(Self {
            durations: normalized,
            default_daily_hours,
        })
    }

    /// Returns the duration for an already-normalized code.
    pub fn duration(&self, code: &str) -> Option<Decimal> {
        self.durations.get(code).copied()
    }

    /// Returns the normal-hours cap per worked day.
    pub fn default_daily_hours(&self) -> Decimal {
        self.default_daily_hours
    }

    /// Returns every configured code with its duration, sorted by code.
    pub fn durations(&self) -> &BTreeMap<String, Decimal> {
        &self.durations
    }
}

impl TryFrom<ShiftRulesDocument> for ShiftRules {
    type Error = EngineError;

    fn try_from(document: ShiftRulesDocument) -> EngineResult<Self> {
        ShiftRules::new(document.turn_durations_hours, document.default_daily_hours)
    }
}
