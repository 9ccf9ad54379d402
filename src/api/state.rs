//! Application state for the shift ledger API.

use std::sync::Arc;

use crate::config::{ConfigLoader, ShiftRules};

/// Shared application state.
///
/// Holds the rule table loaded at startup. It is read-only for the life of
/// the server.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<ShiftRules>,
}

impl AppState {
    /// Creates a new application state from a rule table.
    pub fn new(rules: ShiftRules) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Creates a new application state from a loaded configuration.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(loader.into_rules())
    }

    /// Returns a reference to the rule table.
    pub fn rules(&self) -> &ShiftRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_rules() {
        let loader =
            ConfigLoader::from_yaml_str("turn_durations_hours:\n  D: 12\n", "inline").unwrap();
        let state = AppState::from_loader(loader);
        let clone = state.clone();

        assert!(Arc::ptr_eq(&state.rules, &clone.rules));
        assert_eq!(clone.rules().duration("D"), Some(Decimal::from(12)));
    }
}
