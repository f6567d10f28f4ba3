//! Reporting subject

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The unit an exposure is reported for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// Primary identifier the decision was keyed on
    pub unit_id: String,

    /// Optional alias of `unit_id`, reported under the `new_id` extra-data key
    #[serde(default)]
    pub new_unit_id: Option<String>,

    /// Cluster / decision id
    #[serde(default)]
    pub decision_id: String,

    /// Auxiliary key/value data attached to every record
    #[serde(default)]
    pub expanded_data: HashMap<String, String>,
}

impl UserContext {
    /// Create a context for the given unit id
    pub fn new(unit_id: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            ..Self::default()
        }
    }

    /// Set the unit id alias
    pub fn with_new_unit_id(mut self, new_unit_id: impl Into<String>) -> Self {
        self.new_unit_id = Some(new_unit_id.into());
        self
    }

    /// Set the decision id
    pub fn with_decision_id(mut self, decision_id: impl Into<String>) -> Self {
        self.decision_id = decision_id.into();
        self
    }

    /// Add one expanded data entry
    pub fn with_expanded(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.expanded_data.insert(key.into(), value.into());
        self
    }

    /// Replace the expanded data
    pub fn with_expanded_data(mut self, expanded_data: HashMap<String, String>) -> Self {
        self.expanded_data = expanded_data;
        self
    }

    /// The alias, if one is set and non-empty
    pub fn alias(&self) -> Option<&str> {
        self.new_unit_id.as_deref().filter(|id| !id.is_empty())
    }
}
