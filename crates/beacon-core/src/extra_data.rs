//! Extra-data canonicalization
//!
//! A user's expanded data and unit id alias are reported in two shapes: a flat map for
//! structured sinks and a `key=value;key=value` string for row sinks.
//!
//! The alias is inserted under [`NEW_ID_KEY`] first and the expanded data is applied
//! after it, so an expanded entry named `new_id` replaces the alias.
//!
//! Keys and values are not escaped; `=` or `;` inside them make the string form ambiguous.

use crate::types::UserContext;
use std::collections::HashMap;

/// Extra-data key the unit id alias is reported under
pub const NEW_ID_KEY: &str = "new_id";

/// Merged extra data, `None` when the user has neither expanded data nor an alias
pub fn extra_data_map(user: &UserContext) -> Option<HashMap<String, String>> {
    let alias = user.alias();
    if user.expanded_data.is_empty() && alias.is_none() {
        return None;
    }

    let mut extra = HashMap::with_capacity(user.expanded_data.len() + 1);
    if let Some(alias) = alias {
        extra.insert(NEW_ID_KEY.to_string(), alias.to_string());
    }
    for (key, value) in &user.expanded_data {
        extra.insert(key.clone(), value.clone());
    }
    Some(extra)
}

/// Extra data as `key=value` pairs sorted by key and joined with `;`
pub fn encode_extra_data(user: &UserContext) -> String {
    let Some(extra) = extra_data_map(user) else {
        return String::new();
    };

    let mut pairs: Vec<(&String, &String)> = extra.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(";")
}
