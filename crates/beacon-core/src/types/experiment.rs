//! Experiment assignment results

use super::user::UserContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One experiment group assignment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group id
    pub id: i64,

    /// Layer the group belongs to
    pub layer_key: String,

    /// Experiment the group belongs to
    pub experiment_key: String,

    /// Unit id type the assignment was keyed on
    #[serde(default)]
    pub unit_id_type: i32,

    /// Scenes the group reports into; empty means the default sink
    #[serde(default)]
    pub scene_ids: Vec<i64>,
}

impl Group {
    pub fn new(id: i64, layer_key: impl Into<String>, experiment_key: impl Into<String>) -> Self {
        Self {
            id,
            layer_key: layer_key.into(),
            experiment_key: experiment_key.into(),
            unit_id_type: 0,
            scene_ids: Vec::new(),
        }
    }

    pub fn with_unit_id_type(mut self, unit_id_type: i32) -> Self {
        self.unit_id_type = unit_id_type;
        self
    }

    pub fn with_scene_ids(mut self, scene_ids: Vec<i64>) -> Self {
        self.scene_ids = scene_ids;
        self
    }
}

/// Assignments produced by a single call, keyed by layer key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentList {
    pub user_ctx: Arc<UserContext>,
    pub data: BTreeMap<String, Group>,
}

impl ExperimentList {
    pub fn new(user_ctx: Arc<UserContext>) -> Self {
        Self {
            user_ctx,
            data: BTreeMap::new(),
        }
    }

    /// Add a group under its own layer key
    pub fn with_group(mut self, group: Group) -> Self {
        self.insert(group);
        self
    }

    /// Insert a group under its own layer key, replacing any previous one
    pub fn insert(&mut self, group: Group) {
        self.data.insert(group.layer_key.clone(), group);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Group ids in layer-key order
    pub fn group_ids(&self) -> Vec<i64> {
        self.data.values().map(|group| group.id).collect()
    }
}

/// The assignment of a single layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentResult {
    pub user_ctx: Arc<UserContext>,
    pub layer_key: String,
    /// `None` when the unit did not hit any group in the layer
    pub group: Option<Group>,
}

impl ExperimentResult {
    pub fn new(user_ctx: Arc<UserContext>, layer_key: impl Into<String>, group: Option<Group>) -> Self {
        Self {
            user_ctx,
            layer_key: layer_key.into(),
            group,
        }
    }

    /// Wrap into a one-entry list keyed by this result's layer key
    pub fn to_list(&self) -> Option<ExperimentList> {
        let group = self.group.clone()?;
        let mut list = ExperimentList::new(Arc::clone(&self.user_ctx));
        list.data.insert(self.layer_key.clone(), group);
        Some(list)
    }
}
