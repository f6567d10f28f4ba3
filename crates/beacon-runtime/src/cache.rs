//! Per-project configuration cache
//!
//! The reporter only reads from the cache. Refreshing entries is the owner's job.

use beacon_core::Application;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Lookup of cached project configuration
pub trait ApplicationCache: Send + Sync {
    /// Snapshot of a project's configuration, if cached
    fn get(&self, project_id: &str) -> Option<Arc<Application>>;
}

/// In-memory application cache
///
/// Entries are replaced wholesale, so readers holding a snapshot never observe
/// a partial update.
#[derive(Debug, Default)]
pub struct InMemoryApplicationCache {
    applications: RwLock<HashMap<String, Arc<Application>>>,
}

impl InMemoryApplicationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an application at construction time
    pub fn with_application(self, application: Application) -> Self {
        self.insert(application);
        self
    }

    /// Insert or replace the snapshot of `application.project_id`
    pub fn insert(&self, application: Application) {
        let mut applications = self
            .applications
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        applications.insert(application.project_id.clone(), Arc::new(application));
    }

    pub fn remove(&self, project_id: &str) -> Option<Arc<Application>> {
        self.applications
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(project_id)
    }

    pub fn clear(&self) {
        self.applications
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.applications
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationCache for InMemoryApplicationCache {
    fn get(&self, project_id: &str) -> Option<Arc<Application>> {
        self.applications
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(project_id)
            .cloned()
    }
}
