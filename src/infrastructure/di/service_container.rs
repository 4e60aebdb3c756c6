//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{EvaluationService, MemberDirectoryService};
use crate::config::Settings;
use crate::infrastructure::traits::{DocumentStore, FsDocumentStore};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Document store abstraction
    pub store: Arc<dyn DocumentStore>,

    /// Member directory lookup
    pub directory: Arc<MemberDirectoryService>,

    /// Evaluation-permission queries between members
    pub evaluation: EvaluationService,
}

impl ServiceContainer {
    /// Create a new service container with the filesystem store.
    pub fn new(settings: Settings) -> Self {
        let store = Arc::new(FsDocumentStore::new(settings.members_dir.clone()));
        Self::with_deps(settings, store)
    }

    /// Create a service container with a custom store (for testing).
    pub fn with_deps(settings: Settings, store: Arc<dyn DocumentStore>) -> Self {
        let settings = Arc::new(settings);
        let directory = Arc::new(MemberDirectoryService::new(store.clone()));
        let evaluation = EvaluationService::new(directory.clone());

        Self {
            settings,
            store,
            directory,
            evaluation,
        }
    }
}
