//! Evaluation-permission service
//!
//! Resolves two member ids through the directory and asks the hierarchy
//! engine whether the first may evaluate the second.

use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::application::services::MemberDirectoryService;
use crate::domain::{evaluates, Member};

/// Result of an evaluation-permission query between two members.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub allowed: bool,
    pub leader: Member,
    pub subordinate: Member,
}

/// Service answering "may member L evaluate member S".
pub struct EvaluationService {
    directory: Arc<MemberDirectoryService>,
}

impl EvaluationService {
    /// Create a new evaluation service.
    pub fn new(directory: Arc<MemberDirectoryService>) -> Self {
        Self { directory }
    }

    /// Resolve both members and query the engine.
    ///
    /// Directory failures propagate as errors. A record that cannot be
    /// resolved yields no verdict at all, never a silent `false`.
    pub fn can_evaluate(&self, leader_id: &str, subordinate_id: &str) -> ApplicationResult<EvaluationOutcome> {
        let leader = self.directory.find(leader_id)?;
        let subordinate = self.directory.find(subordinate_id)?;

        let allowed = evaluates(leader.title, subordinate.title);
        debug!(
            "can_evaluate: {} ({}) -> {} ({}): {}",
            leader.id, leader.title, subordinate.id, subordinate.title, allowed
        );

        Ok(EvaluationOutcome {
            allowed,
            leader,
            subordinate,
        })
    }
}
