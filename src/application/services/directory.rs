//! Member directory service
//!
//! Resolves member records from the document store and derives the tier
//! from the stored job title.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Member;
use crate::infrastructure::traits::DocumentStore;

/// Service for looking up member records.
pub struct MemberDirectoryService {
    store: Arc<dyn DocumentStore>,
}

impl MemberDirectoryService {
    /// Create a new directory service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetch and validate one member record.
    ///
    /// Failure taxonomy (kept distinct on purpose):
    /// - no document for the id → [`ApplicationError::MemberNotFound`]
    /// - unreadable store → [`ApplicationError::StoreUnavailable`]
    /// - bad JSON, missing or unknown `cargo` → [`ApplicationError::MalformedRecord`]
    pub fn find(&self, id: &str) -> ApplicationResult<Member> {
        debug!("find: id={}", id);
        if id.is_empty() {
            return Err(ApplicationError::MemberNotFound(id.to_string()));
        }

        let content = self
            .store
            .fetch(id)
            .map_err(|e| ApplicationError::StoreUnavailable {
                context: format!("fetch member {}", id),
                source: e,
            })?
            .ok_or_else(|| ApplicationError::MemberNotFound(id.to_string()))?;

        Member::parse(id, &content).map_err(|e| ApplicationError::MalformedRecord {
            id: id.to_string(),
            source: e,
        })
    }

    /// All member records, sorted by tier (highest first), then by name.
    ///
    /// A malformed document fails the whole listing; skipping it would
    /// silently shrink the roster.
    pub fn list(&self) -> ApplicationResult<Vec<Member>> {
        let ids = self
            .store
            .list()
            .map_err(|e| ApplicationError::StoreUnavailable {
                context: "list member documents".to_string(),
                source: e,
            })?;
        debug!("list: {} documents", ids.len());

        let mut members = Vec::with_capacity(ids.len());
        for id in ids {
            members.push(self.find(&id)?);
        }

        members.sort_by(|a, b| {
            b.tier
                .cmp(&a.tier)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(members)
    }
}
