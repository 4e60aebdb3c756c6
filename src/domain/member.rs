//! Member records from the document store

use serde::Deserialize;

use crate::domain::error::DomainError;
use crate::domain::title::{JobTitle, Tier};

/// A validated member record.
///
/// The tier is always derived from the title; a level stored in the
/// document is never trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub title: JobTitle,
    pub tier: Tier,
}

/// Wire shape of a stored member document (camelCase field names, written
/// by the front-end that owns the store). Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberDocument {
    name: Option<String>,
    cargo: Option<String>,
}

impl Member {
    /// Parse a stored JSON document.
    ///
    /// Rejects documents without a `cargo` field and cargo values that are
    /// not known titles. Title matching is exact: a misspelled title is a
    /// malformed record, not a leaf role.
    pub fn parse(id: &str, content: &str) -> Result<Self, DomainError> {
        let doc: MemberDocument = serde_json::from_str(content)
            .map_err(|e| DomainError::InvalidDocument(e.to_string()))?;

        let cargo = doc.cargo.ok_or(DomainError::MissingField("cargo"))?;
        let title = JobTitle::from_name(&cargo).ok_or(DomainError::UnknownTitle(cargo))?;

        Ok(Self {
            id: id.to_string(),
            name: doc.name.unwrap_or_default(),
            title,
            tier: title.tier(),
        })
    }
}
