//! medhier: hospital role management
//!
//! A compiled-in job-title hierarchy with an evaluation-permission engine,
//! a member directory over a JSON document store, and tier-based menu
//! visibility.
//!
//! Layering: `domain` (pure types and the engine) → `application`
//! (services, failure taxonomy) → `infrastructure` (document store, DI) →
//! `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{can_evaluate, direct_reports, evaluates, JobTitle, Member, Tier};
