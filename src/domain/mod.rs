//! Domain layer: titles, hierarchy and member records
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod hierarchy;
pub mod member;
pub mod title;

pub use error::DomainError;
pub use hierarchy::{can_evaluate, direct_reports, evaluates};
pub use member::Member;
pub use title::{JobTitle, Tier};
