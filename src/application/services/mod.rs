//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the I/O boundary trait (DocumentStore) but are
//! themselves concrete structs, not traits.

mod directory;
mod evaluation;
mod menu;

pub use directory::MemberDirectoryService;
pub use evaluation::{EvaluationOutcome, EvaluationService};
pub use menu::{visible_sections, MenuSection};
