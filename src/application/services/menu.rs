//! Tier-based menu visibility
//!
//! The menu is keyed by tier label, not by job title. It deliberately does
//! not consult the hierarchy engine: a leaf specialist on N5 sees the
//! Evaluations section although the engine lets them evaluate nobody.

use std::fmt;

use crate::domain::Tier;

/// Navigation sections of the front-end sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSection {
    Home,
    Duty,
    Records,
    Evaluations,
    Team,
    Administration,
    Audit,
}

impl MenuSection {
    pub const ALL: [MenuSection; 7] = [
        MenuSection::Home,
        MenuSection::Duty,
        MenuSection::Records,
        MenuSection::Evaluations,
        MenuSection::Team,
        MenuSection::Administration,
        MenuSection::Audit,
    ];

    /// Lowest tier that sees this section.
    pub fn min_tier(&self) -> Tier {
        match self {
            MenuSection::Home => Tier::N0,
            MenuSection::Duty => Tier::N1,
            MenuSection::Records => Tier::N3,
            MenuSection::Evaluations => Tier::N4,
            MenuSection::Team => Tier::N6,
            MenuSection::Administration => Tier::N8,
            MenuSection::Audit => Tier::N10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuSection::Home => "Início",
            MenuSection::Duty => "Plantões",
            MenuSection::Records => "Prontuários",
            MenuSection::Evaluations => "Avaliações",
            MenuSection::Team => "Equipe",
            MenuSection::Administration => "Administração",
            MenuSection::Audit => "Auditoria",
        }
    }
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sections visible to a given tier, in sidebar order.
pub fn visible_sections(tier: Tier) -> Vec<MenuSection> {
    MenuSection::ALL
        .iter()
        .copied()
        .filter(|s| tier >= s.min_tier())
        .collect()
}
