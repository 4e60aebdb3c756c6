//! Tests for tier-based menu visibility

use medhier::application::services::{visible_sections, MenuSection};
use medhier::{evaluates, JobTitle, Tier};

#[test]
fn given_visitor_tier_when_computing_menu_then_only_home() {
    let sections = visible_sections(Tier::N0);
    assert_eq!(sections, [MenuSection::Home]);
}

#[test]
fn given_founder_tier_when_computing_menu_then_all_sections() {
    let sections = visible_sections(Tier::N10);
    assert_eq!(sections.len(), MenuSection::ALL.len());
}

#[test]
fn given_rising_tiers_when_computing_menus_then_visibility_grows() {
    let mut previous = 0;
    for tier in Tier::ALL {
        let count = visible_sections(tier).len();
        assert!(count >= previous, "{} shows fewer sections", tier);
        previous = count;
    }
}

#[test]
fn given_chief_tier_when_computing_menu_then_team_but_no_administration() {
    let sections = visible_sections(Tier::N6);
    assert!(sections.contains(&MenuSection::Team));
    assert!(!sections.contains(&MenuSection::Administration));
}

#[test]
fn given_leaf_specialist_when_computing_menu_then_evaluations_visible_anyway() {
    // menu visibility is tier-based and independent of evaluation
    // permission: a specialist sees the section yet evaluates nobody
    let tier = JobTitle::Cirurgia.tier();
    assert!(visible_sections(tier).contains(&MenuSection::Evaluations));
    for title in JobTitle::ALL {
        assert!(!evaluates(JobTitle::Cirurgia, title));
    }
}
