//! Tests for the role-hierarchy evaluation engine

use rstest::rstest;

use medhier::{can_evaluate, direct_reports, evaluates, JobTitle};

#[rstest]
#[case("", "Cirurgia")]
#[case("Chefe de Cirurgia", "")]
#[case("", "")]
fn given_empty_input_when_checking_then_denied(#[case] leader: &str, #[case] subordinate: &str) {
    assert!(!can_evaluate(leader, subordinate));
}

#[test]
fn given_founder_on_both_sides_when_checking_then_denied() {
    assert!(!can_evaluate("Fundador", "Fundador"));
    assert!(!evaluates(JobTitle::Fundador, JobTitle::Fundador));
}

#[test]
fn given_founder_leader_when_checking_every_other_title_then_granted() {
    for title in JobTitle::ALL {
        if title == JobTitle::Fundador {
            continue;
        }
        assert!(
            can_evaluate("Fundador", title.name()),
            "Fundador -> {}",
            title
        );
        assert!(evaluates(JobTitle::Fundador, title));
    }
}

#[test]
fn given_founder_leader_when_subordinate_is_no_known_title_then_granted() {
    // the founder short-circuit runs before any table or title lookup
    assert!(can_evaluate("Fundador", "Zelador"));
}

#[test]
fn given_chief_when_checking_their_specialty_then_granted() {
    assert!(can_evaluate("Chefe de Cirurgia", "Cirurgia"));
    assert!(evaluates(JobTitle::ChefeDeCirurgia, JobTitle::Cirurgia));
}

#[test]
fn given_supervisor_when_checking_grandchild_title_then_denied() {
    // Cirurgia is led by Chefe de Cirurgia, which is led by Supervisor
    // Clínico; the relation must not be transitively closed
    assert!(can_evaluate("Supervisor Clínico", "Chefe de Cirurgia"));
    assert!(!can_evaluate("Supervisor Clínico", "Cirurgia"));
}

#[test]
fn given_director_when_checking_two_tiers_down_then_denied() {
    assert!(can_evaluate("Diretor Geral", "Diretor Clínico"));
    assert!(!can_evaluate("Diretor Geral", "Supervisor Clínico"));
    assert!(!can_evaluate("Diretor Geral", "Recruta"));
}

#[test]
fn given_leaf_title_when_checking_anyone_then_denied() {
    assert!(!can_evaluate("Analista", "Chefe de Recepção"));
    for title in JobTitle::ALL {
        assert!(
            !can_evaluate("Recruta", title.name()),
            "Recruta -> {}",
            title
        );
    }
}

#[test]
fn given_unknown_leader_when_checking_then_denied() {
    assert!(!can_evaluate("Zelador", "Cirurgia"));
}

#[rstest]
#[case("chefe de cirurgia", "Cirurgia")]
#[case("Chefe de Cirurgia", "cirurgia")]
#[case(" Chefe de Cirurgia", "Cirurgia")]
#[case("Chefe de Cirurgia", "Cirurgia ")]
fn given_case_or_padding_variation_when_checking_then_denied(
    #[case] leader: &str,
    #[case] subordinate: &str,
) {
    // comparison is exact: no trimming, no case folding
    assert!(!can_evaluate(leader, subordinate));
}

#[test]
fn given_repeated_queries_when_checking_then_results_are_stable() {
    for _ in 0..3 {
        assert!(can_evaluate("Chefe de Cirurgia", "Cirurgia"));
        assert!(!can_evaluate("Supervisor Clínico", "Cirurgia"));
    }
    // querying never altered the table
    assert_eq!(
        direct_reports(JobTitle::ChefeDeCirurgia),
        [JobTitle::Cirurgia]
    );
}

#[test]
fn given_the_founder_entry_when_reading_the_table_then_it_is_empty() {
    assert!(direct_reports(JobTitle::Fundador).is_empty());
}
