//! Tests for EvaluationService

use std::sync::Arc;

use tempfile::TempDir;

use medhier::application::ApplicationError;
use medhier::config::Settings;
use medhier::infrastructure::di::ServiceContainer;
use medhier::infrastructure::traits::FsDocumentStore;

fn create_member_doc(dir: &TempDir, id: &str, content: &str) {
    let path = dir.path().join(format!("{}.json", id));
    std::fs::write(&path, content).expect("write member document");
}

fn container_for(dir: &TempDir) -> ServiceContainer {
    medhier::util::testing::init_test_setup();
    let settings = Settings {
        members_dir: dir.path().to_path_buf(),
    };
    let store = Arc::new(FsDocumentStore::new(dir.path().to_path_buf()));
    ServiceContainer::with_deps(settings, store)
}

#[test]
fn given_chief_and_specialist_when_querying_then_granted() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_member_doc(
        &temp,
        "ana",
        r#"{"name": "Ana Souza", "cargo": "Chefe de Cirurgia"}"#,
    );
    create_member_doc(&temp, "rui", r#"{"name": "Rui Lima", "cargo": "Cirurgia"}"#);
    let container = container_for(&temp);

    // Act
    let outcome = container.evaluation.can_evaluate("ana", "rui").unwrap();

    // Assert
    assert!(outcome.allowed);
    assert_eq!(outcome.leader.name, "Ana Souza");
    assert_eq!(outcome.subordinate.name, "Rui Lima");
}

#[test]
fn given_supervisor_and_grandchild_when_querying_then_resolved_but_denied() {
    let temp = TempDir::new().unwrap();
    create_member_doc(
        &temp,
        "eva",
        r#"{"name": "Eva Reis", "cargo": "Supervisor Clínico"}"#,
    );
    create_member_doc(&temp, "rui", r#"{"name": "Rui Lima", "cargo": "Cirurgia"}"#);
    let container = container_for(&temp);

    let outcome = container.evaluation.can_evaluate("eva", "rui").unwrap();

    // both members resolved fine; the engine simply says no
    assert!(!outcome.allowed);
}

#[test]
fn given_founder_leader_when_querying_any_member_then_granted() {
    let temp = TempDir::new().unwrap();
    create_member_doc(&temp, "gil", r#"{"name": "Gil", "cargo": "Fundador"}"#);
    create_member_doc(&temp, "rui", r#"{"name": "Rui", "cargo": "Recruta"}"#);
    let container = container_for(&temp);

    let outcome = container.evaluation.can_evaluate("gil", "rui").unwrap();

    assert!(outcome.allowed);
}

#[test]
fn given_two_founders_when_querying_then_denied() {
    let temp = TempDir::new().unwrap();
    create_member_doc(&temp, "gil", r#"{"name": "Gil", "cargo": "Fundador"}"#);
    create_member_doc(&temp, "gal", r#"{"name": "Gal", "cargo": "Fundador"}"#);
    let container = container_for(&temp);

    let outcome = container.evaluation.can_evaluate("gil", "gal").unwrap();

    assert!(!outcome.allowed);
}

#[test]
fn given_missing_subordinate_when_querying_then_error_not_false() {
    // a failed lookup must stay distinct from a negative verdict
    let temp = TempDir::new().unwrap();
    create_member_doc(
        &temp,
        "ana",
        r#"{"name": "Ana Souza", "cargo": "Chefe de Cirurgia"}"#,
    );
    let container = container_for(&temp);

    let result = container.evaluation.can_evaluate("ana", "ghost");

    assert!(matches!(
        result,
        Err(ApplicationError::MemberNotFound(ref id)) if id == "ghost"
    ));
}

#[test]
fn given_unavailable_store_when_querying_then_error_not_false() {
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        members_dir: temp.path().join("missing"),
    };
    let store = Arc::new(FsDocumentStore::new(temp.path().join("missing")));
    let container = ServiceContainer::with_deps(settings, store);

    let result = container.evaluation.can_evaluate("ana", "rui");

    assert!(matches!(
        result,
        Err(ApplicationError::StoreUnavailable { .. })
    ));
}
