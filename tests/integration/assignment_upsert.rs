use rolemap::models::{GapKind, RaciType, RoleCategory, Seniority};
use rolemap::workspace::PersonDraft;

use crate::IntegrationHarness;

fn draft(name: &str, role: &str) -> PersonDraft {
    PersonDraft {
        name: name.to_string(),
        title: role.to_string(),
        canonical_role: role.to_string(),
        category: RoleCategory::Engineering,
        seniority: Seniority::Mid,
        skills: Vec::new(),
        manager_id: None,
    }
}

#[test]
fn upsert_replaces_instead_of_duplicating() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let bob = manager.add_person(&org, draft("Bob", "Backend Engineer")).unwrap();
    let review = manager
        .add_activity(&org, "Review Models", "Model Development", None)
        .unwrap();

    manager
        .upsert_assignment(&org, bob.id, review.id, RaciType::Responsible)
        .unwrap();
    manager
        .upsert_assignment(&org, bob.id, review.id, RaciType::Accountable)
        .unwrap();

    let state = manager.load_state(&org).unwrap();
    assert_eq!(state.assignments.len(), 1);
    assert_eq!(state.assignments[0].raci_type, RaciType::Accountable);

    // The replaced entry satisfies the accountability rule downstream.
    let gaps = manager.analyze(&org).unwrap();
    assert!(gaps.iter().all(|g| g.kind != GapKind::MissingRaci));
}

#[test]
fn none_upsert_removes_the_stored_pair() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let bob = manager.add_person(&org, draft("Bob", "Backend Engineer")).unwrap();
    let review = manager
        .add_activity(&org, "Review Models", "Model Development", None)
        .unwrap();

    manager
        .upsert_assignment(&org, bob.id, review.id, RaciType::Accountable)
        .unwrap();
    manager
        .upsert_assignment(&org, bob.id, review.id, RaciType::None)
        .unwrap();

    let state = manager.load_state(&org).unwrap();
    assert!(state.assignments.is_empty());
}

#[test]
fn removing_a_person_cascades_their_assignments() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let bob = manager.add_person(&org, draft("Bob", "Backend Engineer")).unwrap();
    let ana = manager.add_person(&org, draft("Ana", "Data Engineer")).unwrap();
    let review = manager
        .add_activity(&org, "Review Models", "Model Development", None)
        .unwrap();
    manager
        .upsert_assignment(&org, bob.id, review.id, RaciType::Accountable)
        .unwrap();
    manager
        .upsert_assignment(&org, ana.id, review.id, RaciType::Consulted)
        .unwrap();

    manager.remove_person(&org, bob.id).unwrap();

    let state = manager.load_state(&org).unwrap();
    assert_eq!(state.people.len(), 1);
    assert_eq!(state.assignments.len(), 1);
    assert_eq!(state.assignments[0].person_id, ana.id);
}
