use rolemap::classify::suggestions::SuggestedAssignment;
use rolemap::models::{RaciType, RoleCategory};
use rolemap::parser;
use rolemap::workspace::{load_or_default, save, AppConfig, PersonDraft};

use crate::IntegrationHarness;

#[test]
fn defaults_match_the_documented_tuning() {
    let config = AppConfig::default();
    assert_eq!(config.analysis.overload_threshold, 4);
    assert!((config.parser.base_confidence - 0.5).abs() < f32::EPSILON);
    assert!((config.parser.seniority_boost - 0.1).abs() < f32::EPSILON);
    assert!((config.parser.role_boost - 0.2).abs() < f32::EPSILON);
}

#[test]
fn config_round_trips_through_toml() {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.analysis.overload_threshold = 6;
    save(&config).unwrap();

    assert!(harness
        .workspace_path()
        .join("config")
        .join("config.toml")
        .exists());
    let loaded = load_or_default().unwrap();
    assert_eq!(loaded.analysis.overload_threshold, 6);
}

#[test]
fn create_org_sets_the_active_org() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let active = manager.active_org().unwrap().expect("active org missing");
    assert_eq!(active.id, org.id);
    assert_eq!(active.slug, "acme-ai");
}

#[test]
fn template_seeding_populates_the_catalog() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let seeded = manager.seed_activities(&org, "Safety & Governance").unwrap();
    assert_eq!(seeded.len(), 7);

    let state = manager.load_state(&org).unwrap();
    assert_eq!(state.activities.len(), 7);
    assert!(state
        .activities
        .iter()
        .all(|a| a.category == "Safety & Governance"));

    assert!(manager.seed_activities(&org, "Unknown Stage").is_err());
}

#[test]
fn parsed_profiles_are_admitted_with_fresh_identities() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let profile = parser::parse("John Doe\nMachine Learning Engineer\nPyTorch and Python");
    let draft = PersonDraft::from_profile(&profile, RoleCategory::Engineering);
    let person = manager.add_person(&org, draft).unwrap();

    let state = manager.load_state(&org).unwrap();
    assert_eq!(state.people.len(), 1);
    assert_eq!(state.people[0].id, person.id);
    assert_eq!(state.people[0].canonical_role, "Machine Learning Engineer");
    assert_eq!(state.people[0].skills, vec!["python", "pytorch"]);
}

#[test]
fn applied_suggestions_are_sanitized_against_the_roster() {
    let harness = IntegrationHarness::new();
    let mut manager = harness.org_manager();
    let org = manager.create_org("Acme AI").unwrap();

    let profile = parser::parse("Ana Ruiz\nData Engineer");
    let ana = manager
        .add_person(&org, PersonDraft::from_profile(&profile, RoleCategory::Data))
        .unwrap();
    let etl = manager
        .add_activity(&org, "Data Pipeline Engineering (ETL)", "Data Lifecycle", None)
        .unwrap();

    let applied = manager
        .apply_suggestions(
            &org,
            vec![
                SuggestedAssignment {
                    person: "Ana Ruiz".to_string(),
                    activity: etl.id.to_string(),
                    raci_type: RaciType::Accountable,
                },
                SuggestedAssignment {
                    person: "Nobody".to_string(),
                    activity: etl.id.to_string(),
                    raci_type: RaciType::Responsible,
                },
            ],
        )
        .unwrap();
    assert_eq!(applied, 1);

    let state = manager.load_state(&org).unwrap();
    assert_eq!(state.assignments.len(), 1);
    assert_eq!(state.assignments[0].person_id, ana.id);
    assert_eq!(state.assignments[0].raci_type, RaciType::Accountable);
}
