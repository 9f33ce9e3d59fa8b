//! Rule-based organizational health detector.
//!
//! Deterministic analysis of the RACI matrix and the roster. Rules run in a
//! fixed sequence and iterate their inputs in order, so the finding list is
//! reproducible. Finding ids concatenate a rule tag with the triggering
//! entity id, which keeps re-runs idempotent for change detection.

use std::collections::HashSet;

use crate::models::{
    Activity, GapKind, OrgGap, Person, RaciType, ResponsibilityAssignment, Severity,
};
use crate::workspace::AnalysisSettings;

const SAFETY_ROLES: [&str; 3] = ["Responsible AI Specialist", "Model Risk", "Legal"];
const OPS_ROLES: [&str; 2] = ["DevOps / MLOps Engineer", "AI Platform Engineer"];

/// Runs the full rule sequence with default tuning.
pub fn detect_gaps(
    people: &[Person],
    assignments: &[ResponsibilityAssignment],
    activities: &[Activity],
) -> Vec<OrgGap> {
    detect_gaps_with(people, assignments, activities, &AnalysisSettings::default())
}

/// Runs the full rule sequence with explicit tuning.
pub fn detect_gaps_with(
    people: &[Person],
    assignments: &[ResponsibilityAssignment],
    activities: &[Activity],
    settings: &AnalysisSettings,
) -> Vec<OrgGap> {
    let mut gaps = Vec::new();

    // `None` encodes absence and never participates in the matrix.
    let assignments: Vec<&ResponsibilityAssignment> = assignments
        .iter()
        .filter(|a| a.raci_type.is_assigned())
        .collect();

    // Rule 1: every activity needs exactly one Accountable owner.
    for activity in activities {
        let accountables = assignments
            .iter()
            .filter(|a| a.activity_id == activity.id && a.raci_type == RaciType::Accountable)
            .count();

        if accountables == 0 {
            gaps.push(OrgGap {
                id: format!("missing-a-{}", activity.id),
                kind: GapKind::MissingRaci,
                severity: Severity::High,
                message: format!("No one is Accountable for \"{}\"", activity.name),
                context: Some(
                    "Activities without an 'A' assignment often stall as there is no single \
                     owner to drive the final decision."
                        .to_string(),
                ),
            });
        } else if accountables > 1 {
            gaps.push(OrgGap {
                id: format!("multi-a-{}", activity.id),
                kind: GapKind::RiskConcentration,
                severity: Severity::Medium,
                message: format!("Multiple owners Accountable for \"{}\"", activity.name),
                context: Some(format!(
                    "{accountables} people are marked as Accountable. Ownership should be \
                     singular to avoid conflicting decisions."
                )),
            });
        }
    }

    // Rule 2: individuals with too many primary accountabilities.
    for person in people {
        let accountable_count = assignments
            .iter()
            .filter(|a| a.person_id == person.id && a.raci_type == RaciType::Accountable)
            .count();

        if accountable_count > settings.overload_threshold as usize {
            gaps.push(OrgGap {
                id: format!("overload-{}", person.id),
                kind: GapKind::RiskConcentration,
                severity: Severity::High,
                message: format!("Risk Concentration: {} is overloaded", person.name),
                context: Some(format!(
                    "{} is Accountable for {} activities. This exceeds recommended limits \
                     for effective leadership.",
                    person.name, accountable_count
                )),
            });
        }
    }

    // Rule 3: functional clusters need their specialized roles.
    let categories: HashSet<&str> = activities.iter().map(|a| a.category.as_str()).collect();
    let roles: HashSet<&str> = people.iter().map(|p| p.canonical_role.as_str()).collect();

    if categories.contains("Safety & Governance")
        && !SAFETY_ROLES.iter().any(|role| roles.contains(role))
    {
        gaps.push(OrgGap {
            id: "missing-safety-role".to_string(),
            kind: GapKind::MissingRole,
            severity: Severity::High,
            message: "Missing Specialized Safety Leadership".to_string(),
            context: Some(
                "You have \"Safety & Governance\" activities mapped but no specialized \
                 \"Responsible AI\" or \"Model Risk\" roles in the roster."
                    .to_string(),
            ),
        });
    }

    if categories.contains("Production Ops") && !OPS_ROLES.iter().any(|role| roles.contains(role))
    {
        gaps.push(OrgGap {
            id: "missing-ops-role".to_string(),
            kind: GapKind::MissingRole,
            severity: Severity::Medium,
            message: "Potential MLOps Bottleneck".to_string(),
            context: Some(
                "Production-ready AI requires specialized MLOps or Platform Engineering \
                 which is currently missing from your team."
                    .to_string(),
            ),
        });
    }

    // Rule 4: activities with a single Responsible and nobody else involved.
    for activity in activities {
        let involved: Vec<_> = assignments
            .iter()
            .filter(|a| a.activity_id == activity.id)
            .collect();

        if involved.len() == 1 && involved[0].raci_type == RaciType::Responsible {
            gaps.push(OrgGap {
                id: format!("redundancy-{}", activity.id),
                kind: GapKind::Redundancy,
                severity: Severity::Low,
                message: format!("Siloed execution for \"{}\"", activity.name),
                context: Some(
                    "Only one person is involved in this activity. Consider adding \
                     \"Consulted\" or \"Informed\" parties to improve collaboration."
                        .to_string(),
                ),
            });
        }
    }

    gaps
}
