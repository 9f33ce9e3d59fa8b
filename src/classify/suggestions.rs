//! Validation and merge of externally suggested RACI assignments.
//!
//! Enrichment output is untrusted: references are resolved against the
//! known roster and activity catalog, and anything unresolved is dropped
//! before it can reach the matrix.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Activity, Person, RaciType, ResponsibilityAssignment};

/// Raw assignment suggestion as returned by an enrichment provider.
/// `person` may carry an id or a display name; `activity` must be an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAssignment {
    pub person: String,
    pub activity: String,
    pub raci_type: RaciType,
}

/// Filters suggestions down to assignments referencing known entities.
/// Placeholder (`None`) suggestions are dropped, and duplicate
/// (person, activity) pairs collapse to the last suggestion seen,
/// matching the matrix upsert semantics.
pub fn sanitize_suggestions(
    people: &[Person],
    activities: &[Activity],
    suggestions: Vec<SuggestedAssignment>,
) -> Vec<ResponsibilityAssignment> {
    let mut resolved: Vec<ResponsibilityAssignment> = Vec::new();
    for suggestion in suggestions {
        if !suggestion.raci_type.is_assigned() {
            continue;
        }
        let Some(person_id) = resolve_person(people, &suggestion.person) else {
            continue;
        };
        let Some(activity_id) = resolve_activity(activities, &suggestion.activity) else {
            continue;
        };
        if let Some(existing) = resolved
            .iter_mut()
            .find(|a| a.person_id == person_id && a.activity_id == activity_id)
        {
            existing.raci_type = suggestion.raci_type;
        } else {
            resolved.push(ResponsibilityAssignment {
                person_id,
                activity_id,
                raci_type: suggestion.raci_type,
            });
        }
    }
    resolved
}

fn resolve_person(people: &[Person], reference: &str) -> Option<Uuid> {
    if let Ok(id) = Uuid::parse_str(reference) {
        if people.iter().any(|p| p.id == id) {
            return Some(id);
        }
    }
    // Providers sometimes echo the display name instead of the id.
    people.iter().find(|p| p.name == reference).map(|p| p.id)
}

fn resolve_activity(activities: &[Activity], reference: &str) -> Option<Uuid> {
    let id = Uuid::parse_str(reference).ok()?;
    activities.iter().find(|a| a.id == id).map(|a| a.id)
}
