//! Organizational data model shared by the parser, the gap detector, and
//! the workspace store.
//!
//! People, activities, and responsibility assignments are created by the
//! ingestion and matrix-editing flows and passed by value into the analysis
//! functions; the analysis side never mutates them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Functional cluster a canonical role belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    #[serde(rename = "Product")]
    Product,
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Data & AI")]
    Data,
    #[serde(rename = "Ops & Infrastructure")]
    Ops,
    #[serde(rename = "Governance & Risk")]
    Governance,
    #[serde(rename = "Design")]
    Design,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

/// Roster entry. `canonical_role` is either a catalog entry or the
/// `Generalist` sentinel when no classification matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub canonical_role: String,
    pub category: RoleCategory,
    pub seniority: Seniority,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Weak reference to the managing person, if any.
    pub manager_id: Option<Uuid>,
}

/// Immutable reference data describing one unit of organizational work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

/// RACI assignment type. `None` encodes absence: it is never persisted and
/// is filtered out before the matrix reaches the detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RaciType {
    #[serde(rename = "R")]
    Responsible,
    #[serde(rename = "A")]
    Accountable,
    #[serde(rename = "C")]
    Consulted,
    #[serde(rename = "I")]
    Informed,
    #[serde(rename = "-")]
    None,
}

impl RaciType {
    pub fn is_assigned(&self) -> bool {
        !matches!(self, RaciType::None)
    }
}

/// One cell of the responsibility matrix. At most one stored entry exists
/// per (person, activity) pair; upserts replace rather than append.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponsibilityAssignment {
    pub person_id: Uuid,
    pub activity_id: Uuid,
    pub raci_type: RaciType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    MissingRole,
    MissingRaci,
    RiskConcentration,
    Redundancy,
}

impl GapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapKind::MissingRole => "missing_role",
            GapKind::MissingRaci => "missing_raci",
            GapKind::RiskConcentration => "risk_concentration",
            GapKind::Redundancy => "redundancy",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Structural finding produced by the gap detector. Findings are ephemeral
/// and recomputed in full on every pass; the id is derived from the rule tag
/// and the triggering entity so unchanged input yields identical ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrgGap {
    pub id: String,
    pub kind: GapKind,
    pub severity: Severity,
    pub message: String,
    pub context: Option<String>,
}
