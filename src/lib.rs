pub mod analysis;
pub mod catalog;
pub mod classify;
pub mod models;
pub mod parser;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use analysis::{detect_gaps, detect_gaps_with, AnalysisLog};
pub use models::{Activity, GapKind, OrgGap, Person, RaciType, ResponsibilityAssignment, Severity};
pub use parser::{parse, ParsedProfile};
pub use workspace::{AppConfig, OrgManager, OrgState, Organization};
