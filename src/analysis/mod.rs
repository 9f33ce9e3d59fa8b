pub mod events;
mod gap;

pub use events::{
    log_analysis_run, log_org_event, state_snapshot_hash, AnalysisEvent, AnalysisEventType,
    AnalysisLog,
};
pub use gap::{detect_gaps, detect_gaps_with};
