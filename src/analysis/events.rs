//! Structured event log for organization lifecycle and analysis runs.
//!
//! Appended as JSONL under each organization directory. Analysis events
//! carry a sha2 hash of the canonical state payload so unchanged input is
//! provably unchanged across runs.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::OrgGap;
use crate::workspace::{OrgState, Organization};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisEventType {
    OrgCreated,
    OrgSelected,
    RosterUpdated,
    CatalogUpdated,
    MatrixUpdated,
    AnalysisCompleted,
}

/// General-purpose event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEvent {
    pub event_id: Uuid,
    pub org_id: Uuid,
    pub event_type: AnalysisEventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

pub struct AnalysisLog {
    events_path: PathBuf,
}

impl AnalysisLog {
    pub fn for_org(org: &Organization) -> Self {
        Self {
            events_path: org.path.join("events.jsonl"),
        }
    }

    pub fn append_event(&self, event: &AnalysisEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn read_events(&self) -> Result<Vec<AnalysisEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|line| !line.trim().is_empty()) {
            events.push(serde_json::from_str(line)?);
        }
        Ok(events)
    }
}

/// Hash of the canonical JSON encoding of the org state.
pub fn state_snapshot_hash(state: &OrgState) -> Result<String> {
    let payload = serde_json::to_vec(state)?;
    let mut hasher = Sha256::new();
    hasher.update(&payload);
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn log_org_event(
    org: &Organization,
    event_type: AnalysisEventType,
    details: serde_json::Value,
) -> Result<Uuid> {
    let event = AnalysisEvent {
        event_id: Uuid::new_v4(),
        org_id: org.id,
        event_type,
        timestamp: Utc::now(),
        details,
    };
    AnalysisLog::for_org(org).append_event(&event)?;
    Ok(event.event_id)
}

/// Records a completed detector pass with its finding ids and state hash.
pub fn log_analysis_run(org: &Organization, state: &OrgState, gaps: &[OrgGap]) -> Result<Uuid> {
    let gap_ids: Vec<&str> = gaps.iter().map(|g| g.id.as_str()).collect();
    log_org_event(
        org,
        AnalysisEventType::AnalysisCompleted,
        json!({
            "gap_count": gaps.len(),
            "gap_ids": gap_ids,
            "state_hash": state_snapshot_hash(state)?,
        }),
    )
}
