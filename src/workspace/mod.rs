//! Organization workspace: configuration, per-org state storage, and the
//! roster/matrix editing surface consumed by the analysis layer.

mod config;

pub use config::{
    config_file_path, ensure_workspace_structure, load_or_default, save, workspace_root,
    AnalysisSettings, AppConfig, ParserSettings, WorkspacePaths, CONFIG_FILE_NAME,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::analysis::{self, log_analysis_run, log_org_event, AnalysisEventType};
use crate::catalog;
use crate::classify::suggestions::{sanitize_suggestions, SuggestedAssignment};
use crate::models::{
    Activity, OrgGap, Person, RaciType, ResponsibilityAssignment, RoleCategory, Seniority,
};
use crate::parser::ParsedProfile;

/// Represents an organization with its metadata and filesystem location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
}

/// Full mutable state of one organization: roster, activity catalog, and
/// responsibility matrix.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrgState {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub assignments: Vec<ResponsibilityAssignment>,
}

impl OrgState {
    /// Replaces or inserts the stored RACI type for a (person, activity)
    /// pair. `None` removes the pair — absence is never persisted.
    pub fn upsert_assignment(&mut self, person_id: Uuid, activity_id: Uuid, raci_type: RaciType) {
        if !raci_type.is_assigned() {
            self.assignments
                .retain(|a| !(a.person_id == person_id && a.activity_id == activity_id));
            return;
        }
        if let Some(existing) = self
            .assignments
            .iter_mut()
            .find(|a| a.person_id == person_id && a.activity_id == activity_id)
        {
            existing.raci_type = raci_type;
        } else {
            self.assignments.push(ResponsibilityAssignment {
                person_id,
                activity_id,
                raci_type,
            });
        }
    }
}

/// Roster entry accepted from ingestion; the manager assigns the identity.
#[derive(Debug, Clone)]
pub struct PersonDraft {
    pub name: String,
    pub title: String,
    pub canonical_role: String,
    pub category: RoleCategory,
    pub seniority: Seniority,
    pub skills: Vec<String>,
    pub manager_id: Option<Uuid>,
}

impl PersonDraft {
    /// Builds a draft from a parsed profile plus the functional category
    /// supplied by the classification step.
    pub fn from_profile(profile: &ParsedProfile, category: RoleCategory) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            canonical_role: profile.canonical_role.clone(),
            category,
            seniority: profile.seniority,
            skills: profile.skills.clone(),
            manager_id: None,
        }
    }
}

/// Manages organizations, configuration, and state storage.
pub struct OrgManager {
    pub config: AppConfig,
    pub paths: WorkspacePaths,
    pub config_path: PathBuf,
}

impl OrgManager {
    pub fn new() -> Result<Self> {
        let paths = ensure_workspace_structure()?;
        let mut config = config::load_or_default()?;
        let config_path = config::config_file_path()?;

        // If no last active org, pick the oldest existing one.
        if config.last_active_org_id.is_none() {
            if let Some(first) = Self::discover_orgs(&paths)?.first() {
                config.last_active_org_id = Some(first.id.to_string());
                config::save(&config)?;
            }
        }

        Ok(Self {
            config,
            paths,
            config_path,
        })
    }

    fn discover_orgs(paths: &WorkspacePaths) -> Result<Vec<Organization>> {
        let mut orgs = Vec::new();
        if paths.orgs_dir.exists() {
            for entry in fs::read_dir(&paths.orgs_dir)? {
                let entry = entry?;
                if entry.file_type()?.is_dir() {
                    let metadata_path = entry.path().join("org.json");
                    if metadata_path.exists() {
                        let org: Organization =
                            serde_json::from_slice(&fs::read(&metadata_path)?)?;
                        orgs.push(org);
                    }
                }
            }
        }
        orgs.sort_by_key(|o| o.created_at);
        Ok(orgs)
    }

    pub fn list_orgs(&self) -> Result<Vec<Organization>> {
        Self::discover_orgs(&self.paths)
    }

    pub fn get_org(&self, org_id: &Uuid) -> Result<Option<Organization>> {
        Ok(self.list_orgs()?.into_iter().find(|o| &o.id == org_id))
    }

    pub fn create_org(&mut self, name: &str) -> Result<Organization> {
        let slug = self.unique_slug(name);
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let path = self.paths.orgs_dir.join(&slug);
        fs::create_dir_all(&path)?;
        let org = Organization {
            id,
            name: name.to_string(),
            slug,
            path,
            created_at,
            last_active_at: Some(created_at),
        };
        self.persist_org(&org)?;
        self.save_state(&org, &OrgState::default())?;
        log_org_event(
            &org,
            AnalysisEventType::OrgCreated,
            json!({ "org_id": org.id, "name": org.name }),
        )?;
        self.set_active_org(&org.id)?;
        Ok(org)
    }

    fn persist_org(&self, org: &Organization) -> Result<()> {
        fs::create_dir_all(&org.path)?;
        fs::write(org.path.join("org.json"), serde_json::to_vec_pretty(org)?)?;
        Ok(())
    }

    fn unique_slug(&self, name: &str) -> String {
        let slug = slugify(name);
        if !self.paths.orgs_dir.join(&slug).exists() {
            return slug;
        }
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(4)
            .map(char::from)
            .collect();
        format!("{slug}-{}", suffix.to_lowercase())
    }

    pub fn set_active_org(&mut self, org_id: &Uuid) -> Result<()> {
        self.config.last_active_org_id = Some(org_id.to_string());
        if let Some(mut org) = self.get_org(org_id)? {
            org.last_active_at = Some(Utc::now());
            self.persist_org(&org)?;
            log_org_event(
                &org,
                AnalysisEventType::OrgSelected,
                json!({ "org_id": org.id, "name": org.name }),
            )?;
        }
        config::save(&self.config)?;
        Ok(())
    }

    pub fn active_org(&self) -> Result<Option<Organization>> {
        match &self.config.last_active_org_id {
            Some(id) => {
                let uuid = Uuid::parse_str(id).context("Invalid last_active_org_id in config")?;
                self.get_org(&uuid)
            }
            None => Ok(None),
        }
    }

    pub fn state_path(&self, org: &Organization) -> PathBuf {
        org.path.join("state.json")
    }

    pub fn load_state(&self, org: &Organization) -> Result<OrgState> {
        let path = self.state_path(org);
        if path.exists() {
            let state: OrgState = serde_json::from_slice(&fs::read(&path)?)
                .with_context(|| format!("Failed to parse org state {:?}", path))?;
            Ok(state)
        } else {
            Ok(OrgState::default())
        }
    }

    pub fn save_state(&self, org: &Organization, state: &OrgState) -> Result<()> {
        let path = self.state_path(org);
        fs::write(&path, serde_json::to_vec_pretty(state)?)
            .with_context(|| format!("Failed to write org state {:?}", path))?;
        Ok(())
    }

    /// Accepts a candidate into the roster, assigning its identity.
    pub fn add_person(&self, org: &Organization, draft: PersonDraft) -> Result<Person> {
        let mut state = self.load_state(org)?;
        let person = Person {
            id: Uuid::new_v4(),
            name: draft.name,
            title: draft.title,
            canonical_role: draft.canonical_role,
            category: draft.category,
            seniority: draft.seniority,
            skills: draft.skills,
            manager_id: draft.manager_id,
        };
        state.people.push(person.clone());
        self.save_state(org, &state)?;
        log_org_event(
            org,
            AnalysisEventType::RosterUpdated,
            json!({ "person_id": person.id, "name": person.name }),
        )?;
        Ok(person)
    }

    /// Removes a person and cascades their matrix assignments.
    pub fn remove_person(&self, org: &Organization, person_id: Uuid) -> Result<()> {
        let mut state = self.load_state(org)?;
        state.people.retain(|p| p.id != person_id);
        state.assignments.retain(|a| a.person_id != person_id);
        self.save_state(org, &state)?;
        log_org_event(
            org,
            AnalysisEventType::RosterUpdated,
            json!({ "removed_person_id": person_id }),
        )?;
        Ok(())
    }

    pub fn add_activity(
        &self,
        org: &Organization,
        name: &str,
        category: &str,
        description: Option<String>,
    ) -> Result<Activity> {
        let mut state = self.load_state(org)?;
        let activity = Activity {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            description,
        };
        state.activities.push(activity.clone());
        self.save_state(org, &state)?;
        log_org_event(
            org,
            AnalysisEventType::CatalogUpdated,
            json!({ "activity_id": activity.id, "name": activity.name }),
        )?;
        Ok(activity)
    }

    /// Seeds the activity catalog from a named lifecycle stage template.
    pub fn seed_activities(&self, org: &Organization, stage: &str) -> Result<Vec<Activity>> {
        let seeded = catalog::activity_template(stage)
            .with_context(|| format!("Unknown activity template stage \"{stage}\""))?;
        let mut state = self.load_state(org)?;
        state.activities.extend(seeded.iter().cloned());
        self.save_state(org, &state)?;
        log_org_event(
            org,
            AnalysisEventType::CatalogUpdated,
            json!({ "stage": stage, "seeded": seeded.len() }),
        )?;
        Ok(seeded)
    }

    pub fn upsert_assignment(
        &self,
        org: &Organization,
        person_id: Uuid,
        activity_id: Uuid,
        raci_type: RaciType,
    ) -> Result<()> {
        let mut state = self.load_state(org)?;
        state.upsert_assignment(person_id, activity_id, raci_type);
        self.save_state(org, &state)?;
        log_org_event(
            org,
            AnalysisEventType::MatrixUpdated,
            json!({ "person_id": person_id, "activity_id": activity_id }),
        )?;
        Ok(())
    }

    pub fn remove_assignment(
        &self,
        org: &Organization,
        person_id: Uuid,
        activity_id: Uuid,
    ) -> Result<()> {
        self.upsert_assignment(org, person_id, activity_id, RaciType::None)
    }

    /// Sanitizes enrichment suggestions against the stored roster and
    /// upserts whatever survives. Returns the number of applied entries.
    pub fn apply_suggestions(
        &self,
        org: &Organization,
        suggestions: Vec<SuggestedAssignment>,
    ) -> Result<usize> {
        let mut state = self.load_state(org)?;
        let accepted = sanitize_suggestions(&state.people, &state.activities, suggestions);
        for assignment in &accepted {
            state.upsert_assignment(
                assignment.person_id,
                assignment.activity_id,
                assignment.raci_type,
            );
        }
        self.save_state(org, &state)?;
        log_org_event(
            org,
            AnalysisEventType::MatrixUpdated,
            json!({ "applied_suggestions": accepted.len() }),
        )?;
        Ok(accepted.len())
    }

    /// Runs the gap detector over the stored state with the configured
    /// tuning and records the pass in the event log.
    pub fn analyze(&self, org: &Organization) -> Result<Vec<OrgGap>> {
        let state = self.load_state(org)?;
        let gaps = analysis::detect_gaps_with(
            &state.people,
            &state.assignments,
            &state.activities,
            &self.config.analysis,
        );
        log_analysis_run(org, &state, &gaps)?;
        Ok(gaps)
    }
}

fn slugify(name: &str) -> String {
    let mut slug = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}
