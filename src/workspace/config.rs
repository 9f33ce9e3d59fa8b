//! Configuration primitives for RoleMap workspaces.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/RoleMap/config/config.toml on Windows
//!   $XDG_DATA_HOME/RoleMap/config/config.toml on Linux
//!   ~/Library/Application Support/RoleMap/config/config.toml on macOS
//!
//! The config tracks the last active organization and the tuning knobs for
//! the heuristic parser and the gap detector. The thresholds and confidence
//! increments are deliberate defaults, not hard invariants, so they live
//! here rather than as constants in the analysis code.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Identifier of the organization that was active when the tool last ran.
    pub last_active_org_id: Option<String>,
    /// Heuristic parser tuning (base confidence and per-signal boosts).
    #[serde(default)]
    pub parser: ParserSettings,
    /// Gap detector tuning (overload threshold).
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// Confidence model for the heuristic profile parser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Confidence assigned before any keyword signal is found.
    #[serde(default = "default_base_confidence")]
    pub base_confidence: f32,
    /// Increment applied when a seniority keyword matches the title.
    #[serde(default = "default_seniority_boost")]
    pub seniority_boost: f32,
    /// Increment applied when at least one role keyword matches the title.
    #[serde(default = "default_role_boost")]
    pub role_boost: f32,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            base_confidence: default_base_confidence(),
            seniority_boost: default_seniority_boost(),
            role_boost: default_role_boost(),
        }
    }
}

const fn default_base_confidence() -> f32 {
    0.5
}

const fn default_seniority_boost() -> f32 {
    0.1
}

const fn default_role_boost() -> f32 {
    0.2
}

/// Gap detector tuning parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// A person Accountable for more than this many activities is flagged
    /// as overloaded.
    #[serde(default = "default_overload_threshold")]
    pub overload_threshold: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            overload_threshold: default_overload_threshold(),
        }
    }
}

const fn default_overload_threshold() -> u32 {
    4
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Filesystem locations backing a RoleMap workspace.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub orgs_dir: PathBuf,
}

/// Returns the root directory where RoleMap stores data.
///
/// Order of precedence:
/// 1. `ROLEMAP_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("ROLEMAP_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("RoleMap"))
}

/// Returns the config directory under the workspace root.
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Creates the workspace directory structure if it does not exist yet.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let orgs_dir = root.join("orgs");
    fs::create_dir_all(&orgs_dir)
        .with_context(|| format!("Failed to create workspace directory {:?}", orgs_dir))?;
    fs::create_dir_all(config_dir()?)?;
    Ok(WorkspacePaths { root, orgs_dir })
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(CONFIG_FILE_NAME);
    let data = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}
