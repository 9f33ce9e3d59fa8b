//! Profile classification capability.
//!
//! Two implementations of one capability: an optional remote enrichment
//! provider supplied by the caller, and the always-available keyword
//! heuristic. `ClassifierService` composes them so the deterministic path
//! never depends on the network call succeeding.

pub mod suggestions;

use std::fmt;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::models::RoleCategory;
use crate::parser;
use crate::workspace::ParserSettings;

/// Outcome of classifying free-form profile text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub canonical_role: String,
    pub category: RoleCategory,
    pub confidence: f32,
    pub reasoning: Option<String>,
    /// True when the heuristic path produced this result.
    pub fallback: bool,
}

/// Capability of mapping profile text to a canonical role.
pub trait RoleClassifier {
    fn classify(&self, text: &str) -> Result<Classification>;
}

/// Deterministic keyword classifier backed by the heuristic parser.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    settings: ParserSettings,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ParserSettings) -> Self {
        Self { settings }
    }
}

impl RoleClassifier for HeuristicClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        let profile = parser::parse_with(text, &self.settings);
        Ok(Classification {
            canonical_role: profile.canonical_role,
            category: RoleCategory::Engineering,
            confidence: profile.confidence,
            reasoning: Some("Categorized using keyword pattern matching.".to_string()),
            fallback: true,
        })
    }
}

/// Transient throttling failure surfaced by remote providers. Detectable
/// through an `anyhow` chain so the retry loop can tell it apart from
/// permanent failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimited;

impl fmt::Display for RateLimited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remote classification provider rate limited the request")
    }
}

impl std::error::Error for RateLimited {}

pub fn is_rate_limited(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<RateLimited>())
}

/// Exponential backoff applied to rate-limited remote calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Retry immediately instead of sleeping. Used by tests and callers
    /// that debounce externally.
    pub const fn no_backoff(max_retries: u32) -> Self {
        Self {
            max_retries,
            initial_backoff: Duration::ZERO,
            multiplier: 2,
        }
    }
}

/// Composes a remote classifier with the heuristic fallback. The remote
/// provider is attempted first under the retry policy; any final failure
/// silently degrades to the deterministic path.
pub struct ClassifierService {
    primary: Option<Box<dyn RoleClassifier>>,
    fallback: HeuristicClassifier,
    retry: RetryPolicy,
}

impl ClassifierService {
    pub fn heuristic_only() -> Self {
        Self {
            primary: None,
            fallback: HeuristicClassifier::new(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_primary(primary: Box<dyn RoleClassifier>) -> Self {
        Self {
            primary: Some(primary),
            fallback: HeuristicClassifier::new(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn classify(&self, text: &str) -> Result<Classification> {
        if text.trim().is_empty() {
            bail!("Empty input text provided for classification");
        }
        if let Some(primary) = &self.primary {
            if let Ok(result) = self.classify_with_retry(primary.as_ref(), text) {
                return Ok(result);
            }
        }
        self.fallback.classify(text)
    }

    fn classify_with_retry(
        &self,
        provider: &dyn RoleClassifier,
        text: &str,
    ) -> Result<Classification> {
        let mut backoff = self.retry.initial_backoff;
        let mut retries_left = self.retry.max_retries;
        loop {
            match provider.classify(text) {
                Ok(result) => return Ok(result),
                Err(err) if is_rate_limited(&err) && retries_left > 0 => {
                    if !backoff.is_zero() {
                        thread::sleep(backoff);
                    }
                    backoff *= self.retry.multiplier;
                    retries_left -= 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
