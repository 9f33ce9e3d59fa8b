//! Heuristic profile parser.
//!
//! Extracts structured person data from raw text using ordered keyword
//! tables. Lightweight and explainable: every step is a fixed-order
//! substring scan, so identical input always yields an identical profile.
//! The parser is total — malformed or empty input falls back to sentinel
//! defaults instead of failing.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::models::Seniority;
use crate::workspace::ParserSettings;

pub const DEFAULT_NAME: &str = "Unknown Candidate";
pub const DEFAULT_TITLE: &str = "Professional";

/// Candidate record extracted from free-form profile text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedProfile {
    pub name: String,
    pub title: String,
    pub seniority: Seniority,
    pub canonical_role: String,
    pub confidence: f32,
    pub skills: Vec<String>,
}

/// Parses profile text with the default confidence model.
pub fn parse(text: &str) -> ParsedProfile {
    parse_with(text, &ParserSettings::default())
}

/// Parses profile text with an explicit confidence model.
pub fn parse_with(text: &str, settings: &ParserSettings) -> ParsedProfile {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // Common resume/profile convention: name on the first line, title on
    // the second. This is a documented heuristic, not general NLP.
    let name = lines.first().copied().unwrap_or(DEFAULT_NAME).to_string();
    let title = lines.get(1).copied().unwrap_or(DEFAULT_TITLE).to_string();

    let title_lower = title.to_lowercase();
    let mut confidence = settings.base_confidence;

    let mut seniority = Seniority::Mid;
    for (keyword, level) in catalog::SENIORITY_KEYWORDS {
        if title_lower.contains(keyword) {
            seniority = level;
            confidence += settings.seniority_boost;
            break;
        }
    }

    // Role with the strictly greatest keyword hit count wins; ties keep the
    // earliest catalog entry.
    let mut canonical_role = catalog::GENERALIST_ROLE.to_string();
    let mut best_matches = 0usize;
    for role in catalog::CANONICAL_ROLES {
        let matches = match catalog::keywords_for(role) {
            Some(keywords) => keywords
                .iter()
                .filter(|keyword| title_lower.contains(**keyword))
                .count(),
            None => usize::from(title_lower.contains(&role.to_lowercase())),
        };
        if matches > best_matches {
            best_matches = matches;
            canonical_role = role.to_string();
        }
    }
    if best_matches > 0 {
        confidence += settings.role_boost;
    }

    let text_lower = text.to_lowercase();
    let skills: Vec<String> = catalog::SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(**skill))
        .map(|skill| (*skill).to_string())
        .collect();

    ParsedProfile {
        name,
        title,
        seniority,
        canonical_role,
        confidence: confidence.clamp(0.0, 1.0),
        skills,
    }
}
