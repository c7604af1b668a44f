//! Reference tables: stopwords, action verbs, and section heading phrases.
//!
//! The built-in tables cover general-purpose resumes across industries. A JSON
//! file can replace any of them at startup (see `ATS_REFERENCE_TABLES`); the
//! tables are immutable once the analyzer is built.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::sections::SectionTag;

const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "can", "may", "might", "must", "shall", "i", "you",
    "he", "she", "it", "we", "they", "them", "that", "this", "these", "those", "my", "your",
    "his", "her", "its", "our", "their", "what", "which", "who", "when", "where", "why", "how",
    "all", "each", "every", "both", "some", "any", "no", "nor", "not", "only", "same", "such",
    "just", "also", "into", "through", "during", "before", "after", "above", "below", "up",
    "down", "out", "off", "over", "under", "again", "further", "then", "once", "here", "there",
];

/// Generic action verbs. Matched as substrings of resume words, so "misled"
/// and "ledger" both count as "led".
const DEFAULT_ACTION_VERBS: &[&str] = &[
    "led", "managed", "developed", "created", "implemented", "designed", "built", "launched",
    "established", "coordinated", "directed", "oversaw", "spearheaded", "pioneered",
    "orchestrated", "streamlined", "optimized", "improved", "enhanced", "increased", "achieved",
    "exceeded", "accomplished", "delivered", "executed", "transformed", "revolutionized",
    "innovated", "collaborated", "facilitated", "negotiated", "resolved", "analyzed", "evaluated",
    "assessed", "identified", "proposed", "suggested", "recommended", "initiated", "started",
    "expanded", "scaled", "reduced", "minimized", "eliminated", "automated", "integrated",
    "consolidated", "merged", "restructured", "reorganized", "recruited", "trained", "mentored",
    "coached", "supervised", "supported", "assisted", "enabled", "empowered", "motivated",
    "inspired",
];

/// Section headings commonly recognised by ATS parsers.
const DEFAULT_SECTION_PHRASES: &[&str] = &[
    "summary",
    "professional summary",
    "profile",
    "about",
    "experience",
    "work experience",
    "professional experience",
    "education",
    "academic",
    "qualifications",
    "skills",
    "technical skills",
    "key skills",
    "core competencies",
    "projects",
    "personal projects",
    "academic projects",
    "certifications",
    "licenses",
    "awards",
    "honors",
    "achievements",
    "volunteer",
    "volunteering",
];

/// A heading phrase and the section it signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPhrase {
    pub phrase: String,
    pub tag: SectionTag,
}

impl SectionPhrase {
    /// Builds a phrase entry, classifying it by substring. Returns `None` when
    /// the phrase does not name any known section.
    pub fn classify(phrase: &str) -> Option<Self> {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        SectionTag::classify(&phrase).map(|tag| SectionPhrase { phrase, tag })
    }
}

/// The read-only lookup tables consumed by the analyzer.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub stopwords: HashSet<String>,
    pub action_verbs: Vec<String>,
    pub section_phrases: Vec<SectionPhrase>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            action_verbs: DEFAULT_ACTION_VERBS.iter().map(|s| s.to_string()).collect(),
            section_phrases: DEFAULT_SECTION_PHRASES
                .iter()
                .filter_map(|p| SectionPhrase::classify(p))
                .collect(),
        }
    }
}

/// On-disk shape of a reference table override. Missing fields keep the built-in table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReferenceTablesFile {
    stopwords: Option<Vec<String>>,
    action_verbs: Option<Vec<String>>,
    section_phrases: Option<Vec<String>>,
}

impl ReferenceTables {
    /// Loads tables from a JSON file, falling back to the built-in table for
    /// any field the file omits.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference tables from {}", path.display()))?;
        let tables = Self::from_json_str(&raw)
            .with_context(|| format!("Invalid reference tables in {}", path.display()))?;

        info!(
            "Loaded reference tables from {}: {} stopwords, {} action verbs, {} section phrases",
            path.display(),
            tables.stopwords.len(),
            tables.action_verbs.len(),
            tables.section_phrases.len()
        );
        Ok(tables)
    }

    fn from_json_str(raw: &str) -> Result<Self> {
        let file: ReferenceTablesFile = serde_json::from_str(raw)?;
        let mut tables = Self::default();

        if let Some(stopwords) = file.stopwords {
            tables.stopwords = normalize(stopwords).into_iter().collect();
        }
        if let Some(verbs) = file.action_verbs {
            let mut seen = HashSet::new();
            tables.action_verbs = normalize(verbs)
                .into_iter()
                .filter(|v| seen.insert(v.clone()))
                .collect();
        }
        if let Some(phrases) = file.section_phrases {
            tables.section_phrases = normalize(phrases)
                .into_iter()
                .filter_map(|p| {
                    let classified = SectionPhrase::classify(&p);
                    if classified.is_none() {
                        warn!("Skipping section phrase '{p}': no matching section");
                    }
                    classified
                })
                .collect();
        }

        Ok(tables)
    }
}

fn normalize(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
