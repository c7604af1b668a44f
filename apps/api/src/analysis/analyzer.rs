//! Analysis orchestrator: runs the full resume-vs-job-description pipeline.
//!
//! `AtsAnalyzer` holds only immutable reference tables, so one instance is
//! shared across requests behind an `Arc` and called concurrently.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::analysis::formatting::uses_complex_formatting;
use crate::analysis::keywords::extract_keywords;
use crate::analysis::matcher::{match_keywords, MatchedKeyword, MissingKeyword};
use crate::analysis::reference::ReferenceTables;
use crate::analysis::scoring::ats_score;
use crate::analysis::sections::{detect_sections, SectionTag};
use crate::analysis::suggestions::{generate_suggestions, Suggestion, SuggestionContext};

/// Matched and missing keyword lists are cut to this length in the result.
pub const MAX_DISPLAYED_KEYWORDS: usize = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("resume text cannot be empty")]
    EmptyResume,

    #[error("job description cannot be empty")]
    EmptyJobDescription,
}

/// Everything the presentation layer needs to render one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ats_score: u32,
    pub matched_keywords: Vec<MatchedKeyword>,
    pub missing_keywords: Vec<MissingKeyword>,
    pub total_job_keywords: usize,
    /// Uncapped; `matched_keywords` may be shorter.
    pub matched_keyword_count: usize,
    pub action_verbs_used: usize,
    pub sections_present: BTreeSet<SectionTag>,
    pub word_count: usize,
    pub uses_complex_formatting: bool,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Default)]
pub struct AtsAnalyzer {
    tables: ReferenceTables,
}

impl AtsAnalyzer {
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Scores `resume` against `job_description` and builds the suggestion list.
    ///
    /// Both inputs are trimmed first; an empty input is rejected. A job
    /// description with no usable keywords is not an error: it scores 0 with
    /// empty keyword lists.
    pub fn analyze(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let resume = resume.trim();
        let job_description = job_description.trim();
        if resume.is_empty() {
            return Err(AnalysisError::EmptyResume);
        }
        if job_description.is_empty() {
            return Err(AnalysisError::EmptyJobDescription);
        }

        let job_keywords = extract_keywords(job_description, &self.tables.stopwords);
        let keyword_match = match_keywords(&job_keywords, resume);
        let score = ats_score(keyword_match.matched.len(), job_keywords.len());

        let sections_present = detect_sections(resume, &self.tables.section_phrases);
        let action_verbs_used = count_action_verbs(resume, &self.tables.action_verbs);
        let word_count = resume.split_whitespace().count();
        let complex_formatting = uses_complex_formatting(resume);

        let suggestions = generate_suggestions(&SuggestionContext {
            resume,
            matched: &keyword_match.matched,
            missing: &keyword_match.missing,
            action_verbs_used,
            sections_present: &sections_present,
            ats_score: score,
            word_count,
            uses_complex_formatting: complex_formatting,
        });

        debug!(
            total_job_keywords = job_keywords.len(),
            matched = keyword_match.matched.len(),
            missing = keyword_match.missing.len(),
            action_verbs_used,
            word_count,
            suggestions = suggestions.len(),
            "Analysis complete: score {score}"
        );

        let matched_keyword_count = keyword_match.matched.len();
        let mut matched_keywords = keyword_match.matched;
        let mut missing_keywords = keyword_match.missing;
        matched_keywords.truncate(MAX_DISPLAYED_KEYWORDS);
        missing_keywords.truncate(MAX_DISPLAYED_KEYWORDS);

        Ok(AnalysisResult {
            ats_score: score,
            matched_keywords,
            missing_keywords,
            total_job_keywords: job_keywords.len(),
            matched_keyword_count,
            action_verbs_used,
            sections_present,
            word_count,
            uses_complex_formatting: complex_formatting,
            suggestions,
        })
    }
}

/// Number of distinct verbs that occur as a substring of some whitespace-separated resume word.
fn count_action_verbs(resume: &str, verbs: &[String]) -> usize {
    let lowered = resume.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    verbs
        .iter()
        .filter(|verb| words.iter().any(|word| word.contains(verb.as_str())))
        .count()
}
