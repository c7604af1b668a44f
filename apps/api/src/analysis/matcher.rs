//! Keyword matcher: classifies job keywords as present in or absent from the resume.
//!
//! Matching is literal: whole-word, case-insensitive, no stemming or synonyms.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::keywords::KeywordEntry;

/// A job keyword found at least once in the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedKeyword {
    pub keyword: String,
    pub resume_matches: u32,
    pub job_count: u32,
}

/// A job keyword with zero whole-word occurrences in the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub keyword: String,
    pub job_count: u32,
}

/// Full partition of a keyword list against one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatch {
    pub matched: Vec<MatchedKeyword>,
    pub missing: Vec<MissingKeyword>,
}

/// Counts non-overlapping, case-insensitive occurrences of `term` bounded by an
/// ASCII word boundary on both sides.
///
/// Word characters are `[A-Za-z0-9_]`, the same set the tokenizer keeps, so a
/// keyword cut out of "Zürich" still matches "Zürich". Regex metacharacters in
/// `term` are matched literally. A term that ends in a non-word character
/// (`c++`) only matches when a word character follows it.
pub fn whole_word_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(term));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            warn!("Could not compile match pattern for '{term}': {e}");
            0
        }
    }
}

/// Splits `keywords` into matched and missing, preserving input order in both lists.
pub fn match_keywords(keywords: &[KeywordEntry], target: &str) -> KeywordMatch {
    let target = target.to_lowercase();
    let mut result = KeywordMatch::default();

    for entry in keywords {
        let occurrences = whole_word_occurrences(&target, &entry.keyword);
        if occurrences > 0 {
            result.matched.push(MatchedKeyword {
                keyword: entry.keyword.clone(),
                resume_matches: u32::try_from(occurrences).unwrap_or(u32::MAX),
                job_count: entry.count,
            });
        } else {
            result.missing.push(MissingKeyword {
                keyword: entry.keyword.clone(),
                job_count: entry.count,
            });
        }
    }

    result
}
