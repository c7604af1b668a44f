//! Keyword extraction: frequency-ranked, stopword-filtered tokens from a job description.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Upper bound on keywords kept per extraction. Generous enough to cover niche roles.
pub const MAX_KEYWORDS: usize = 80;

/// Tokens of this many characters or fewer are discarded.
const MIN_TOKEN_CHARS: usize = 3;

/// A normalized term and its frequency within one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub count: u32,
}

/// Ranks the salient terms of `text`.
///
/// Text is lowercased; anything other than ASCII word characters, whitespace,
/// `-`, `+` and `#` becomes a separator, so "C++", "C#" and "full-stack"
/// survive as tokens. Entries are ordered by count descending; equal counts
/// keep first-occurrence order.
pub fn extract_keywords(text: &str, stopwords: &HashSet<String>) -> Vec<KeywordEntry> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in normalized.split_whitespace() {
        if token.chars().count() < MIN_TOKEN_CHARS || stopwords.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(token, entries.len());
                entries.push(KeywordEntry {
                    keyword: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(MAX_KEYWORDS);
    entries
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '#')
}
