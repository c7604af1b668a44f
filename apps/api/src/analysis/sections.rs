use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::whole_word_occurrences;
use crate::analysis::reference::SectionPhrase;

/// Canonical resume sections. Declaration order is the serialization order of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionTag {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
    Volunteer,
}

/// Substring rules, checked in order; the first hit wins.
const CLASSIFICATION_RULES: &[(&[&str], SectionTag)] = &[
    (&["skill", "competenc"], SectionTag::Skills),
    (&["experience"], SectionTag::Experience),
    (&["education", "academic", "qualification"], SectionTag::Education),
    (&["summary", "profile", "about"], SectionTag::Summary),
    (&["project"], SectionTag::Projects),
    (&["certification", "license"], SectionTag::Certifications),
    (&["award", "honor", "achievement"], SectionTag::Awards),
    (&["volunteer"], SectionTag::Volunteer),
];

impl SectionTag {
    /// Maps a lowercase heading phrase to the section it names.
    pub fn classify(phrase: &str) -> Option<SectionTag> {
        CLASSIFICATION_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| phrase.contains(n)))
            .map(|(_, tag)| *tag)
    }
}

/// Returns the set of sections whose heading phrases occur as whole words in the resume.
pub fn detect_sections(resume: &str, phrases: &[SectionPhrase]) -> BTreeSet<SectionTag> {
    let text = resume.to_lowercase();
    phrases
        .iter()
        .filter(|p| whole_word_occurrences(&text, &p.phrase) > 0)
        .map(|p| p.tag)
        .collect()
}
