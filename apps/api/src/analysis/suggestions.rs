//! Suggestion engine: an ordered rule table over the derived analysis signals.
//!
//! Every rule whose predicate holds contributes one suggestion. Table order is
//! priority order: when more than `MAX_SUGGESTIONS` fire, the tail is dropped.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::matcher::{MatchedKeyword, MissingKeyword};
use crate::analysis::sections::SectionTag;

pub const MAX_SUGGESTIONS: usize = 8;

/// Missing keywords quoted in the "add missing keywords" advice.
const MAX_LISTED_MISSING: usize = 8;
const MIN_ACTION_VERBS: usize = 5;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 900;

/// Percentages, counts with a scale suffix, or outcome verbs. No word boundaries:
/// "grew" also fires inside "outgrew".
static IMPACT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9]+%|[0-9]+\s*(?:k|million|billion)|improved|increased|reduced|saved|grew")
        .expect("impact pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionType {
    Keywords,
    ActionVerb,
    Metrics,
    Formatting,
    Content,
}

/// A single piece of advice shown to the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub title: String,
    pub text: String,
    pub example: String,
}

impl Suggestion {
    fn new(kind: SuggestionType, title: &str, text: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            text: text.into(),
            example: example.into(),
        }
    }
}

/// Everything the rules look at. `missing` is the full list, not the display-capped one.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub resume: &'a str,
    pub matched: &'a [MatchedKeyword],
    pub missing: &'a [MissingKeyword],
    pub action_verbs_used: usize,
    pub sections_present: &'a BTreeSet<SectionTag>,
    pub ats_score: u32,
    pub word_count: usize,
    pub uses_complex_formatting: bool,
}

struct SuggestionRule {
    applies: fn(&SuggestionContext<'_>) -> bool,
    build: fn(&SuggestionContext<'_>) -> Suggestion,
}

const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        applies: |ctx| !ctx.missing.is_empty(),
        build: missing_keywords,
    },
    SuggestionRule {
        applies: |ctx| (50..80).contains(&ctx.ats_score) && !ctx.matched.is_empty(),
        build: |_| {
            Suggestion::new(
                SuggestionType::Keywords,
                "Reinforce Core Keywords",
                "You match many keywords but can repeat the most critical ones 2–3 times in different sections (summary, experience, skills) while staying natural.",
                "Example: Mention \"React\" in your summary, skills list, and at least one experience bullet if it is a core requirement.",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| ctx.action_verbs_used < MIN_ACTION_VERBS,
        build: |_| {
            Suggestion::new(
                SuggestionType::ActionVerb,
                "Start Bullets With Power Verbs",
                "Many bullets do not start with strong action verbs. Replace weak openers like \"Responsible for\" with specific, impactful verbs.",
                "Replace: \"Worked on backend APIs\"\nWith: \"Developed and optimized REST APIs, reducing average response time by 35%.\"",
            )
        },
    },
    SuggestionRule {
        applies: lacks_measurable_impact,
        build: |_| {
            Suggestion::new(
                SuggestionType::Metrics,
                "Show Measurable Impact",
                "Use numbers to demonstrate impact. ATS and recruiters prioritize resumes with quantifiable achievements.",
                "Example: \"Increased user engagement by 27%\" or \"Reduced page load time from 3.2s to 1.1s.\"",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| !ctx.sections_present.contains(&SectionTag::Skills),
        build: |_| {
            Suggestion::new(
                SuggestionType::Formatting,
                "Add a Clear Skills Section",
                "Include a dedicated \"Skills\" or \"Technical Skills\" section with target-job keywords. This is one of the first places ATS scanners and recruiters look.",
                "Skills: JavaScript, React, Node.js, SQL, Git, REST APIs, Problem-Solving",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| !ctx.sections_present.contains(&SectionTag::Experience),
        build: |_| {
            Suggestion::new(
                SuggestionType::Formatting,
                "Add Work/Project Experience Section",
                "Use a \"Work Experience\" or \"Projects\" section with bullet points under each entry. This helps ATS correctly interpret your timeline and responsibilities.",
                "Work Experience\nSoftware Intern | Company | 06/2024 – 08/2024\n• Developed feature X using Y, resulting in Z.",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| !ctx.sections_present.contains(&SectionTag::Education),
        build: |_| {
            Suggestion::new(
                SuggestionType::Formatting,
                "Include an Education Section",
                "Add an \"Education\" section with degree, institution, and graduation year. Use a simple, consistent date format.",
                "Education\nB.E. Computer Engineering, State University — 2026",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| ctx.word_count < MIN_WORDS,
        build: |_| {
            Suggestion::new(
                SuggestionType::Content,
                "Add More Detail",
                "Your resume looks short. Add more bullet points that describe your responsibilities, tools used, and impact for each role or project.",
                "For each project, aim for 3–5 bullets: tech stack, what you built, how it helped users or the business.",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| ctx.word_count > MAX_WORDS,
        build: |_| {
            Suggestion::new(
                SuggestionType::Content,
                "Trim and Prioritize",
                "The resume may be too long. Focus on recent experience and remove outdated or low-impact details to keep it concise and ATS-friendly.",
                "Keep most space for the last 5–7 years or your most relevant academic/side projects.",
            )
        },
    },
    SuggestionRule {
        applies: |ctx| ctx.uses_complex_formatting,
        build: |_| {
            Suggestion::new(
                SuggestionType::Formatting,
                "Simplify Formatting for ATS",
                "Avoid tables, text boxes, columns, images, and decorative icons. Use a single-column layout with bullet points and standard fonts for better ATS parsing.",
                "Use plain text sections like \"Work Experience\" with • bullets instead of graphics or multi-column designs.",
            )
        },
    },
    SuggestionRule {
        applies: |_| true,
        build: |_| {
            Suggestion::new(
                SuggestionType::Formatting,
                "Use ATS-Friendly File Type",
                "When exporting, prefer .docx or simple PDF as requested in the job posting. Avoid image-based or highly stylized PDFs.",
                "Save as: \"YourName_Role_Resume.docx\" or a text-based PDF.",
            )
        },
    },
];

fn lacks_measurable_impact(ctx: &SuggestionContext<'_>) -> bool {
    !IMPACT_PATTERN.is_match(ctx.resume)
}

fn missing_keywords(ctx: &SuggestionContext<'_>) -> Suggestion {
    let listed: Vec<&str> = ctx
        .missing
        .iter()
        .take(MAX_LISTED_MISSING)
        .map(|m| m.keyword.as_str())
        .collect();
    let top = ctx
        .missing
        .first()
        .map(|m| m.keyword.as_str())
        .unwrap_or("key feature");

    Suggestion::new(
        SuggestionType::Keywords,
        "Add Missing Role Keywords",
        format!(
            "Important terms from the job description are not present in your resume. Naturally include these where they reflect your real experience: {}.",
            listed.join(", ")
        ),
        format!(
            "Pattern: [Action Verb] + [Skill/Tool] + [Result].\nExample: \"Implemented {top} to improve performance by 20%.\""
        ),
    )
}

/// Evaluates the rule table in priority order and keeps the first `MAX_SUGGESTIONS`.
pub fn generate_suggestions(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.build)(ctx))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Owns the data a `SuggestionContext` borrows.
    struct Fixture {
        resume: String,
        matched: Vec<MatchedKeyword>,
        missing: Vec<MissingKeyword>,
        action_verbs_used: usize,
        sections: BTreeSet<SectionTag>,
        ats_score: u32,
        word_count: usize,
        complex: bool,
    }

    impl Fixture {
        /// A resume that trips no optional rule: only the file-type tip fires.
        fn healthy() -> Self {
            Self {
                resume: "Increased throughput by 40%".to_string(),
                matched: vec![matched("rust")],
                missing: vec![],
                action_verbs_used: 12,
                sections: [SectionTag::Skills, SectionTag::Experience, SectionTag::Education]
                    .into_iter()
                    .collect(),
                ats_score: 100,
                word_count: 450,
                complex: false,
            }
        }

        /// A resume that trips every rule it can.
        fn weak() -> Self {
            Self {
                resume: "Worked on things".to_string(),
                matched: vec![matched("sql")],
                missing: (0..12).map(|i| missing(&format!("kw{i}"))).collect(),
                action_verbs_used: 0,
                sections: BTreeSet::new(),
                ats_score: 60,
                word_count: 3,
                complex: true,
            }
        }

        fn ctx(&self) -> SuggestionContext<'_> {
            SuggestionContext {
                resume: &self.resume,
                matched: &self.matched,
                missing: &self.missing,
                action_verbs_used: self.action_verbs_used,
                sections_present: &self.sections,
                ats_score: self.ats_score,
                word_count: self.word_count,
                uses_complex_formatting: self.complex,
            }
        }

        fn titles(&self) -> Vec<String> {
            generate_suggestions(&self.ctx())
                .into_iter()
                .map(|s| s.title)
                .collect()
        }
    }

    fn matched(keyword: &str) -> MatchedKeyword {
        MatchedKeyword {
            keyword: keyword.to_string(),
            resume_matches: 1,
            job_count: 1,
        }
    }

    fn missing(keyword: &str) -> MissingKeyword {
        MissingKeyword {
            keyword: keyword.to_string(),
            job_count: 1,
        }
    }

    #[test]
    fn test_healthy_resume_only_gets_file_type_tip() {
        assert_eq!(Fixture::healthy().titles(), vec!["Use ATS-Friendly File Type"]);
    }

    #[test]
    fn test_output_is_capped_in_priority_order() {
        let titles = Fixture::weak().titles();
        assert_eq!(
            titles,
            vec![
                "Add Missing Role Keywords",
                "Reinforce Core Keywords",
                "Start Bullets With Power Verbs",
                "Show Measurable Impact",
                "Add a Clear Skills Section",
                "Add Work/Project Experience Section",
                "Include an Education Section",
                "Add More Detail",
            ]
        );
    }

    #[test]
    fn test_weak_resume_below_reinforce_band_reaches_formatting_tip() {
        let mut fixture = Fixture::weak();
        fixture.ats_score = 10;
        let titles = fixture.titles();
        assert_eq!(titles.len(), MAX_SUGGESTIONS);
        assert_eq!(titles[0], "Add Missing Role Keywords");
        assert_eq!(titles[7], "Simplify Formatting for ATS");
        assert!(!titles.contains(&"Use ATS-Friendly File Type".to_string()));
    }

    #[test]
    fn test_missing_keywords_lists_first_eight() {
        let fixture = Fixture::weak();
        let suggestions = generate_suggestions(&fixture.ctx());
        let first = &suggestions[0];
        assert_eq!(first.kind, SuggestionType::Keywords);
        assert!(first.text.ends_with("kw0, kw1, kw2, kw3, kw4, kw5, kw6, kw7."));
        assert!(!first.text.contains("kw8"));
        assert!(first.example.contains("Implemented kw0 to improve performance"));
    }

    #[test]
    fn test_reinforce_band_bounds() {
        for (score, fires) in [(49, false), (50, true), (79, true), (80, false)] {
            let mut fixture = Fixture::healthy();
            fixture.ats_score = score;
            let titles = fixture.titles();
            assert_eq!(
                titles.contains(&"Reinforce Core Keywords".to_string()),
                fires,
                "score {score}"
            );
        }
    }

    #[test]
    fn test_reinforce_needs_a_matched_keyword() {
        let mut fixture = Fixture::healthy();
        fixture.ats_score = 60;
        fixture.matched.clear();
        assert!(!fixture.titles().contains(&"Reinforce Core Keywords".to_string()));
    }

    #[test]
    fn test_action_verb_threshold() {
        let mut fixture = Fixture::healthy();
        fixture.action_verbs_used = 4;
        assert_eq!(fixture.titles()[0], "Start Bullets With Power Verbs");
        fixture.action_verbs_used = 5;
        assert_eq!(fixture.titles().len(), 1);
    }

    #[test]
    fn test_impact_pattern_variants() {
        for resume in [
            "Cut costs 15%",
            "Served 10k users",
            "Managed a 2 million dollar budget",
            "Saved the team hours",
            "The company grew",
            "IMPROVED onboarding",
        ] {
            let mut fixture = Fixture::healthy();
            fixture.resume = resume.to_string();
            assert!(
                !fixture.titles().contains(&"Show Measurable Impact".to_string()),
                "{resume} should count as measurable"
            );
        }

        let mut fixture = Fixture::healthy();
        fixture.resume = "Responsible for many things".to_string();
        assert_eq!(fixture.titles()[0], "Show Measurable Impact");
    }

    #[test]
    fn test_each_missing_section_fires_once() {
        let mut fixture = Fixture::healthy();
        fixture.sections = [SectionTag::Experience].into_iter().collect();
        let titles = fixture.titles();
        assert_eq!(
            titles,
            vec![
                "Add a Clear Skills Section",
                "Include an Education Section",
                "Use ATS-Friendly File Type",
            ]
        );
    }

    #[test]
    fn test_length_rules_are_exclusive() {
        let mut fixture = Fixture::healthy();
        fixture.word_count = 199;
        assert_eq!(fixture.titles()[0], "Add More Detail");
        fixture.word_count = 200;
        assert_eq!(fixture.titles().len(), 1);
        fixture.word_count = 900;
        assert_eq!(fixture.titles().len(), 1);
        fixture.word_count = 901;
        assert_eq!(fixture.titles()[0], "Trim and Prioritize");
    }

    #[test]
    fn test_complex_formatting_rule() {
        let mut fixture = Fixture::healthy();
        fixture.complex = true;
        let suggestions = generate_suggestions(&fixture.ctx());
        assert_eq!(suggestions[0].title, "Simplify Formatting for ATS");
        assert_eq!(suggestions[0].kind, SuggestionType::Formatting);
    }

    #[test]
    fn test_suggestion_type_serializes_kebab_case() {
        let suggestion = Suggestion::new(SuggestionType::ActionVerb, "t", "x", "e");
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "action-verb");
    }
}
