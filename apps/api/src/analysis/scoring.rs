use serde::{Deserialize, Serialize};

/// Percentage of job keywords present in the resume, rounded half away from zero.
/// A job description with no keywords scores 0.
pub fn ats_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = matched.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u32
}

/// Coarse rating of an ATS score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::High,
            s if s >= 50 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ScoreBand::High => "Great Match!",
            ScoreBand::Medium => "Decent Match",
            ScoreBand::Low => "Needs Improvement",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::High => {
                "Your resume is strongly aligned with this job description and is likely to pass ATS screening."
            }
            ScoreBand::Medium => {
                "Your resume matches many keywords but still has room to improve. Apply the suggestions below to strengthen it."
            }
            ScoreBand::Low => {
                "Your resume is missing key terms and/or structure for this role. Use the suggestions below to optimize it."
            }
        }
    }
}
