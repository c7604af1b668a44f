//! Formatting heuristic: flags layout that commonly breaks ATS parsing.
//!
//! Purely syntactic; a single pipe character is enough to trip it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Table borders and decorative bullets.
const RED_FLAG_CHARS: &[char] = &['|', '│', '►', '▪'];

/// Runs of tabs, or ASCII box borders and separators.
static LAYOUT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t{2,}|={4,}|-{4,}").expect("layout pattern is valid"));

pub fn uses_complex_formatting(text: &str) -> bool {
    text.contains(RED_FLAG_CHARS) || LAYOUT_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_resume_is_simple() {
        let text = "Experience\n- Built APIs in Rust\n- Cut latency by 30%\n\nEducation\nB.Sc. Physics";
        assert!(!uses_complex_formatting(text));
    }

    #[test]
    fn test_table_characters_flag() {
        assert!(uses_complex_formatting("Skills | Rust | Go"));
        assert!(uses_complex_formatting("│ Experience │"));
        assert!(uses_complex_formatting("► Led migration"));
        assert!(uses_complex_formatting("▪ Owned roadmap"));
    }

    #[test]
    fn test_repeated_tabs_flag() {
        assert!(uses_complex_formatting("Rust\t\tGo"));
        assert!(!uses_complex_formatting("Rust\tGo"));
    }

    #[test]
    fn test_separator_runs_flag() {
        assert!(uses_complex_formatting("EXPERIENCE\n===="));
        assert!(uses_complex_formatting("----------"));
        assert!(!uses_complex_formatting("2019 --- 2021"));
        assert!(!uses_complex_formatting("a == b"));
    }
}
