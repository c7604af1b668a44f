// Resume analysis engine.
// Implements: keyword extraction, whole-word matching, scoring, section detection,
// formatting heuristics, and rule-based suggestions. Pure and synchronous; the
// handlers move each analysis onto the blocking pool.

pub mod analyzer;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod reference;
pub mod scoring;
pub mod sections;
pub mod suggestions;
