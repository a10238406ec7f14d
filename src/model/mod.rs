// File: ./src/model/mod.rs
pub mod date;
pub mod item;
pub mod matcher;
pub mod parser;
pub mod similarity;
pub(crate) mod text;

pub use date::{DateExtractor, extract_date};
pub use item::{
    DateExtractionResult, DateKind, DateType, MatchedProject, ParseTrace, ParsedIntake,
    ProjectCandidate, ProjectMatch, ProjectMatchResult,
};
pub use matcher::{PATTERN_RULES, PatternRule, ProjectMatcher, match_project};
pub use parser::{DictationParser, parse_intake};
pub use similarity::{NormalizedLevenshtein, StringDistance, WindowedLevenshtein};
