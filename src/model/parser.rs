// File: src/model/parser.rs
//! Turns one dictated sentence into a task title with optional dates and project.
//!
//! Steps run in a fixed order: dates first (so "next Monday" is gone before
//! the looser project patterns look at the text), then the project, then the
//! title clean-up on whatever is left.
use crate::config::{ParserConfig, default_filler_prefixes};
use crate::model::date::DateExtractor;
use crate::model::item::{DateKind, MatchedProject, ParseTrace, ParsedIntake, ProjectCandidate};
use crate::model::matcher::ProjectMatcher;
use crate::model::text::tidy;
use chrono::{DateTime, Utc};

pub struct DictationParser {
    dates: DateExtractor,
    projects: ProjectMatcher,
    /// Lower-cased, longest first.
    fillers: Vec<String>,
}

impl Default for DictationParser {
    fn default() -> Self {
        Self::new(
            DateExtractor::default(),
            ProjectMatcher::default(),
            default_filler_prefixes(),
        )
    }
}

impl DictationParser {
    pub fn new(dates: DateExtractor, projects: ProjectMatcher, fillers: Vec<String>) -> Self {
        let mut fillers: Vec<String> = fillers
            .into_iter()
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        fillers.sort_by(|a, b| b.len().cmp(&a.len()));
        fillers.dedup();
        Self {
            dates,
            projects,
            fillers,
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(
            DateExtractor::from_config(config),
            ProjectMatcher::with_threshold(config.threshold()),
            config.filler_prefixes.clone(),
        )
    }

    /// `reference` defaults to now. Never fails: unrecognised text simply ends
    /// up in the title.
    pub fn parse(
        &self,
        input: &str,
        candidates: &[ProjectCandidate],
        reference: Option<DateTime<Utc>>,
    ) -> ParsedIntake {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ParsedIntake::default();
        }
        let reference = reference.unwrap_or_else(Utc::now);

        let date = self.dates.extract(trimmed, reference);
        let project = self.projects.find(&date.residual_text, candidates);
        let title = self.normalize_title(&project.residual_text);

        let (scheduled_at, due_at) = match date.kind {
            Some(DateKind::Deadline) => (None, date.instant),
            Some(DateKind::Schedule) => (date.instant, None),
            None => (None, None),
        };

        ParsedIntake {
            title,
            scheduled_at,
            due_at,
            matched_project: project.project.map(|p| MatchedProject {
                id: p.id,
                name: p.name,
            }),
            original_input: trimmed.to_string(),
            trace: ParseTrace {
                date_phrase: date.matched_phrase,
                project_phrase: project.matched_phrase,
            },
        }
    }

    /// Strips leading filler phrases (repeatedly), tidies and capitalizes.
    pub fn normalize_title(&self, text: &str) -> String {
        let mut rest = tidy(text);
        while let Some(len) = self.leading_filler(&rest) {
            rest = rest[len..]
                .trim_start_matches(|c: char| c.is_whitespace() || ",.;:!?-".contains(c))
                .to_string();
        }
        capitalize(&tidy(&rest))
    }

    /// Byte length of the filler at the start of `text`, if any. The filler
    /// must end at a word boundary: "please" does not strip "pleased".
    fn leading_filler(&self, text: &str) -> Option<usize> {
        self.fillers.iter().find_map(|filler| {
            let head = text.get(..filler.len())?;
            if !head.eq_ignore_ascii_case(filler) {
                return None;
            }
            let at_boundary = text[filler.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric() && c != '\'');
            at_boundary.then_some(filler.len())
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses with the default configuration.
pub fn parse_intake(
    text: &str,
    candidates: &[ProjectCandidate],
    reference: Option<DateTime<Utc>>,
) -> ParsedIntake {
    DictationParser::default().parse(text, candidates, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sunday() -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2026, 2, 22, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_filler_stripping_repeats() {
        let parser = DictationParser::default();
        assert_eq!(parser.normalize_title("please remind me to call mom"), "Call mom");
        assert_eq!(parser.normalize_title("Can you, please, fix it"), "Fix it");
        assert_eq!(parser.normalize_title("please"), "");
    }

    #[test]
    fn test_filler_needs_word_boundary() {
        let parser = DictationParser::default();
        assert_eq!(parser.normalize_title("pleased customers survey"), "Pleased customers survey");
        assert_eq!(parser.normalize_title("lets ship it"), "Ship it");
    }

    #[test]
    fn test_filler_only_at_start() {
        let parser = DictationParser::default();
        assert_eq!(
            parser.normalize_title("ask Sam if they need to travel"),
            "Ask Sam if they need to travel"
        );
    }

    #[test]
    fn test_custom_fillers_from_config() {
        let config = ParserConfig {
            filler_prefixes: vec!["pls".to_string(), "  ".to_string()],
            ..ParserConfig::default()
        };
        let parser = DictationParser::from_config(&config);
        assert_eq!(parser.normalize_title("pls book flights"), "Book flights");
        assert_eq!(parser.normalize_title("please book flights"), "Please book flights");
    }

    #[test]
    fn test_whitespace_only_input() {
        let parsed = parse_intake("   \t ", &[], sunday());
        assert_eq!(parsed.title, "");
        assert!(parsed.scheduled_at.is_none());
        assert!(parsed.due_at.is_none());
        assert!(parsed.matched_project.is_none());
        assert_eq!(parsed.original_input, "");
    }

    #[test]
    fn test_trace_records_consumed_phrases() {
        let candidates = vec![ProjectCandidate::new("p1", "Sales")];
        let parsed = parse_intake(
            "please call the client tomorrow for the sales project",
            &candidates,
            sunday(),
        );
        assert_eq!(parsed.title, "Call the client");
        assert_eq!(parsed.trace.date_phrase.as_deref(), Some("tomorrow"));
        assert_eq!(
            parsed.trace.project_phrase.as_deref(),
            Some("for the sales project")
        );
        assert!(parsed.scheduled_at.is_some());
    }
}
