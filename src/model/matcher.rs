// Logic for finding which project a task line refers to.
//
// Each rule in `PATTERN_RULES` captures a candidate name fragment from a
// surface phrase. Rules are ordered from most to least specific:
//
//   for [the] X project            "Send email for the sales project"
//   add|move|put|file [this|it] to [the] X [project]
//                                  "add this to marketing"
//   on|in|under [the] X project    "Work on the website project"
//   X project                      "Sales project kickoff"
//   for [the] X                    "Draft copy for Marketing Dashboard"
//
// A capture only counts once the fuzzy scorer finds a candidate within the
// threshold; otherwise the next occurrence, then the next rule, is tried.

use crate::config::DEFAULT_MATCH_THRESHOLD;
use crate::model::item::{ProjectCandidate, ProjectMatch, ProjectMatchResult};
use crate::model::similarity::{NormalizedLevenshtein, StringDistance, WindowedLevenshtein};
use crate::model::text::tidy;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct PatternRule {
    pub name: &'static str,
    /// Must define a `phrase` group (the span to remove) and a `name` group.
    pub regex: Regex,
}

fn rule(name: &'static str, pattern: &str) -> PatternRule {
    PatternRule {
        name,
        regex: Regex::new(pattern).expect("valid regex"),
    }
}

// Names stop at clause punctuation; `(?:$|[,.;!?])` ends a clause.
pub static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        rule(
            "for_the_x_project",
            r"(?i)(?P<phrase>\bfor\s+(?:the\s+)?(?P<name>[^\s,.;!?][^,.;!?]*?)\s+project\b)",
        ),
        rule(
            "add_to_x",
            r"(?i)(?P<phrase>\b(?:add|move|put|file)\s+(?:(?:this|it)\s+)?(?:to|under|into|in)\s+(?:the\s+)?(?P<name>[^\s,.;!?][^,.;!?]*?)(?:\s+project)?)\s*(?:$|[,.;!?])",
        ),
        rule(
            "on_in_x_project",
            r"(?i)(?P<phrase>\b(?:on|in|under)\s+(?:the\s+)?(?P<name>[^\s,.;!?][^,.;!?]*?)\s+project\b)",
        ),
        rule(
            "x_project",
            r"(?i)(?P<phrase>\b(?P<name>[\w&'-]+)\s+project\b)",
        ),
        rule(
            "for_x",
            r"(?i)(?P<phrase>\bfor\s+(?:the\s+)?(?P<name>[^\s,.;!?][^,.;!?]*?))\s*(?:$|[,.;!?])",
        ),
    ]
});

const MIN_FRAGMENT_LEN: usize = 2;

// Determiners and stock adjectives that show up before "project" in ordinary
// speech ("a new project", "the project plan"). A capture made only of these
// never names a project.
const NON_NAME_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "our", "your", "their", "his",
    "her", "its", "new", "next", "last", "old", "big", "small", "main", "whole", "same", "other",
    "another", "each", "every", "any", "some", "side", "pet", "current", "entire",
];

fn is_non_name(fragment: &str) -> bool {
    fragment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .all(|w| NON_NAME_WORDS.iter().any(|s| w.eq_ignore_ascii_case(s)))
}

pub struct ProjectMatcher<D: StringDistance = WindowedLevenshtein> {
    distance: D,
    threshold: f64,
}

impl Default for ProjectMatcher {
    fn default() -> Self {
        Self::new(WindowedLevenshtein, DEFAULT_MATCH_THRESHOLD)
    }
}

impl ProjectMatcher {
    pub fn with_threshold(threshold: f64) -> Self {
        Self::new(WindowedLevenshtein, threshold)
    }
}

struct Scored<'a> {
    candidate: &'a ProjectCandidate,
    score: f64,
    whole: f64,
}

impl<D: StringDistance> ProjectMatcher<D> {
    pub fn new(distance: D, threshold: f64) -> Self {
        Self {
            distance,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn find(&self, text: &str, candidates: &[ProjectCandidate]) -> ProjectMatchResult {
        if candidates.is_empty() {
            return ProjectMatchResult::no_match(text);
        }
        if let Some(bad) = candidates.iter().find(|c| !c.is_well_formed()) {
            log::warn!(
                "Ignoring candidate list of {} projects: malformed entry {:?}",
                candidates.len(),
                bad
            );
            return ProjectMatchResult::no_match(text);
        }

        for rule in PATTERN_RULES.iter() {
            for caps in rule.regex.captures_iter(text) {
                let (Some(phrase), Some(name)) = (caps.name("phrase"), caps.name("name")) else {
                    continue;
                };
                let fragment = name.as_str().trim();
                if fragment.chars().count() < MIN_FRAGMENT_LEN || is_non_name(fragment) {
                    continue;
                }
                let Some(best) = self.best_candidate(fragment, candidates) else {
                    continue;
                };
                if best.score > self.threshold {
                    log::debug!(
                        "rule {} captured '{}', best '{}' rejected at {:.3}",
                        rule.name,
                        fragment,
                        best.candidate.name,
                        best.score
                    );
                    continue;
                }

                log::debug!(
                    "rule {} matched '{}' -> {} ({:.3})",
                    rule.name,
                    fragment,
                    best.candidate.id,
                    best.score
                );
                let mut residual = String::with_capacity(text.len());
                residual.push_str(&text[..phrase.start()]);
                residual.push(' ');
                residual.push_str(&text[phrase.end()..]);

                return ProjectMatchResult {
                    project: Some(ProjectMatch {
                        id: best.candidate.id.clone(),
                        name: best.candidate.name.clone(),
                        confidence: 1.0 - best.score,
                    }),
                    matched_phrase: Some(phrase.as_str().to_string()),
                    residual_text: tidy(&residual),
                };
            }
        }
        ProjectMatchResult::no_match(text)
    }

    /// Lowest score wins; ties go to the closer whole name, then list order.
    fn best_candidate<'a>(
        &self,
        fragment: &str,
        candidates: &'a [ProjectCandidate],
    ) -> Option<Scored<'a>> {
        candidates
            .iter()
            .map(|candidate| Scored {
                candidate,
                score: self.distance.distance(fragment, &candidate.name).clamp(0.0, 1.0),
                whole: NormalizedLevenshtein.distance(fragment, &candidate.name),
            })
            .fold(None, |best: Option<Scored<'a>>, next| match best {
                Some(b) if (b.score, b.whole) <= (next.score, next.whole) => Some(b),
                _ => Some(next),
            })
    }
}

/// Matches with the default scorer and threshold.
pub fn match_project(text: &str, candidates: &[ProjectCandidate]) -> ProjectMatchResult {
    ProjectMatcher::default().find(text, candidates)
}
