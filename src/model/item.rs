// File: src/model/item.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A project the matcher may attach a task to. Supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCandidate {
    pub id: String,
    pub name: String,
}

impl ProjectCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty()
    }
}

/// Whether a date phrase says when to work on a task or when it must be done.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DateKind {
    Schedule,
    Deadline,
}

// --- DATE TYPES ---

/// A resolved date before the time-of-day convention is applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DateType {
    /// No time was spoken ("tomorrow", "by Friday").
    AllDay(NaiveDate),
    /// An exact instant ("tomorrow at 3pm", "in 2 hours").
    Specific(DateTime<Utc>),
}

impl DateType {
    /// AllDay -> `default_time` on that day. Specific -> exact time.
    pub fn to_instant(&self, default_time: NaiveTime) -> DateTime<Utc> {
        match self {
            DateType::AllDay(d) => d.and_time(default_time).and_utc(),
            DateType::Specific(dt) => *dt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateExtractionResult {
    pub instant: Option<DateTime<Utc>>,
    pub kind: Option<DateKind>,
    pub matched_phrase: Option<String>,
    pub original_text: String,
    pub residual_text: String,
}

impl DateExtractionResult {
    pub fn no_match(text: &str) -> Self {
        Self {
            instant: None,
            kind: None,
            matched_phrase: None,
            original_text: text.to_string(),
            residual_text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMatch {
    pub id: String,
    pub name: String,
    /// 1.0 for an exact match, falling as the fuzzy distance grows.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMatchResult {
    pub project: Option<ProjectMatch>,
    pub matched_phrase: Option<String>,
    pub residual_text: String,
}

impl ProjectMatchResult {
    pub fn no_match(text: &str) -> Self {
        Self {
            project: None,
            matched_phrase: None,
            residual_text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedProject {
    pub id: String,
    pub name: String,
}

/// Which phrases the pipeline consumed. Diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseTrace {
    pub date_phrase: Option<String>,
    pub project_phrase: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntake {
    pub title: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub due_at: Option<DateTime<Utc>>,
    pub matched_project: Option<MatchedProject>,
    pub original_input: String,
    pub trace: ParseTrace,
}
