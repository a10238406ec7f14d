// File: src/controller.rs
//! Intake boundary: turns a raw line from the user into a task draft.
//!
//! This is the only layer that performs IO. It fetches the user's open
//! projects, runs the dictation parser and maps the result onto the
//! fields a task record is created from. Request handlers should call
//! [`IntakeController::parse_task_input`] rather than the parser directly.
use crate::config::ParserConfig;
use crate::model::{DictationParser, ParsedIntake, ProjectCandidate};
use crate::store::ProjectSource;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Caller-supplied knobs for a single intake request.
#[derive(Debug, Clone, Default)]
pub struct IntakeOptions {
    /// Project chosen explicitly by the caller (e.g. the project page the
    /// user typed into). Used when parsing finds none, and always in skip mode.
    pub project_id: Option<String>,
    /// Use the raw input as the title, without any analysis.
    pub skip_parsing: bool,
    /// Resolve relative dates against this instant instead of now.
    pub reference: Option<DateTime<Utc>>,
}

/// The fields a task record is created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub due_date: Option<DateTime<Utc>>,
    pub schedule_date: Option<DateTime<Utc>>,
    pub project_id: Option<String>,
}

/// Where `TaskDraft::project_id` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectSelection {
    Parsed,
    Caller,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIntakeWithMetadata {
    pub draft: TaskDraft,
    /// Absent in skip mode.
    pub parsed: Option<ParsedIntake>,
    /// Number of candidate projects considered. Zero in skip mode.
    pub candidate_count: usize,
    pub project_source: ProjectSelection,
}

pub struct IntakeController<S: ProjectSource> {
    source: S,
    parser: DictationParser,
}

impl<S: ProjectSource> IntakeController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: DictationParser::default(),
        }
    }

    pub fn with_config(source: S, config: &ParserConfig) -> Self {
        Self {
            source,
            parser: DictationParser::from_config(config),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Parse one line of user input into a task draft.
    ///
    /// Flow:
    /// 1. Skip mode: the trimmed input becomes the name verbatim, the caller's
    ///    project id is used and no projects are fetched.
    /// 2. Otherwise the user's open projects are fetched once. A fetch error is
    ///    returned unchanged; it is never treated as "no projects".
    /// 3. A candidate list with an entry lacking id or name is rejected.
    /// 4. The parser runs; a matched project wins over the caller's id.
    pub async fn parse_task_input(
        &self,
        text: &str,
        user_id: &str,
        options: IntakeOptions,
    ) -> Result<ParsedIntakeWithMetadata> {
        if options.skip_parsing {
            let (project_id, project_source) = caller_project(options.project_id);
            log::info!("Intake for {}: parsing skipped", user_id);
            return Ok(ParsedIntakeWithMetadata {
                draft: TaskDraft {
                    name: text.trim().to_string(),
                    due_date: None,
                    schedule_date: None,
                    project_id,
                },
                parsed: None,
                candidate_count: 0,
                project_source,
            });
        }

        let candidates = self.source.list_open_projects(user_id).await?;
        validate_candidates(&candidates)?;

        let parsed = self.parser.parse(text, &candidates, options.reference);
        let (project_id, project_source) = match &parsed.matched_project {
            Some(p) => (Some(p.id.clone()), ProjectSelection::Parsed),
            None => caller_project(options.project_id),
        };

        log::info!(
            "Intake for {}: {} candidates, date={} project={} ({})",
            user_id,
            candidates.len(),
            parsed.trace.date_phrase.as_deref().unwrap_or("-"),
            project_id.as_deref().unwrap_or("-"),
            project_source
        );

        Ok(ParsedIntakeWithMetadata {
            draft: TaskDraft {
                name: parsed.title.clone(),
                due_date: parsed.due_at,
                schedule_date: parsed.scheduled_at,
                project_id,
            },
            candidate_count: candidates.len(),
            parsed: Some(parsed),
            project_source,
        })
    }
}

fn caller_project(project_id: Option<String>) -> (Option<String>, ProjectSelection) {
    match project_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => (Some(id), ProjectSelection::Caller),
        None => (None, ProjectSelection::None),
    }
}

fn validate_candidates(candidates: &[ProjectCandidate]) -> Result<()> {
    if let Some((idx, bad)) = candidates
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_well_formed())
    {
        log::warn!("Rejecting candidate list: entry {} is {:?}", idx, bad);
        anyhow::bail!(
            "Malformed project candidate at index {}: id and name are required",
            idx
        );
    }
    Ok(())
}
