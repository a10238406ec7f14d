use chrono::{DateTime, TimeZone, Utc};
use taskintake::model::{ParsedIntake, ProjectCandidate};
use taskintake::parse_intake;

// Sunday, 2026-02-22.
fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 22, 10, 0, 0).unwrap()
}

fn parse(input: &str, candidates: &[ProjectCandidate]) -> ParsedIntake {
    parse_intake(input, candidates, Some(reference()))
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

#[test]
fn test_tomorrow_is_scheduled() {
    let parsed = parse("Call John tomorrow", &[]);

    assert_eq!(parsed.title, "Call John");
    assert_eq!(parsed.scheduled_at, Some(at(2026, 2, 23, 9, 0, 0)));
    assert_eq!(parsed.due_at, None);
    assert_eq!(parsed.matched_project, None);
}

#[test]
fn test_by_friday_is_a_deadline() {
    let parsed = parse("Submit report by Friday", &[]);

    assert_eq!(parsed.title, "Submit report");
    assert_eq!(parsed.due_at, Some(at(2026, 2, 27, 23, 59, 59)));
    assert_eq!(parsed.scheduled_at, None);
}

#[test]
fn test_project_phrase_is_matched_and_removed() {
    let candidates = vec![ProjectCandidate::new("p1", "Sales")];
    let parsed = parse("Send email for sales project", &candidates);

    let project = parsed.matched_project.expect("project should match");
    assert_eq!(project.id, "p1");
    assert_eq!(project.name, "Sales");
    assert_eq!(parsed.title, "Send email");
}

#[test]
fn test_partial_name_match_leaves_empty_title() {
    let candidates = vec![ProjectCandidate::new("p2", "Marketing Dashboard")];
    let parsed = parse("add to marketing project", &candidates);

    assert_eq!(parsed.matched_project.map(|p| p.id), Some("p2".to_string()));
    // Everything was consumed by the project phrase; that is not an error.
    assert_eq!(parsed.title, "");
}

#[test]
fn test_filler_prefix_is_stripped() {
    let parsed = parse("please update the docs", &[]);

    assert_eq!(parsed.title, "Update the docs");
    assert_eq!(parsed.scheduled_at, None);
    assert_eq!(parsed.due_at, None);
    assert_eq!(parsed.matched_project, None);
}

#[test]
fn test_plain_text_passes_through() {
    let parsed = parse("Fix the bug", &[]);

    assert_eq!(parsed.title, "Fix the bug");
    assert_eq!(parsed.scheduled_at, None);
    assert_eq!(parsed.due_at, None);
    assert_eq!(parsed.matched_project, None);
    assert_eq!(parsed.original_input, "Fix the bug");
}

#[test]
fn test_original_input_is_trimmed() {
    let parsed = parse("  Fix the bug  ", &[]);

    assert_eq!(parsed.original_input, "Fix the bug");
    assert_eq!(parsed.title, "Fix the bug");

    let parsed = parse("\tCall John tomorrow\n", &[]);
    assert_eq!(parsed.original_input, "Call John tomorrow");
    assert_eq!(parsed.title, "Call John");
}

#[test]
fn test_date_and_project_together() {
    let candidates = vec![
        ProjectCandidate::new("p1", "Sales"),
        ProjectCandidate::new("p2", "Marketing Dashboard"),
    ];
    let parsed = parse(
        "remind me to draft the launch copy for Marketing Dashboard due next monday",
        &candidates,
    );

    assert_eq!(parsed.title, "Draft the launch copy");
    assert_eq!(parsed.due_at, Some(at(2026, 2, 23, 23, 59, 59)));
    assert_eq!(parsed.matched_project.map(|p| p.id), Some("p2".to_string()));
}

#[test]
fn test_time_and_day_merge_into_one_instant() {
    let parsed = parse("Sync with design at 3pm on Friday", &[]);

    assert_eq!(parsed.title, "Sync with design");
    assert_eq!(parsed.scheduled_at, Some(at(2026, 2, 27, 15, 0, 0)));
}

#[test]
fn test_common_words_before_project_stay_in_title() {
    let parsed = parse(
        "Plan a new project kickoff",
        &[ProjectCandidate::new("p1", "New Website")],
    );
    assert_eq!(parsed.title, "Plan a new project kickoff");
    assert_eq!(parsed.matched_project, None);

    let parsed = parse(
        "Review the project plan",
        &[ProjectCandidate::new("p2", "The Office")],
    );
    assert_eq!(parsed.title, "Review the project plan");
    assert_eq!(parsed.matched_project, None);
}
