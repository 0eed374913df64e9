//! Input checks.
//!
//! Two independent passes:
//! - [`validate_request`] rejects an outgoing generate request that the
//!   generator would refuse anyway (no courses, too many, duplicates).
//! - [`check_blocks`] reports malformed block data. Layout tolerates
//!   these blocks with defaulting; the issues let callers surface a
//!   warning instead of silently mis-rendering.

use std::collections::HashSet;

use tracing::warn;

use crate::axis::{DayLabel, TimeAxis};
use crate::models::{ScheduleCandidate, TimeBlock};
use crate::protocol::GenerateRequest;

/// Request validation result.
pub type RequestResult = Result<(), Vec<RequestIssue>>;

/// A problem with an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestIssue {
    /// Issue category.
    pub kind: RequestIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of request issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestIssueKind {
    /// No course selected.
    NoCourses,
    /// More courses than the generator accepts.
    TooManyCourses,
    /// The same course selected twice.
    DuplicateCourse,
    /// Empty course code.
    BlankCourse,
}

impl RequestIssue {
    pub(crate) fn new(kind: RequestIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generate request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(issues)` with all detected issues.
pub fn validate_request(request: &GenerateRequest, max_courses: usize) -> RequestResult {
    let mut issues = Vec::new();

    if request.courses.is_empty() {
        issues.push(RequestIssue::new(
            RequestIssueKind::NoCourses,
            "Select at least one course",
        ));
    }

    if request.courses.len() > max_courses {
        issues.push(RequestIssue::new(
            RequestIssueKind::TooManyCourses,
            format!(
                "At most {max_courses} courses allowed, got {}",
                request.courses.len()
            ),
        ));
    }

    let mut seen = HashSet::new();
    for code in &request.courses {
        if code.trim().is_empty() {
            issues.push(RequestIssue::new(
                RequestIssueKind::BlankCourse,
                "Empty course code",
            ));
        } else if !seen.insert(code.as_str()) {
            issues.push(RequestIssue::new(
                RequestIssueKind::DuplicateCourse,
                format!("Duplicate course: {code}"),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// A malformed-data warning about one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockIssue {
    pub kind: BlockIssueKind,
    /// Index into the candidate's block list.
    pub block_index: usize,
    pub message: String,
}

/// Categories of block issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockIssueKind {
    /// Start time missing or unparsable (read as 00:00).
    DefaultedStart,
    /// End time missing or unparsable (read as 00:00).
    DefaultedEnd,
    /// `start >= end`.
    EmptyInterval,
    /// Day label not recognized.
    UnrecognizedDay,
    /// Interval touches no row of the axis.
    OffAxis,
}

/// Reports malformed blocks in a candidate.
///
/// Saturday blocks are not reported: dropping them is intended.
pub fn check_blocks(candidate: &ScheduleCandidate, axis: &TimeAxis) -> Vec<BlockIssue> {
    let mut issues = Vec::new();
    for (i, block) in candidate.blocks.iter().enumerate() {
        check_block(i, block, axis, &mut issues);
    }
    for issue in &issues {
        warn!(block = issue.block_index, kind = ?issue.kind, "{}", issue.message);
    }
    issues
}

fn check_block(index: usize, block: &TimeBlock, axis: &TimeAxis, issues: &mut Vec<BlockIssue>) {
    let mut push = |kind, message: String| {
        issues.push(BlockIssue {
            kind,
            block_index: index,
            message,
        })
    };

    let start = block.start();
    let end = block.end();
    if start.is_defaulted() {
        push(
            BlockIssueKind::DefaultedStart,
            format!("{}: bad start time '{}'", block.course, block.start_time),
        );
    }
    if end.is_defaulted() {
        push(
            BlockIssueKind::DefaultedEnd,
            format!("{}: bad end time '{}'", block.course, block.end_time),
        );
    }

    let interval = block.interval();
    if interval.is_empty() {
        push(
            BlockIssueKind::EmptyInterval,
            format!(
                "{}: start '{}' is not before end '{}'",
                block.course, block.start_time, block.end_time
            ),
        );
    }

    match block.day_label() {
        DayLabel::Unrecognized(raw) => push(
            BlockIssueKind::UnrecognizedDay,
            format!("{}: unrecognized day '{raw}'", block.course),
        ),
        DayLabel::Weekday(_) if !interval.is_empty() && axis.anchor_row(&interval).is_none() => {
            push(
                BlockIssueKind::OffAxis,
                format!(
                    "{}: {}-{} is outside the timetable",
                    block.course, block.start_time, block.end_time
                ),
            )
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(issues: &[BlockIssue]) -> Vec<BlockIssueKind> {
        issues.iter().map(|i| i.kind.clone()).collect()
    }

    #[test]
    fn test_valid_request() {
        let req = GenerateRequest::new(["MAT101", "FIS101"]);
        assert!(validate_request(&req, 6).is_ok());
    }

    #[test]
    fn test_empty_request() {
        let req = GenerateRequest::new(Vec::<String>::new());
        let issues = validate_request(&req, 6).unwrap_err();
        assert_eq!(issues[0].kind, RequestIssueKind::NoCourses);
    }

    #[test]
    fn test_too_many_courses() {
        let req = GenerateRequest::new(["A", "B", "C", "D", "E", "F", "G"]);
        let issues = validate_request(&req, 6).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RequestIssueKind::TooManyCourses));
    }

    #[test]
    fn test_duplicate_and_blank_courses() {
        let req = GenerateRequest::new(["A", "A", " "]);
        let issues = validate_request(&req, 6).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RequestIssueKind::DuplicateCourse && i.message.contains('A')));
        assert!(issues.iter().any(|i| i.kind == RequestIssueKind::BlankCourse));
    }

    #[test]
    fn test_clean_blocks() {
        let c = ScheduleCandidate::new(vec![
            TimeBlock::new("A", 1, 0, "Lunes", "08:00", "09:00"),
            TimeBlock::new("B", 1, 0, "Sábado", "08:00", "09:00"),
        ]);
        assert!(check_blocks(&c, TimeAxis::school_day()).is_empty());
    }

    #[test]
    fn test_missing_times() {
        let c = ScheduleCandidate::new(vec![TimeBlock::new("A", 1, 0, "Lunes", "", "09:00")]);
        let issues = check_blocks(&c, TimeAxis::school_day());
        // 00:00-09:00 still reaches the axis, so only the default is reported.
        assert_eq!(kinds(&issues), vec![BlockIssueKind::DefaultedStart]);

        let c = ScheduleCandidate::new(vec![TimeBlock::new("A", 1, 0, "Lunes", "08:00", "")]);
        let issues = check_blocks(&c, TimeAxis::school_day());
        assert_eq!(
            kinds(&issues),
            vec![BlockIssueKind::DefaultedEnd, BlockIssueKind::EmptyInterval]
        );
    }

    #[test]
    fn test_unrecognized_and_off_axis() {
        let c = ScheduleCandidate::new(vec![
            TimeBlock::new("A", 1, 0, "Domingo", "08:00", "09:00"),
            TimeBlock::new("B", 1, 0, "Martes", "22:00", "23:00"),
        ]);
        let issues = check_blocks(&c, TimeAxis::school_day());
        assert_eq!(
            kinds(&issues),
            vec![BlockIssueKind::UnrecognizedDay, BlockIssueKind::OffAxis]
        );
        assert_eq!(issues[1].block_index, 1);
    }
}
