//! Classification summary of a generation result.
//!
//! Counts candidates by class and builds the banner and alert texts
//! shown above the grid.
//!
//! # Classes
//!
//! | Class | Condition |
//! |-------|-----------|
//! | Clean | no conflicts, no exceptions |
//! | Valid exception | exceptions present, no conflicts |
//! | Conflicted | conflicts present (regardless of exceptions) |

use crate::models::{Classification, ConflictKind, ExceptionKind, ScheduleCandidate};

/// Candidate counts per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// No conflicts and no exceptions.
    pub clean: usize,
    /// Approved exceptions, no conflicts.
    pub valid_exception: usize,
    /// Conflicts present.
    pub conflicted: usize,
}

impl ScheduleSummary {
    /// Counts candidates by class.
    pub fn calculate(candidates: &[ScheduleCandidate]) -> Self {
        let mut summary = Self::default();
        for c in candidates {
            match c.classification() {
                Classification::Clean => summary.clean += 1,
                Classification::ValidException => summary.valid_exception += 1,
                Classification::Conflicted => summary.conflicted += 1,
            }
        }
        summary
    }

    /// Total candidates counted.
    pub fn total(&self) -> usize {
        self.clean + self.valid_exception + self.conflicted
    }

    /// Banner combining the non-zero counts.
    pub fn banner(&self) -> String {
        let mut message = String::new();
        if self.clean > 0 {
            message = format!("{} schedules without conflicts", self.clean);
        }
        if self.valid_exception > 0 {
            if message.is_empty() {
                message = format!("{} schedules with valid exceptions", self.valid_exception);
            } else {
                message.push_str(&format!(", {} with valid exceptions", self.valid_exception));
            }
        }
        if self.conflicted > 0 {
            if message.is_empty() {
                message = format!("{} schedules with conflicts", self.conflicted);
            } else {
                message.push_str(&format!(" and {} with conflicts", self.conflicted));
            }
        }
        if message.is_empty() {
            "No schedules found".to_string()
        } else {
            message
        }
    }
}

/// An alert box shown with one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// Conflict alert, when the candidate is conflicted and describes it.
pub fn conflict_alert(candidate: &ScheduleCandidate) -> Option<Alert> {
    if !candidate.has_conflicts || candidate.conflict_descriptions.is_empty() {
        return None;
    }
    let overlap = candidate.conflict_kinds.contains(&ConflictKind::Overlap);
    let travel = candidate.conflict_kinds.contains(&ConflictKind::TravelTime);
    let title = match (overlap, travel) {
        (true, true) => "SCHEDULE AND CAMPUS CONFLICT",
        (true, false) => "SCHEDULE CONFLICT",
        (false, true) => "CAMPUS CONFLICT",
        (false, false) => "CONFLICTS DETECTED",
    };
    Some(Alert {
        title,
        items: candidate.conflict_descriptions.clone(),
    })
}

/// Valid-exception alert, shown independently of the conflict alert.
pub fn exception_alert(candidate: &ScheduleCandidate) -> Option<Alert> {
    if !candidate.has_valid_exceptions || candidate.valid_exception_descriptions.is_empty() {
        return None;
    }
    let full = candidate.valid_exception_kinds.contains(&ExceptionKind::Full);
    let partial = candidate
        .valid_exception_kinds
        .contains(&ExceptionKind::Partial);
    let title = match (full, partial) {
        (true, true) => "VALID EXCEPTIONS (FULL AND PARTIAL)",
        (true, false) => "VALID FULL EXCEPTION",
        (false, true) => "VALID PARTIAL EXCEPTION",
        (false, false) => "VALID EXCEPTIONS",
    };
    Some(Alert {
        title,
        items: candidate.valid_exception_descriptions.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean() -> ScheduleCandidate {
        ScheduleCandidate::default()
    }

    fn excepted() -> ScheduleCandidate {
        clean().with_valid_exceptions([ExceptionKind::Full], ["MAT/FIS full".to_string()])
    }

    fn conflicted() -> ScheduleCandidate {
        clean().with_conflicts([ConflictKind::Overlap], ["MAT vs FIS".to_string()])
    }

    #[test]
    fn test_counts() {
        let list = vec![clean(), clean(), excepted(), conflicted()];
        let s = ScheduleSummary::calculate(&list);
        assert_eq!(s.clean, 2);
        assert_eq!(s.valid_exception, 1);
        assert_eq!(s.conflicted, 1);
        assert_eq!(s.total(), 4);
    }

    #[test]
    fn test_conflict_precedence() {
        let both = excepted().with_conflicts([ConflictKind::TravelTime], ["late".to_string()]);
        let s = ScheduleSummary::calculate(&[both.clone()]);
        assert_eq!(s.conflicted, 1);
        assert_eq!(s.valid_exception, 0);
        // Both alerts still shown for the candidate itself.
        assert!(conflict_alert(&both).is_some());
        assert!(exception_alert(&both).is_some());
    }

    #[test]
    fn test_banner_all_classes() {
        let s = ScheduleSummary {
            clean: 3,
            valid_exception: 2,
            conflicted: 1,
        };
        assert_eq!(
            s.banner(),
            "3 schedules without conflicts, 2 with valid exceptions and 1 with conflicts"
        );
    }

    #[test]
    fn test_banner_leading_forms() {
        let only_exc = ScheduleSummary {
            valid_exception: 2,
            ..Default::default()
        };
        assert_eq!(only_exc.banner(), "2 schedules with valid exceptions");

        let only_conf = ScheduleSummary {
            conflicted: 4,
            ..Default::default()
        };
        assert_eq!(only_conf.banner(), "4 schedules with conflicts");

        let exc_conf = ScheduleSummary {
            valid_exception: 1,
            conflicted: 2,
            ..Default::default()
        };
        assert_eq!(
            exc_conf.banner(),
            "1 schedules with valid exceptions and 2 with conflicts"
        );

        assert_eq!(ScheduleSummary::default().banner(), "No schedules found");
    }

    #[test]
    fn test_conflict_titles() {
        let both = clean().with_conflicts(
            [ConflictKind::Overlap, ConflictKind::TravelTime],
            ["x".to_string()],
        );
        assert_eq!(conflict_alert(&both).unwrap().title, "SCHEDULE AND CAMPUS CONFLICT");

        let travel = clean().with_conflicts([ConflictKind::TravelTime], ["x".to_string()]);
        assert_eq!(conflict_alert(&travel).unwrap().title, "CAMPUS CONFLICT");

        let bare = clean().with_conflicts(Vec::new(), vec!["x".to_string()]);
        assert_eq!(conflict_alert(&bare).unwrap().title, "CONFLICTS DETECTED");

        // Flag without descriptions shows nothing.
        let silent = clean().with_conflicts([ConflictKind::Overlap], Vec::new());
        assert!(conflict_alert(&silent).is_none());
        assert!(conflict_alert(&clean()).is_none());
    }

    #[test]
    fn test_exception_titles() {
        let both = clean().with_valid_exceptions(
            [ExceptionKind::Full, ExceptionKind::Partial],
            ["x".to_string()],
        );
        assert_eq!(
            exception_alert(&both).unwrap().title,
            "VALID EXCEPTIONS (FULL AND PARTIAL)"
        );
        let partial = clean().with_valid_exceptions([ExceptionKind::Partial], ["x".to_string()]);
        let alert = exception_alert(&partial).unwrap();
        assert_eq!(alert.title, "VALID PARTIAL EXCEPTION");
        assert_eq!(alert.items, vec!["x".to_string()]);
    }
}
