//! Schedule candidate model.
//!
//! A candidate is one complete weekly combination produced by the
//! external generator: the blocks of one section/group per selected
//! course, plus the conflict and exception flags the generator computed.
//! This crate reads the flags; it never derives them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::TimeBlock;
use crate::axis::Weekday;

/// One full weekly combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCandidate {
    /// Chosen section/group per course.
    #[serde(default)]
    pub sections: Vec<SectionInfo>,
    /// Time blocks in source order.
    #[serde(default)]
    pub blocks: Vec<TimeBlock>,
    /// Generator ranking score (higher = better).
    #[serde(default)]
    pub score: f64,
    /// Whether the combination has disqualifying conflicts.
    #[serde(default)]
    pub has_conflicts: bool,
    /// Human-readable conflict descriptions.
    #[serde(rename = "conflicts", default)]
    pub conflict_descriptions: Vec<String>,
    /// Kinds of conflict present.
    #[serde(rename = "conflict_types", default)]
    pub conflict_kinds: BTreeSet<ConflictKind>,
    /// Whether the combination relies on approved exceptions.
    #[serde(rename = "has_valid_topones", default)]
    pub has_valid_exceptions: bool,
    /// Human-readable exception descriptions.
    #[serde(rename = "valid_topones", default)]
    pub valid_exception_descriptions: Vec<String>,
    /// Kinds of exception present.
    #[serde(rename = "valid_topon_types", default)]
    pub valid_exception_kinds: BTreeSet<ExceptionKind>,
}

/// Conflict classification attached by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Two blocks share time.
    Overlap,
    /// Not enough time to move between campuses.
    TravelTime,
    /// Kind this crate does not know about.
    #[serde(other)]
    Other,
}

/// Approved exception classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// The whole block overlaps.
    #[serde(rename = "completo", alias = "full")]
    Full,
    /// Part of the block overlaps.
    #[serde(rename = "parcial", alias = "partial")]
    Partial,
    #[serde(other)]
    Other,
}

/// Course/section/group chosen for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub course: String,
    pub section: i64,
    pub group: GroupLabel,
}

/// A group number, or a combined label such as `"0+1"` when the
/// generator merged several groups of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupLabel {
    Single(i64),
    Combined(String),
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Single(g) => write!(f, "{g}"),
            GroupLabel::Combined(s) => f.write_str(s),
        }
    }
}

/// How a candidate is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// No conflicts and no exceptions.
    Clean,
    /// Exceptions present, no conflicts.
    ValidException,
    /// Conflicts present (takes precedence over exceptions).
    Conflicted,
}

impl ScheduleCandidate {
    /// Creates a clean candidate from blocks.
    pub fn new(blocks: Vec<TimeBlock>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    /// Marks the candidate as conflicted.
    pub fn with_conflicts(
        mut self,
        kinds: impl IntoIterator<Item = ConflictKind>,
        descriptions: impl IntoIterator<Item = String>,
    ) -> Self {
        self.has_conflicts = true;
        self.conflict_kinds.extend(kinds);
        self.conflict_descriptions.extend(descriptions);
        self
    }

    /// Marks the candidate as relying on approved exceptions.
    pub fn with_valid_exceptions(
        mut self,
        kinds: impl IntoIterator<Item = ExceptionKind>,
        descriptions: impl IntoIterator<Item = String>,
    ) -> Self {
        self.has_valid_exceptions = true;
        self.valid_exception_kinds.extend(kinds);
        self.valid_exception_descriptions.extend(descriptions);
        self
    }

    /// Adds a section summary entry.
    pub fn with_section(mut self, section: SectionInfo) -> Self {
        self.sections.push(section);
        self
    }

    /// Counting class. Conflicts win over exceptions.
    pub fn classification(&self) -> Classification {
        if self.has_conflicts {
            Classification::Conflicted
        } else if self.has_valid_exceptions {
            Classification::ValidException
        } else {
            Classification::Clean
        }
    }

    /// Blocks whose day normalizes to `day`, in source order.
    pub fn blocks_on(&self, day: Weekday) -> impl Iterator<Item = &TimeBlock> {
        self.blocks
            .iter()
            .filter(move |b| b.day_label().weekday() == Some(day))
    }

    /// Blocks belonging to a course.
    pub fn blocks_for_course(&self, course: &str) -> Vec<&TimeBlock> {
        self.blocks.iter().filter(|b| b.course == course).collect()
    }

    /// Distinct course codes in first-seen order.
    pub fn courses(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for b in &self.blocks {
            if !seen.contains(&b.course.as_str()) {
                seen.push(b.course.as_str());
            }
        }
        seen
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
