//! Time block model.
//!
//! A time block is one weekly meeting of a course section/group: a day
//! and a wall-clock range. Field names on the wire follow the generator
//! (`curso`, `seccion`, `grupo`, `dia`, `hora_ini`, `hora_fin`).
//!
//! Day and times are kept verbatim as received; they are normalized on
//! read through [`crate::axis`].

use serde::{Deserialize, Serialize};

use super::Interval;
use crate::axis::{normalize_day, parse_minutes, DayLabel, ParsedTime};

/// One weekly meeting occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Course identifier.
    #[serde(rename = "curso")]
    pub course: String,
    /// Course display name, if the source carries one.
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Section number.
    #[serde(rename = "seccion")]
    pub section: i64,
    /// Group number within the section.
    #[serde(rename = "grupo")]
    pub group: i64,
    /// Raw day label.
    #[serde(rename = "dia")]
    pub day: String,
    /// Raw start time.
    #[serde(rename = "hora_ini", default)]
    pub start_time: String,
    /// Raw end time.
    #[serde(rename = "hora_fin", default)]
    pub end_time: String,
    /// Campus label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
}

/// Identity of a block for placement bookkeeping.
///
/// Two enumerations with equal keys are the same visual entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey {
    pub course: String,
    pub section: i64,
    pub group: i64,
    pub start_time: String,
    pub day: String,
}

impl TimeBlock {
    /// Creates a new block.
    pub fn new(
        course: impl Into<String>,
        section: i64,
        group: i64,
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            course: course.into(),
            name: None,
            section,
            group,
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            campus: None,
        }
    }

    /// Sets the campus label.
    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = Some(campus.into());
        self
    }

    /// Sets the course display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Placement identity.
    pub fn key(&self) -> BlockKey {
        BlockKey {
            course: self.course.clone(),
            section: self.section,
            group: self.group,
            start_time: self.start_time.clone(),
            day: self.day.clone(),
        }
    }

    /// Normalized day.
    pub fn day_label(&self) -> DayLabel {
        normalize_day(&self.day)
    }

    #[inline]
    pub fn start(&self) -> ParsedTime {
        parse_minutes(&self.start_time)
    }

    #[inline]
    pub fn end(&self) -> ParsedTime {
        parse_minutes(&self.end_time)
    }

    /// Interval in minutes, with defaulted times read as `0`.
    pub fn interval(&self) -> Interval {
        Interval::new(self.start().minutes(), self.end().minutes())
    }
}
