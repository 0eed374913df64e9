//! Layout configuration.
//!
//! Loaded from JSON at runtime; every field has a default matching the
//! school day the timetable was designed for.

use serde::Deserialize;

use crate::error::Result;

/// Top-level layout configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Time axis definition
    pub axis: AxisConfig,

    /// Text shown in place of an absent display field (campus, section, group)
    pub placeholder: String,

    /// Maximum number of courses in one generate request
    pub max_courses: usize,
}

/// Time axis definition: first instant, last instant, step.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AxisConfig {
    /// First instant of the day (`HH:MM`)
    pub start: String,

    /// Last instant of the day, inclusive (`HH:MM`)
    pub end: String,

    /// Slot length in minutes
    pub granularity_minutes: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            axis: AxisConfig::default(),
            placeholder: "N/A".to_string(),
            max_courses: 6,
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            start: "08:00".to_string(),
            end: "21:00".to_string(),
            granularity_minutes: 10,
        }
    }
}

impl LayoutConfig {
    /// Parses a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.axis.start, "08:00");
        assert_eq!(cfg.axis.end, "21:00");
        assert_eq!(cfg.axis.granularity_minutes, 10);
        assert_eq!(cfg.placeholder, "N/A");
        assert_eq!(cfg.max_courses, 6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = LayoutConfig::from_json(r#"{"axis": {"granularity_minutes": 15}}"#).unwrap();
        assert_eq!(cfg.axis.granularity_minutes, 15);
        assert_eq!(cfg.axis.start, "08:00");
        assert_eq!(cfg.placeholder, "N/A");
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(LayoutConfig::from_json("{not json").is_err());
    }
}
