//! Time axis and day normalization.
//!
//! The school day is quantized into equal slots. A slot is identified by
//! its starting instant (minutes since midnight); the axis includes the
//! closing instant itself, so the default 08:00–21:00 axis at 10-minute
//! granularity has 79 rows.
//!
//! Source data is lenient: day labels arrive accented, in mixed case and
//! sometimes with extra words; times arrive as `H:MM`, `HH:MM` or
//! `HH:MM:SS`. Both normalizers return tagged results so a defaulted
//! value is never mistaken for a real one.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::AxisConfig;
use crate::error::{Error, Result};
use crate::models::Interval;

/// A weekday with a grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All grid columns, left to right.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Column index (0 = Monday).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// Result of normalizing a raw day label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayLabel {
    /// Monday..Friday.
    Weekday(Weekday),
    /// Recognized, but the grid has no Saturday column.
    Saturday,
    /// Empty or unknown label (carried verbatim).
    Unrecognized(String),
}

impl DayLabel {
    /// The grid column, if any.
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            DayLabel::Weekday(d) => Some(*d),
            _ => None,
        }
    }
}

// Matched as substrings of the folded label, in order.
const DAY_PATTERNS: &[(&str, Option<Weekday>)] = &[
    ("lunes", Some(Weekday::Monday)),
    ("monday", Some(Weekday::Monday)),
    ("martes", Some(Weekday::Tuesday)),
    ("tuesday", Some(Weekday::Tuesday)),
    ("miercoles", Some(Weekday::Wednesday)),
    ("wednesday", Some(Weekday::Wednesday)),
    ("jueves", Some(Weekday::Thursday)),
    ("thursday", Some(Weekday::Thursday)),
    ("viernes", Some(Weekday::Friday)),
    ("friday", Some(Weekday::Friday)),
    ("sabado", None),
    ("saturday", None),
];

/// Normalizes a raw day label.
///
/// Case-insensitive and accent-insensitive; the label may contain other
/// words ("Clase Miércoles" is Wednesday).
pub fn normalize_day(raw: &str) -> DayLabel {
    let folded = fold(raw.trim());
    if folded.is_empty() {
        return DayLabel::Unrecognized(raw.to_string());
    }
    for (pattern, day) in DAY_PATTERNS {
        if folded.contains(pattern) {
            return match day {
                Some(d) => DayLabel::Weekday(*d),
                None => DayLabel::Saturday,
            };
        }
    }
    DayLabel::Unrecognized(raw.to_string())
}

/// Lowercases and strips Spanish diacritics.
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Result of parsing a wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// Minutes since midnight.
    Parsed(u32),
    /// Missing or unparsable input; reads as `0`.
    Defaulted,
}

impl ParsedTime {
    /// Minutes since midnight, `0` when defaulted.
    #[inline]
    pub fn minutes(self) -> u32 {
        match self {
            ParsedTime::Parsed(m) => m,
            ParsedTime::Defaulted => 0,
        }
    }

    /// Whether the fallback was applied.
    #[inline]
    pub fn is_defaulted(self) -> bool {
        matches!(self, ParsedTime::Defaulted)
    }
}

/// Parses `H:MM`, `HH:MM` or `HH:MM:SS` into minutes since midnight.
///
/// A bare hour (`"8"`) reads as `08:00`. Seconds are ignored.
pub fn parse_minutes(raw: &str) -> ParsedTime {
    let raw = raw.trim();
    if raw.is_empty() {
        return ParsedTime::Defaulted;
    }
    let mut parts = raw.split(':');
    let hours = match parts.next().and_then(|h| h.trim().parse::<u32>().ok()) {
        Some(h) if h < 24 => h,
        _ => return ParsedTime::Defaulted,
    };
    let minutes = match parts.next() {
        None => 0,
        Some(m) => match m.trim().parse::<u32>() {
            Ok(m) if m < 60 => m,
            _ => return ParsedTime::Defaulted,
        },
    };
    ParsedTime::Parsed(hours * 60 + minutes)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

static SCHOOL_DAY: Lazy<TimeAxis> = Lazy::new(|| TimeAxis::build(8 * 60, 21 * 60, 10));

/// Ascending slot instants at constant granularity, last instant inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    granularity: u32,
    instants: Vec<u32>,
}

impl TimeAxis {
    /// The default 08:00–21:00 axis at 10-minute granularity.
    ///
    /// Computed once per process.
    pub fn school_day() -> &'static TimeAxis {
        &SCHOOL_DAY
    }

    /// Creates an axis from `start` to `end` (inclusive) in minutes.
    pub fn new(start: u32, end: u32, granularity: u32) -> Result<Self> {
        if granularity == 0 {
            return Err(Error::InvalidAxis("granularity must be positive".into()));
        }
        if start > end {
            return Err(Error::InvalidAxis(format!(
                "start {} is after end {}",
                format_minutes(start),
                format_minutes(end)
            )));
        }
        Ok(Self::build(start, end, granularity))
    }

    /// Creates an axis from configuration.
    pub fn from_config(config: &AxisConfig) -> Result<Self> {
        let start = parse_minutes(&config.start);
        let end = parse_minutes(&config.end);
        match (start, end) {
            (ParsedTime::Parsed(s), ParsedTime::Parsed(e)) => {
                Self::new(s, e, config.granularity_minutes)
            }
            _ => Err(Error::InvalidAxis(format!(
                "cannot parse axis bounds '{}'..'{}'",
                config.start, config.end
            ))),
        }
    }

    fn build(start: u32, end: u32, granularity: u32) -> Self {
        let instants = (start..=end).step_by(granularity as usize).collect();
        Self {
            granularity,
            instants,
        }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Slot instants, ascending.
    #[inline]
    pub fn instants(&self) -> &[u32] {
        &self.instants
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// First row whose instant falls inside `interval`.
    ///
    /// `None` when the interval touches no row (entirely before the first
    /// instant, after the last, or between two instants).
    pub fn anchor_row(&self, interval: &Interval) -> Option<usize> {
        let row = self.instants.partition_point(|&t| t < interval.start_min);
        match self.instants.get(row) {
            Some(&t) if interval.contains(t) => Some(row),
            _ => None,
        }
    }

    /// Number of rows covered by `interval`, counted from its anchor row.
    ///
    /// Equals `ceil(duration / granularity)` for a slot-aligned interval
    /// that fits on the axis; never exceeds the rows remaining below the
    /// anchor.
    pub fn row_span(&self, interval: &Interval) -> usize {
        match self.anchor_row(interval) {
            Some(row) => self.instants[row..]
                .iter()
                .take_while(|&&t| t < interval.end_min)
                .count(),
            None => 0,
        }
    }

    /// Time label for a row: shown on the hour and half hour only.
    pub fn row_label(&self, row: usize) -> Option<String> {
        let t = *self.instants.get(row)?;
        if t % 30 == 0 {
            Some(format_minutes(t))
        } else {
            None
        }
    }
}
