//! Weekly class timetable layout for the U-Engine ecosystem.
//!
//! Renders one of several generated weekly schedules as a grid and
//! classifies each schedule by its conflict and exception flags. The
//! combination search itself is an external service; this crate only
//! consumes its output.
//!
//! # Modules
//!
//! - **`axis`**: Time axis quantization, day and time normalization
//! - **`models`**: Domain types: `TimeBlock`, `BlockKey`, `Interval`,
//!   `ScheduleCandidate`
//! - **`layout`**: Overlap clustering, column assignment, grid materialization
//! - **`render`**: HTML table rendering of a grid
//! - **`summary`**: Classification counts, banner and alert texts
//! - **`protocol`**: Generate request/response bodies, pass-through config
//! - **`session`**: View state (candidate list, navigation, busy guard)
//! - **`config`**: Axis and rendering settings
//! - **`error`**: Crate error type
//! - **`validation`**: Request checks and malformed-block warnings
//!
//! # Example
//!
//! ```
//! use u_timetable::layout::materialize;
//! use u_timetable::models::{ScheduleCandidate, TimeBlock};
//! use u_timetable::render::HtmlRenderer;
//!
//! let candidate = ScheduleCandidate::new(vec![
//!     TimeBlock::new("MATH101", 1, 0, "Lunes", "08:00", "09:00"),
//!     TimeBlock::new("PHYS101", 1, 0, "Lunes", "08:30", "09:30"),
//! ]);
//! let grid = materialize(&candidate);
//! assert_eq!(grid.collisions().count(), 1);
//! let html = HtmlRenderer::new().render(&grid);
//! assert!(html.contains("rowspan=\"9\""));
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod protocol;
pub mod render;
pub mod session;
pub mod summary;
pub mod validation;

pub use error::{Error, Result};
