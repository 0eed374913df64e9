//! Session view state.
//!
//! Owns the candidate list of the last successful generation, the
//! selected index and the banner. All state lives here; nothing is
//! process-global.
//!
//! # Request lifecycle
//!
//! Generation is two-phase so callers can await any transport between
//! the phases: [`Session::begin_generate`] validates and marks the
//! session busy; [`Session::finish_generate`] consumes the outcome and
//! clears the flag. A second begin while busy is rejected. On any
//! failure the candidate list and selection are left untouched.

use tracing::{debug, info, warn};

use crate::axis::TimeAxis;
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::layout::{Grid, GridBuilder};
use crate::models::ScheduleCandidate;
use crate::protocol::{ConfigBlob, GenerateRequest, GenerateResponse, ScheduleService};
use crate::summary::ScheduleSummary;
use crate::validation::validate_request;

/// Interactive session state.
#[derive(Debug, Clone)]
pub struct Session {
    axis: TimeAxis,
    max_courses: usize,
    config: ConfigBlob,
    candidates: Vec<ScheduleCandidate>,
    index: usize,
    in_flight: bool,
    banner: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            axis: TimeAxis::school_day().clone(),
            max_courses: LayoutConfig::default().max_courses,
            config: ConfigBlob::default(),
            candidates: Vec::new(),
            index: 0,
            in_flight: false,
            banner: None,
        }
    }
}

impl Session {
    /// Session on the default school-day axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session from layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Result<Self> {
        Ok(Self {
            axis: TimeAxis::from_config(&config.axis)?,
            max_courses: config.max_courses,
            ..Self::default()
        })
    }

    /// Replaces the stored configuration blob.
    pub fn set_config(&mut self, config: ConfigBlob) {
        self.config = config;
    }

    #[inline]
    pub fn config(&self) -> &ConfigBlob {
        &self.config
    }

    #[inline]
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    #[inline]
    pub fn candidates(&self) -> &[ScheduleCandidate] {
        &self.candidates
    }

    /// Selected index (0-based).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a generation request is outstanding.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Latest banner text.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Clears the banner once it has been shown.
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Validates and builds the request body, marking the session busy.
    pub fn begin_generate<S: AsRef<str>>(&mut self, courses: &[S]) -> Result<GenerateRequest> {
        if self.in_flight {
            return Err(Error::RequestInFlight);
        }
        let request = GenerateRequest::new(courses.iter().map(|c| c.as_ref().to_string()))
            .with_config(&self.config);
        if let Err(issues) = validate_request(&request, self.max_courses) {
            let err = Error::InvalidRequest(issues);
            self.banner = Some(err.banner());
            return Err(err);
        }
        self.in_flight = true;
        debug!(courses = request.courses.len(), "generate request started");
        Ok(request)
    }

    /// Applies the outcome of a generate request and clears the busy flag.
    ///
    /// On success the list is replaced and the selection reset to the
    /// first candidate, even when the list is empty. On failure the
    /// previous list and selection stay.
    pub fn finish_generate(&mut self, outcome: Result<GenerateResponse>) -> Result<ScheduleSummary> {
        self.in_flight = false;
        match outcome.and_then(GenerateResponse::into_schedules) {
            Ok(candidates) => {
                let summary = ScheduleSummary::calculate(&candidates);
                info!(
                    total = summary.total(),
                    clean = summary.clean,
                    valid_exception = summary.valid_exception,
                    conflicted = summary.conflicted,
                    "schedules received"
                );
                self.banner = Some(if candidates.is_empty() {
                    "No schedule combinations found".to_string()
                } else {
                    summary.banner()
                });
                self.candidates = candidates;
                self.index = 0;
                Ok(summary)
            }
            Err(err) => {
                warn!(error = %err, "generate request failed");
                self.banner = Some(err.banner());
                Err(err)
            }
        }
    }

    /// Runs both phases against a service.
    pub fn generate_with<S: AsRef<str>>(
        &mut self,
        service: &impl ScheduleService,
        courses: &[S],
    ) -> Result<ScheduleSummary> {
        let request = self.begin_generate(courses)?;
        let outcome = service.generate(&request);
        self.finish_generate(outcome)
    }

    /// Loads the stored configuration; keeps the current one on failure.
    pub fn load_config_with(&mut self, service: &impl ScheduleService) -> Result<()> {
        match service.load_config() {
            Ok(config) => {
                self.config = config;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "config load failed, keeping current");
                Err(err)
            }
        }
    }

    /// Stores the current configuration.
    pub fn save_config_with(&mut self, service: &impl ScheduleService) -> Result<()> {
        service.save_config(&self.config).map_err(|err| {
            self.banner = Some(err.banner());
            err
        })
    }

    /// Selected candidate.
    pub fn current(&self) -> Option<&ScheduleCandidate> {
        self.candidates.get(self.index)
    }

    /// Moves to the previous candidate; stays at the first.
    pub fn select_previous(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Moves to the next candidate; stays at the last.
    pub fn select_next(&mut self) -> usize {
        if self.index + 1 < self.candidates.len() {
            self.index += 1;
        }
        self.index
    }

    /// Selects a candidate, clamped to the list bounds.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index.min(self.candidates.len().saturating_sub(1));
        self.index
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.candidates.len()
    }

    /// `"i / n"`, 1-based; `None` with no candidates.
    pub fn counter(&self) -> Option<String> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(format!("{} / {}", self.index + 1, self.candidates.len()))
        }
    }

    /// Summary of the current list.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::calculate(&self.candidates)
    }

    /// Grid for the selected candidate, rebuilt on every call.
    pub fn grid(&self) -> Option<Grid> {
        self.current()
            .map(|c| GridBuilder::with_axis(&self.axis).build(c))
    }
}
