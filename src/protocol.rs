//! Boundary contract with the external generator and data store.
//!
//! This crate shapes outgoing request bodies and decodes incoming
//! response bodies; it owns no transport. Configuration and tabular data
//! are passed through verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::ScheduleCandidate;

/// Body of a generate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Selected course codes (1..=6, unique).
    pub courses: Vec<String>,
    /// Allowed groups per course/section, opaque to this crate.
    #[serde(default = "empty_object")]
    pub group_configs: Value,
    /// Approved exceptions, opaque to this crate.
    #[serde(default = "empty_object")]
    pub valid_topones: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl GenerateRequest {
    /// Request for the given courses with empty configuration.
    pub fn new(courses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            courses: courses.into_iter().map(Into::into).collect(),
            group_configs: empty_object(),
            valid_topones: empty_object(),
        }
    }

    /// Copies the configuration maps from a stored blob.
    pub fn with_config(mut self, config: &ConfigBlob) -> Self {
        self.group_configs = config.group_configs();
        self.valid_topones = config.valid_topones();
        self
    }

    /// JSON body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Body of a generate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    /// Business-rule failure.
    Error { error: String },
    /// Candidate list, possibly empty.
    Schedules {
        schedules: Vec<ScheduleCandidate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        success: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl GenerateResponse {
    /// Decodes a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Candidates, or the server's error as [`Error::Service`].
    pub fn into_schedules(self) -> Result<Vec<ScheduleCandidate>> {
        match self {
            GenerateResponse::Error { error } => Err(Error::Service(error)),
            GenerateResponse::Schedules { schedules, .. } => Ok(schedules),
        }
    }
}

/// Stored configuration, round-tripped verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigBlob(pub Value);

impl Default for ConfigBlob {
    fn default() -> Self {
        let mut map = Map::new();
        map.insert("groupConfigs".into(), empty_object());
        map.insert("toponesConfigs".into(), empty_object());
        Self(Value::Object(map))
    }
}

impl ConfigBlob {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Group configuration map, empty if absent.
    pub fn group_configs(&self) -> Value {
        self.field("groupConfigs")
    }

    /// Approved exception map, empty if absent.
    pub fn valid_topones(&self) -> Value {
        self.field("toponesConfigs")
    }

    fn field(&self, name: &str) -> Value {
        self.0.get(name).cloned().unwrap_or_else(empty_object)
    }
}

/// One untyped row of the tabular store.
pub type TableRow = Map<String, Value>;

/// Rows of the tabular store, passed through verbatim.
pub type TableRows = Vec<TableRow>;

/// Synchronous client for the external services.
///
/// Implementations own the transport; failures map to
/// [`Error::Transport`] or [`Error::Parse`].
pub trait ScheduleService {
    /// Runs a combination search.
    fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse>;

    /// Loads the stored configuration.
    fn load_config(&self) -> Result<ConfigBlob>;

    /// Stores a configuration.
    fn save_config(&self, config: &ConfigBlob) -> Result<()>;
}
