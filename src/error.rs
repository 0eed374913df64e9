//! Error types.
//!
//! Every failure here is local and recoverable: the caller reports it
//! and re-triggers the action. Malformed block data is not an error;
//! see [`crate::validation::check_blocks`].

use crate::validation::RequestIssue;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary with the external generator and by
/// session control.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (network failure, closed connection).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON or did not match the contract.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The generator answered with `{ "error": ... }`.
    #[error("generator rejected the request: {0}")]
    Service(String),

    /// The outgoing request failed local checks.
    #[error("invalid request: {}", summarize(.0))]
    InvalidRequest(Vec<RequestIssue>),

    /// A request is already outstanding.
    #[error("a generation request is already in flight")]
    RequestInFlight,

    /// A custom time axis could not be built.
    #[error("invalid time axis: {0}")]
    InvalidAxis(String),
}

fn summarize(issues: &[RequestIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Text for the transient banner shown to the user.
    pub fn banner(&self) -> String {
        match self {
            Error::Service(msg) => msg.clone(),
            Error::Transport(_) | Error::Parse(_) => "Request failed, please try again".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RequestIssueKind;

    #[test]
    fn test_service_banner_is_verbatim() {
        let e = Error::Service("Maximum 6 courses allowed".into());
        assert_eq!(e.banner(), "Maximum 6 courses allowed");
    }

    #[test]
    fn test_transport_banner_is_generic() {
        let e = Error::Transport("connection reset".into());
        assert_eq!(e.banner(), "Request failed, please try again");
        assert!(e.to_string().contains("connection reset"));
    }

    #[test]
    fn test_invalid_request_lists_issues() {
        let e = Error::InvalidRequest(vec![
            RequestIssue::new(RequestIssueKind::NoCourses, "select at least one course"),
            RequestIssue::new(RequestIssueKind::DuplicateCourse, "duplicate course: MAT1"),
        ]);
        let text = e.to_string();
        assert!(text.contains("select at least one course"));
        assert!(text.contains("duplicate course: MAT1"));
    }
}
