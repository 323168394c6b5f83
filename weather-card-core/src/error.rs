use reqwest::StatusCode;
use thiserror::Error;

/// The only message a failed query ever shows, whatever went wrong underneath.
pub const QUERY_FAILED_MESSAGE: &str = "City not found ❌";

/// Reasons a single current-weather fetch can fail.
///
/// These are logged for diagnostics; the view collapses all of them into
/// [`QUERY_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed weather payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather payload has no condition entry")]
    MissingCondition,
}

impl FetchError {
    pub fn status(status: StatusCode, body: &str) -> Self {
        Self::Status {
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
