//! Placement API error types.

/// Errors from talking to the placement API.
#[derive(Debug, thiserror::Error)]
pub enum PsmsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Login endpoint answered with something other than 200
    #[error("login failed: {status} - {body}")]
    LoginRejected { status: u16, body: String },

    /// Login succeeded but the body carried no usable token
    #[error("token not found in the login response")]
    MissingToken,

    /// A data endpoint answered with something other than 200
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Token could not be placed in an HTTP header
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

impl PsmsError {
    /// Whether this error came from the login step.
    ///
    /// Login errors end the run; every other error degrades a single fetch.
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self,
            PsmsError::LoginRejected { .. } | PsmsError::MissingToken
        )
    }

    /// Build a JSON error, keeping a prefix of the offending body.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        PsmsError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
