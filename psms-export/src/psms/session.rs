//! Authenticated session state.

use std::fmt;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use super::error::PsmsError;

/// A logged-in session: the bearer token and the header set built from it.
///
/// Passed explicitly to every fetch; nothing about the session is global.
#[derive(Clone)]
pub struct Session {
    token: String,
    headers: HeaderMap,
}

impl Session {
    /// Create a session from a bearer token.
    ///
    /// Fails if the token is empty or cannot be carried in a header.
    pub fn new(token: impl Into<String>) -> Result<Self, PsmsError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(PsmsError::MissingToken);
        }

        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| PsmsError::InvalidHeader(e.to_string()))?;

        let json = HeaderValue::from_static("application/json");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, json.clone());
        headers.insert(CONTENT_TYPE, json);

        Ok(Self { token, headers })
    }

    /// Headers to attach to every request made under this session.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[cfg(test)]
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}
