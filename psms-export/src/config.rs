//! Run configuration: who to log in as and where to write the export.

use std::fmt;
use std::path::{Path, PathBuf};

/// Default output file, written in the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output_projects.xlsx";

/// Login credentials. Kept in memory for the length of the run only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email, also the `userName` parameter of per-student endpoints
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub credentials: Credentials,
    /// Spreadsheet to (over)write
    pub output_path: PathBuf,
}

impl ExportConfig {
    /// Create a config for the given credentials, writing to the default path.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Set a custom output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
