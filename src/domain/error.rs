use std::io;

use thiserror::Error;

use crate::domain::Role;

/// Library-wide error type for mlgms operations.
///
/// View-scoped failures (validation, `success: false` replies, transport
/// failures of a single call) are folded into view state by the view models.
/// Only infrastructure failures travel up to the CLI as `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// The portal API answered with a non-success HTTP status.
    #[error("Portal API responded with status {status}{}", message_suffix(.message))]
    Api {
        status: u16,
        message: Option<String>,
        body: Option<serde_json::Value>,
    },

    /// The request never produced an HTTP response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// View template could not be rendered.
    #[error("Template error: {0}")]
    Template(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A CLI action needs a session the user does not have.
    #[error("Not logged in as {0}. Run 'mlgms {0} login' first.")]
    NotLoggedIn(Role),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Message the server attached to a failed response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a failed response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// String field of a failed response body, e.g. `verification_status`.
    pub fn response_field(&self, key: &str) -> Option<&str> {
        match self {
            AppError::Api { body: Some(body), .. } => body.get(key).and_then(|v| v.as_str()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::ParseError { .. }
            | AppError::Template(_) => io::ErrorKind::InvalidInput,
            AppError::Api { status: 401 | 403, .. } | AppError::NotLoggedIn(_) => {
                io::ErrorKind::PermissionDenied
            }
            AppError::Api { status: 404, .. } => io::ErrorKind::NotFound,
            AppError::Api { .. } | AppError::Transport(_) | AppError::Prompt(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
