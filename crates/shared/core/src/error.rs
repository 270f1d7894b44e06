//! The single error type shared by every LendingClub crate
//!
//! Every failure carries a human message and, optionally, an actionable hint
//! and free-text details (often the raw JSON body of a rejected request).

use std::fmt;
use thiserror::Error;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or unreadable configuration / credentials
    Config,
    /// Caller supplied an argument the API would reject
    InvalidArgument,
    /// The server answered with a non-success status
    Response,
    /// The request never produced a response
    Connection,
    /// A body could not be decoded
    Parse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::InvalidArgument => "invalid-argument",
            Self::Response => "response",
            Self::Connection => "connection",
            Self::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("{message}{}", enrichment(.hint, .details))]
pub struct Error {
    kind: ErrorKind,
    message: String,
    hint: Option<String>,
    details: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

fn enrichment(hint: &Option<String>, details: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(hint) = hint {
        out.push_str("\n[=== Hint ===]\n");
        out.push_str(hint);
    }
    if let Some(details) = details {
        out.push_str("\n[=== Details ===]\n");
        out.push_str(details);
    }
    out
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint: None,
            details: None,
            source: None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Response, message)
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Builder: attach an actionable hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Builder: attach free-text details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Builder: attach the underlying cause
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
