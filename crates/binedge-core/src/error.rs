use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Input validation errors raised before any request reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API key cannot be empty")]
    EmptyCredential,

    #[error("target cannot be empty")]
    EmptyTarget,
    #[error("invalid IP address or network: '{value}'")]
    InvalidAddress { value: String },
    #[error("invalid domain name: '{value}'")]
    InvalidDomain { value: String },
    #[error("invalid email address: '{value}'")]
    InvalidEmail { value: String },
    #[error("search query cannot be empty")]
    EmptyQuery,

    #[error("invalid stat type '{value}', expected one of {expected}")]
    InvalidStatType {
        value: String,
        expected: &'static str,
    },

    #[error("page must be greater than zero")]
    InvalidPage,
    #[error("page range end {last} is before start {start}")]
    InvalidPageRange { start: u32, last: u32 },
    #[error("days must be greater than zero")]
    InvalidDays,

    #[error("operation '{operation}' is missing its {argument}")]
    MissingArgument {
        operation: &'static str,
        argument: &'static str,
    },
    #[error("operation '{operation}' does not support pagination")]
    NotPaginated { operation: &'static str },
}

/// Failure classification for API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidArgument,
    NotFound,
    UnexpectedStatus,
    MalformedResponse,
    Transport,
    Decode,
}

/// Structured error returned by every client operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::InvalidArgument,
            message: message.into(),
            status: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: String::from("search term not found"),
            status: Some(404),
        }
    }

    pub fn unexpected_status(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::UnexpectedStatus,
            message: format!("invalid return code {status}"),
            status: Some(status),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::MalformedResponse,
            message: message.into(),
            status: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
            status: Some(200),
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status attached to the failure, when one was received.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::InvalidArgument => "api.invalid_argument",
            ApiErrorKind::NotFound => "api.not_found",
            ApiErrorKind::UnexpectedStatus => "api.unexpected_status",
            ApiErrorKind::MalformedResponse => "api.malformed_response",
            ApiErrorKind::Transport => "api.transport",
            ApiErrorKind::Decode => "api.decode",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_argument(error.to_string())
    }
}
