use binedge_core::{ApiError, ApiErrorKind};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] binedge_core::ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Usage(_) => 2,
            Self::Api(error) => match error.kind() {
                ApiErrorKind::InvalidArgument => 2,
                ApiErrorKind::NotFound => 3,
                ApiErrorKind::UnexpectedStatus => 4,
                ApiErrorKind::Transport => 5,
                ApiErrorKind::MalformedResponse | ApiErrorKind::Decode => 6,
            },
            Self::Serialization(_) => 6,
            Self::Config(_) => 7,
            Self::Io(_) => 10,
        }
    }
}
