use std::fmt::{Debug, Formatter};

use crate::ValidationError;

/// BinaryEdge access key. Debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCredential);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw key, for the auth header only.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl TryFrom<String> for Credential {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
