use std::fmt::{Display, Formatter};

use super::refang;
use crate::ValidationError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Lowercased DNS name such as `example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let plain = refang(input);
        if plain.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }

        let normalized = plain.trim_end_matches('.').to_ascii_lowercase();
        let invalid = || ValidationError::InvalidDomain {
            value: input.trim().to_owned(),
        };

        if normalized.len() > MAX_NAME_LEN || !normalized.contains('.') {
            return Err(invalid());
        }

        for label in normalized.split('.') {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(invalid());
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(invalid());
            }
            let valid = label
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
            if !valid {
                return Err(invalid());
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DomainName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DomainName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases() {
        let name = DomainName::parse(" Mail.Example[.]COM. ").expect("domain should parse");
        assert_eq!(name.as_str(), "mail.example.com");
    }

    #[test]
    fn accepts_service_labels() {
        let name = DomainName::parse("_dmarc.example.org").expect("underscore label");
        assert_eq!(name.as_str(), "_dmarc.example.org");
    }

    #[test]
    fn rejects_single_label_and_bad_characters() {
        for input in ["localhost", "exa mple.com", "-bad.com", "a..b", "example.com/x"] {
            let err = DomainName::parse(input).expect_err(input);
            assert!(matches!(err, ValidationError::InvalidDomain { .. }), "{input}");
        }
    }

    #[test]
    fn rejects_overlong_label() {
        let input = format!("{}.com", "a".repeat(64));
        assert!(DomainName::parse(&input).is_err());
    }
}
