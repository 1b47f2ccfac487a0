use std::fmt::{Display, Formatter};

use super::{refang, DomainName};
use crate::ValidationError;

const MAX_LOCAL_LEN: usize = 64;

/// Email address with a validated domain part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    local: String,
    domain: DomainName,
}

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let plain = refang(input);
        if plain.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }

        let invalid = || ValidationError::InvalidEmail {
            value: input.trim().to_owned(),
        };

        let (local, domain) = plain.rsplit_once('@').ok_or_else(invalid)?;
        if local.is_empty() || local.len() > MAX_LOCAL_LEN {
            return Err(invalid());
        }
        // Path-structural characters would change the request URL.
        let valid_local = local.chars().all(|ch| {
            ch.is_ascii_graphic() && !matches!(ch, '/' | '?' | '#' | '%' | '@' | '\\')
        });
        if !valid_local {
            return Err(invalid());
        }

        let domain = DomainName::parse(domain).map_err(|_| invalid())?;

        Ok(Self {
            local: local.to_owned(),
            domain,
        })
    }

    pub fn local_part(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &DomainName {
        &self.domain
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases_domain_only() {
        let email = EmailAddress::parse("John.Doe+leaks@Example[.]com").expect("email should parse");
        assert_eq!(email.to_string(), "John.Doe+leaks@example.com");
        assert_eq!(email.domain().as_str(), "example.com");
    }

    #[test]
    fn rejects_missing_parts() {
        for input in ["no-at-sign.com", "@example.com", "user@", "user@localhost"] {
            let err = EmailAddress::parse(input).expect_err(input);
            assert!(matches!(err, ValidationError::InvalidEmail { .. }), "{input}");
        }
    }

    #[test]
    fn rejects_path_characters_in_local_part() {
        assert!(EmailAddress::parse("a/b@example.com").is_err());
        assert!(EmailAddress::parse("a b@example.com").is_err());
    }
}
