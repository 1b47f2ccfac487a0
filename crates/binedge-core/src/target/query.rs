use std::fmt::{Display, Formatter};

use crate::ValidationError;

/// Free-text search query in BinaryEdge query syntax (e.g. `port:22 country:FR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_inner_whitespace() {
        let query = SearchQuery::parse("  product:nginx country:FR ").expect("query");
        assert_eq!(query.as_str(), "product:nginx country:FR");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(SearchQuery::parse(" \t"), Err(ValidationError::EmptyQuery));
    }
}
