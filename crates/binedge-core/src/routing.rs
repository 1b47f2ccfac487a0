//! Endpoint routing: `(operation, arguments)` to `(path, query parameters)`.
//!
//! Routing is pure. All target, query, stat-type and paging validation
//! happens here, so a [`RoutedRequest`] always holds values that are safe to
//! put on the wire.

use crate::operation::{Arguments, Operation, DEFAULT_PAGE, DEFAULT_STAT_DAYS};
use crate::target::{DomainName, EmailAddress, IpTarget, SearchQuery, TargetKind};
use crate::{ApiError, ValidationError};

/// Fully validated request shape for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedRequest {
    pub operation: Operation,
    pub path: String,
    pub params: Vec<(&'static str, String)>,
    pub paginated: bool,
}

impl RoutedRequest {
    /// Value of a query parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Copy of this request pointing at another page.
    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        match next.params.iter_mut().find(|(key, _)| *key == "page") {
            Some((_, value)) => *value = page.to_string(),
            None => next.params.push(("page", page.to_string())),
        }
        next
    }
}

/// Translation from logical operations to request shapes.
pub trait Router: Send + Sync {
    fn route(&self, operation: Operation, args: &Arguments) -> Result<RoutedRequest, ApiError>;
}

/// Router backed by the static [`Operation::descriptor`] table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointRouter;

impl EndpointRouter {
    pub const fn new() -> Self {
        Self
    }
}

impl Router for EndpointRouter {
    fn route(&self, operation: Operation, args: &Arguments) -> Result<RoutedRequest, ApiError> {
        let descriptor = operation.descriptor();
        let missing = |argument: &'static str| ValidationError::MissingArgument {
            operation: operation.as_str(),
            argument,
        };

        let path = match descriptor.target {
            Some(kind) => {
                let raw = args
                    .target
                    .as_deref()
                    .ok_or_else(|| missing(kind.as_str()))?;
                descriptor.path.replace("{target}", &normalize_target(kind, raw)?)
            }
            None => descriptor.path.to_owned(),
        };

        let mut params = Vec::new();

        if descriptor.query {
            let raw = args.query.as_deref().ok_or_else(|| missing("query"))?;
            params.push(("query", SearchQuery::parse(raw)?.as_str().to_owned()));
        }

        if let Some(family) = descriptor.stat {
            let raw = args.stat_type.as_deref().ok_or_else(|| missing("stat type"))?;
            params.push(("type", family.parse(raw)?.to_owned()));
        }

        if descriptor.days {
            let days = args.days.unwrap_or(DEFAULT_STAT_DAYS);
            if days == 0 {
                return Err(ValidationError::InvalidDays.into());
            }
            params.push(("days", days.to_string()));
        }

        if descriptor.page {
            let page = args.page.unwrap_or(DEFAULT_PAGE);
            if page == 0 {
                return Err(ValidationError::InvalidPage.into());
            }
            params.push(("page", page.to_string()));
        }

        Ok(RoutedRequest {
            operation,
            path,
            params,
            paginated: descriptor.paginated,
        })
    }
}

/// Validate a raw target for `kind` and return its canonical text.
pub fn normalize_target(kind: TargetKind, raw: &str) -> Result<String, ValidationError> {
    match kind {
        TargetKind::Ip => IpTarget::parse(raw).map(|target| target.to_string()),
        TargetKind::Domain => DomainName::parse(raw).map(|name| name.to_string()),
        TargetKind::Email => EmailAddress::parse(raw).map(|email| email.to_string()),
    }
}
