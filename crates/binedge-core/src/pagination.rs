//! Lazy page-by-page iteration over paginated operations.
//!
//! [`Pages`] performs exactly one request per call to `next()`. Nothing is
//! fetched ahead of consumption, and dropping the iterator stops the walk.
//!
//! After each fetch the iterator checks, in order:
//!
//! 1. the `events` list is empty: end of data, the page is not yielded;
//! 2. the page number reached the range's last page: the page is yielded and
//!    the walk ends;
//! 3. the page lacks an `events` list or a `pagesize` field: end of data,
//!    logged at `warn`, the page is not yielded.
//!
//! A failed request is yielded once as `Err` and ends the walk.

use std::iter::FusedIterator;

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::Client;
use crate::operation::DEFAULT_PAGE;
use crate::routing::RoutedRequest;
use crate::{ApiError, ValidationError};

/// Pages to walk: a start page and an optional inclusive last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    last: Option<u32>,
}

impl PageRange {
    /// Exactly one page.
    pub const fn single(page: u32) -> Self {
        Self {
            start: page,
            last: Some(page),
        }
    }

    /// `start` through `last`, both inclusive.
    pub const fn through(start: u32, last: u32) -> Self {
        Self {
            start,
            last: Some(last),
        }
    }

    /// From `start` until the service runs out of events.
    pub const fn starting_at(start: u32) -> Self {
        Self { start, last: None }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn last(&self) -> Option<u32> {
        self.last
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start == 0 {
            return Err(ValidationError::InvalidPage);
        }
        match self.last {
            Some(last) if last < self.start => Err(ValidationError::InvalidPageRange {
                start: self.start,
                last,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::single(DEFAULT_PAGE)
    }
}

/// One decoded response of a paginated operation, passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    number: u32,
    body: Value,
}

impl Page {
    pub fn new(number: u32, body: Value) -> Self {
        Self { number, body }
    }

    /// Page number that was requested.
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    pub fn total(&self) -> Option<u64> {
        self.body.get("total").and_then(Value::as_u64)
    }

    pub fn page_size(&self) -> Option<u64> {
        self.body.get("pagesize").and_then(Value::as_u64)
    }

    pub fn events(&self) -> Option<&[Value]> {
        self.body
            .get("events")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Number of events, or a malformed-response error when the page lacks
    /// the structure pagination relies on.
    pub fn event_count(&self) -> Result<usize, ApiError> {
        let events = self.events().ok_or_else(|| {
            ApiError::malformed_response(format!("page {} has no 'events' list", self.number))
        })?;
        if self.page_size().is_none() {
            return Err(ApiError::malformed_response(format!(
                "page {} has no 'pagesize' field",
                self.number
            )));
        }
        Ok(events.len())
    }
}

/// Forward-only, finite sequence of pages.
pub struct Pages<'a> {
    client: &'a Client,
    request: RoutedRequest,
    next_page: u32,
    last_page: Option<u32>,
    finished: bool,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(client: &'a Client, request: RoutedRequest, range: PageRange) -> Self {
        Self {
            client,
            request,
            next_page: range.start(),
            last_page: range.last(),
            finished: false,
        }
    }

    /// Page number the next call to `next()` will request, if any.
    pub fn next_page(&self) -> Option<u32> {
        (!self.finished).then_some(self.next_page)
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<Page, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let number = self.next_page;
        let operation = self.request.operation;
        debug!(%operation, page = number, "fetching page");

        let body = match self.client.send(&self.request.with_page(number)) {
            Ok(body) => body,
            Err(error) => {
                self.finished = true;
                return Some(Err(error));
            }
        };

        let page = Page::new(number, body);
        if page.events().is_some_and(|events| events.is_empty()) {
            debug!(%operation, page = number, "no more events");
            self.finished = true;
            return None;
        }

        if self.last_page.is_some_and(|last| number >= last) {
            self.finished = true;
            return Some(Ok(page));
        }

        if let Err(malformed) = page.event_count() {
            warn!(%operation, page = number, error = %malformed, "stopping pagination");
            self.finished = true;
            return None;
        }

        match number.checked_add(1) {
            Some(next) => self.next_page = next,
            None => self.finished = true,
        }

        Some(Ok(page))
    }
}

impl FusedIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn range_validation() {
        assert!(PageRange::single(1).validate().is_ok());
        assert!(PageRange::starting_at(4).validate().is_ok());
        assert_eq!(PageRange::single(0).validate(), Err(ValidationError::InvalidPage));
        assert_eq!(
            PageRange::through(5, 2).validate(),
            Err(ValidationError::InvalidPageRange { start: 5, last: 2 })
        );
        assert_eq!(PageRange::default(), PageRange::single(1));
    }

    #[test]
    fn page_accessors_read_pagination_fields() {
        let page = Page::new(
            2,
            json!({"total": 42, "pagesize": 20, "page": 2, "events": [{"a": 1}, {"b": 2}]}),
        );
        assert_eq!(page.number(), 2);
        assert_eq!(page.total(), Some(42));
        assert_eq!(page.page_size(), Some(20));
        assert_eq!(page.event_count(), Ok(2));
    }

    #[test]
    fn missing_structure_is_malformed() {
        let no_events = Page::new(1, json!({"pagesize": 20}));
        assert_eq!(
            no_events.event_count().map_err(|e| e.kind()),
            Err(crate::ApiErrorKind::MalformedResponse)
        );

        let no_size = Page::new(1, json!({"events": []}));
        assert!(no_size.event_count().is_err());
    }
}
