//! # binedge Core
//!
//! Client engine for the BinaryEdge threat-intelligence API.
//!
//! ## Overview
//!
//! - **Endpoint router**: pure translation from an [`Operation`] and its
//!   [`Arguments`] to a URL path and query parameters, with all input
//!   validation
//! - **Request engine**: the authenticated [`Client`] session, HTTP status
//!   classification and lazy pagination
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client session, builder, named operations |
//! | [`credential`] | API key wrapper |
//! | [`error`] | Validation and API error types |
//! | [`http_client`] | Blocking transport abstraction |
//! | [`operation`] | Operation enum and routing descriptors |
//! | [`pagination`] | Page ranges and the lazy page iterator |
//! | [`routing`] | Router trait and default endpoint router |
//! | [`stat`] | Stat types for the stats endpoints |
//! | [`target`] | Validated IP, domain, email and query targets |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / caller   │
//! └────────┬────────┘
//!          │ named operation
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │     Client      │────▶│  EndpointRouter  │
//! │ (request engine)│     │  (pure, no I/O)  │
//! └────────┬────────┘     └──────────────────┘
//!          │ GET + X-Key
//!          ▼
//! ┌─────────────────┐
//! │   HttpClient    │
//! │ (reqwest/fake)  │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use binedge_core::{ApiError, ApiErrorKind};
//!
//! fn describe(error: &ApiError) -> String {
//!     match error.kind() {
//!         ApiErrorKind::NotFound => String::from("no data for this target"),
//!         ApiErrorKind::UnexpectedStatus => format!("service error {:?}", error.status()),
//!         _ => error.to_string(),
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is only ever written to the `X-Key` header; its `Debug`
//!   output is redacted and it is never logged
//! - Targets are validated before they are placed in a request path

pub mod client;
pub mod credential;
pub mod error;
pub mod http_client;
pub mod operation;
pub mod pagination;
pub mod routing;
pub mod stat;
pub mod target;

pub use client::{
    Client, ClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
};

pub use credential::Credential;

pub use error::{ApiError, ApiErrorKind, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, AUTH_HEADER,
    USER_AGENT_HEADER,
};

pub use operation::{Arguments, Operation, OperationDescriptor, DEFAULT_PAGE, DEFAULT_STAT_DAYS};

pub use pagination::{Page, PageRange, Pages};

pub use routing::{EndpointRouter, RoutedRequest, Router};

pub use stat::{SensorStatType, StatFamily, StatType};

pub use target::{DomainName, EmailAddress, IpTarget, SearchQuery, TargetKind};
