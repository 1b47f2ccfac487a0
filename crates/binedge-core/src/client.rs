//! Request engine: authenticated GETs, status classification and pagination.
//!
//! # Example
//!
//! ```rust,ignore
//! use binedge_core::{Client, Credential, PageRange};
//!
//! let client = Client::builder(Credential::new("my-api-key")?).build()?;
//!
//! let host = client.host("8[.]8[.]8[.]8")?;
//! println!("{host}");
//!
//! for page in client.host_search_pages("product:nginx", PageRange::through(1, 3))? {
//!     println!("{}", page?.body());
//! }
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, USER_AGENT_HEADER};
use crate::operation::{Arguments, Operation};
use crate::pagination::{PageRange, Pages};
use crate::routing::{EndpointRouter, RoutedRequest, Router};
use crate::{ApiError, Credential, ValidationError};

/// Versioned API origin every path is relative to.
pub const DEFAULT_BASE_URL: &str = "https://api.binaryedge.io/v2/";

pub const DEFAULT_USER_AGENT: &str = concat!("binedge/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Session settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub verify_tls: bool,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            user_agent: String::from(DEFAULT_USER_AGENT),
            verify_tls: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Builder for [`Client`].
///
/// Without an explicit transport, [`build`](ClientBuilder::build) creates a
/// pooled [`ReqwestHttpClient`] honouring the TLS-verification flag.
pub struct ClientBuilder {
    credential: Credential,
    config: ClientConfig,
    router: Option<Arc<dyn Router>>,
    http_client: Option<Arc<dyn HttpClient>>,
}

impl ClientBuilder {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            config: ClientConfig::default(),
            router: None,
            http_client: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.config.base_url = base_url;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.config.verify_tls = verify_tls;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = Some(router);
        self
    }

    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Result<Client, ApiError> {
        if self.config.user_agent.trim().is_empty() {
            return Err(ApiError::invalid_argument("user agent cannot be empty"));
        }

        let http_client: Arc<dyn HttpClient> = match self.http_client {
            Some(http_client) => http_client,
            None => Arc::new(
                ReqwestHttpClient::new(self.config.verify_tls)
                    .map_err(|e| ApiError::transport(e.message()))?,
            ),
        };

        let router: Arc<dyn Router> = match self.router {
            Some(router) => router,
            None => Arc::new(EndpointRouter::new()),
        };

        Ok(Client {
            credential: self.credential,
            config: self.config,
            router,
            http_client,
        })
    }
}

/// BinaryEdge API client.
///
/// Cheap to clone; clones share the router and the connection pool.
#[derive(Clone)]
pub struct Client {
    credential: Credential,
    config: ClientConfig,
    router: Arc<dyn Router>,
    http_client: Arc<dyn HttpClient>,
}

impl Client {
    pub fn builder(credential: Credential) -> ClientBuilder {
        ClientBuilder::new(credential)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one authenticated GET and classify the outcome.
    ///
    /// # Errors
    ///
    /// - [`NotFound`](crate::ApiErrorKind::NotFound) on HTTP 404
    /// - [`UnexpectedStatus`](crate::ApiErrorKind::UnexpectedStatus) on any other non-200
    /// - [`Transport`](crate::ApiErrorKind::Transport) when no response was received
    /// - [`Decode`](crate::ApiErrorKind::Decode) when a 200 body is not JSON
    pub fn request(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        let request = HttpRequest::get(build_url(&self.config.base_url, path, params))
            .with_credential(&self.credential)
            .with_header(USER_AGENT_HEADER, self.config.user_agent.as_str())
            .with_timeout_ms(self.config.timeout_ms);

        debug!(path, "sending request");
        let response = self
            .http_client
            .execute(request)
            .map_err(|e| ApiError::transport(e.message()))?;
        debug!(path, status = response.status, "received response");

        match response.status {
            200 => serde_json::from_str(&response.body)
                .map_err(|e| ApiError::decode(format!("response body is not valid JSON: {e}"))),
            404 => Err(ApiError::not_found()),
            status => Err(ApiError::unexpected_status(status)),
        }
    }

    /// Send an already routed request.
    pub fn send(&self, routed: &RoutedRequest) -> Result<Value, ApiError> {
        self.request(&routed.path, &routed.params)
    }

    /// Route and run one operation, returning the decoded body unchanged.
    pub fn execute(&self, operation: Operation, args: &Arguments) -> Result<Value, ApiError> {
        let routed = self.router.route(operation, args)?;
        self.send(&routed)
    }

    /// Route a paginated operation and return a lazy page sequence.
    ///
    /// All validation happens here, before the first request.
    pub fn paginate(
        &self,
        operation: Operation,
        args: &Arguments,
        range: PageRange,
    ) -> Result<Pages<'_>, ApiError> {
        range.validate()?;
        let routed = self
            .router
            .route(operation, &args.clone().with_page(range.start()))?;
        if !routed.paginated {
            return Err(ValidationError::NotPaginated {
                operation: operation.as_str(),
            }
            .into());
        }
        Ok(Pages::new(self, routed, range))
    }

    pub fn host(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::HostLookup, &Arguments::target(ip))
    }

    pub fn host_vulnerabilities(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::HostVulnerabilities, &Arguments::target(ip))
    }

    /// Host events with up to six months of history.
    pub fn host_historical(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::HostHistorical, &Arguments::target(ip))
    }

    pub fn host_search(&self, query: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(Operation::HostSearch, &Arguments::query(query).with_page(page))
    }

    pub fn host_search_pages(&self, query: &str, range: PageRange) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::HostSearch, &Arguments::query(query), range)
    }

    pub fn host_score(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::HostScore, &Arguments::target(ip))
    }

    pub fn image_ip(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::ImageLookup, &Arguments::target(ip))
    }

    pub fn image_search(&self, query: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(Operation::ImageSearch, &Arguments::query(query).with_page(page))
    }

    pub fn image_search_pages(&self, query: &str, range: PageRange) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::ImageSearch, &Arguments::query(query), range)
    }

    pub fn image_tags(&self) -> Result<Value, ApiError> {
        self.execute(Operation::ImageTags, &Arguments::new())
    }

    pub fn torrent_ip(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::TorrentLookup, &Arguments::target(ip))
    }

    pub fn torrent_historical_ip(&self, ip: &str) -> Result<Value, ApiError> {
        self.execute(Operation::TorrentHistorical, &Arguments::target(ip))
    }

    /// Breaches containing `email`; a miss is reported as `NotFound`.
    pub fn dataleaks_email(&self, email: &str) -> Result<Value, ApiError> {
        self.execute(Operation::DataleaksEmail, &Arguments::target(email))
    }

    pub fn dataleaks_organization(&self, domain: &str) -> Result<Value, ApiError> {
        self.execute(Operation::DataleaksOrganization, &Arguments::target(domain))
    }

    pub fn dataleaks_info(&self) -> Result<Value, ApiError> {
        self.execute(Operation::DataleaksInfo, &Arguments::new())
    }

    pub fn domain_subdomains(&self, domain: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(
            Operation::DomainSubdomains,
            &Arguments::target(domain).with_page(page),
        )
    }

    pub fn domain_subdomains_pages(
        &self,
        domain: &str,
        range: PageRange,
    ) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::DomainSubdomains, &Arguments::target(domain), range)
    }

    pub fn domain_dns(&self, domain: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(Operation::DomainDns, &Arguments::target(domain).with_page(page))
    }

    pub fn domain_dns_pages(&self, domain: &str, range: PageRange) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::DomainDns, &Arguments::target(domain), range)
    }

    pub fn domain_ip(&self, ip: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(Operation::DomainIp, &Arguments::target(ip).with_page(page))
    }

    pub fn domain_ip_pages(&self, ip: &str, range: PageRange) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::DomainIp, &Arguments::target(ip), range)
    }

    pub fn domain_search(&self, query: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(Operation::DomainSearch, &Arguments::query(query).with_page(page))
    }

    pub fn domain_search_pages(
        &self,
        query: &str,
        range: PageRange,
    ) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::DomainSearch, &Arguments::query(query), range)
    }

    /// Sensor events for an address or a network up to /24.
    pub fn sensor_ip(&self, target: &str) -> Result<Value, ApiError> {
        self.execute(Operation::SensorLookup, &Arguments::target(target))
    }

    pub fn sensor_search(&self, query: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(Operation::SensorSearch, &Arguments::query(query).with_page(page))
    }

    pub fn sensor_search_pages(
        &self,
        query: &str,
        range: PageRange,
    ) -> Result<Pages<'_>, ApiError> {
        self.paginate(Operation::SensorSearch, &Arguments::query(query), range)
    }

    pub fn sensor_search_stats(
        &self,
        query: &str,
        stat_type: &str,
        days: u32,
    ) -> Result<Value, ApiError> {
        self.execute(
            Operation::SensorSearchStats,
            &Arguments::query(query)
                .with_stat_type(stat_type)
                .with_days(days),
        )
    }

    pub fn stats(&self, query: &str, stat_type: &str, page: u32) -> Result<Value, ApiError> {
        self.execute(
            Operation::AggregateStats,
            &Arguments::query(query)
                .with_stat_type(stat_type)
                .with_page(page),
        )
    }
}

fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{base_url}{path}");
    for (index, (name, value)) in params.iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(name));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
