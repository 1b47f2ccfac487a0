//! CLI argument definitions for binaryedge.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `config` | Store or show the API key |
//! | `ip` | Host, image, torrent, domain and sensor data for an address |
//! | `search` | Query one of the search indexes |
//! | `stats` | Aggregate statistics over a host query |
//! | `sensor-stats` | Statistics over sensor events |
//! | `dataleaks` | Breach lookups for an email or an organization |
//! | `catalog` | Static catalogs (breaches, image tags) |
//! | `domains` | DNS records and subdomains of a domain |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--no-verify` | `false` | Skip TLS certificate verification |
//! | `--no-pretty` | `false` | Compact JSON output |
//! | `--config` | platform config dir | Config file location |
//! | `--log-level` | `warn` | Log filter when `RUST_LOG` is unset |
//! | `--timeout-ms` | `30000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! binaryedge config --key 0123-4567
//! binaryedge ip 8[.]8[.]8[.]8 --view historical
//! binaryedge search 'product:nginx country:FR' --page 2 --max-pages 4
//! binaryedge sensor-stats 'tags:ssh_scanner' --type ports --days 7
//! ```

use std::path::PathBuf;

use binedge_core::{Operation, PageRange, DEFAULT_PAGE, DEFAULT_STAT_DAYS, DEFAULT_TIMEOUT_MS};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Query the BinaryEdge threat-intelligence API.
///
/// Every command prints the service's JSON response on stdout; paginated
/// commands print one document per page.
#[derive(Debug, Parser)]
#[command(name = "binaryedge", author, version, about = "Query the BinaryEdge API")]
pub struct Cli {
    /// Disable TLS certificate verification.
    #[arg(long, global = true, default_value_t = false)]
    pub no_verify: bool,

    /// Print compact JSON instead of indented, key-sorted output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_pretty: bool,

    /// Config file to read and write.
    ///
    /// Defaults to `$BINARYEDGE_CONFIG`, then `<config dir>/binaryedge/config.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set (e.g. `debug`, `binedge_core=trace`).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key, then show the config file.
    ///
    /// # Examples
    ///
    ///   binaryedge config --key 0123-4567
    ///   binaryedge config
    Config(ConfigArgs),

    /// Look up an IP address or network.
    ///
    /// # Examples
    ///
    ///   binaryedge ip 8.8.8.8
    ///   binaryedge ip 8.8.8.8 --view vulns
    ///   binaryedge ip 1.2.3.4 --view domains --all
    Ip(IpArgs),

    /// Search hosts, images, domains or sensor events.
    ///
    /// # Examples
    ///
    ///   binaryedge search 'port:443 country:PT'
    ///   binaryedge search 'tag:webcam' --index images --max-pages 3
    Search(SearchArgs),

    /// Aggregate statistics over a host query.
    Stats(StatsArgs),

    /// Statistics over sensor events for the last N days.
    SensorStats(SensorStatsArgs),

    /// Breaches affecting an email address or an organization.
    Dataleaks(DataleaksArgs),

    /// Static catalogs.
    Catalog(CatalogArgs),

    /// DNS records or subdomains of a domain.
    Domains(DomainsArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// API key to store.
    #[arg(long, short)]
    pub key: Option<String>,
}

/// Page selection shared by the paginated commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct PagingArgs {
    /// First page to fetch.
    #[arg(long, short, default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Last page to fetch, inclusive.
    #[arg(long, value_name = "PAGE", conflicts_with = "all")]
    pub max_pages: Option<u32>,

    /// Keep fetching until the service runs out of events.
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

impl PagingArgs {
    pub fn range(&self) -> PageRange {
        match (self.all, self.max_pages) {
            (true, _) => PageRange::starting_at(self.page),
            (false, Some(last)) => PageRange::through(self.page, last),
            (false, None) => PageRange::single(self.page),
        }
    }

    /// True when the user asked for anything but the first single page.
    pub fn is_set(&self) -> bool {
        self.page != DEFAULT_PAGE || self.max_pages.is_some() || self.all
    }
}

#[derive(Debug, Args)]
pub struct IpArgs {
    /// IP address or CIDR network; defanged forms are accepted.
    pub ip: String,

    #[arg(long, value_enum, default_value_t = IpView::Lookup)]
    pub view: IpView,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Data set requested by `ip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpView {
    /// Latest host events.
    Lookup,
    /// CVEs found on the host.
    Vulns,
    /// Six months of host events.
    Historical,
    /// Vulnerability score.
    Score,
    /// Remote desktop screenshots.
    Image,
    /// Recent torrent activity.
    Torrent,
    /// Historical torrent activity.
    TorrentHistorical,
    /// Domains resolving to the address (paginated).
    Domains,
    /// Sensor events.
    Sensor,
}

impl IpView {
    pub const fn operation(self) -> Operation {
        match self {
            Self::Lookup => Operation::HostLookup,
            Self::Vulns => Operation::HostVulnerabilities,
            Self::Historical => Operation::HostHistorical,
            Self::Score => Operation::HostScore,
            Self::Image => Operation::ImageLookup,
            Self::Torrent => Operation::TorrentLookup,
            Self::TorrentHistorical => Operation::TorrentHistorical,
            Self::Domains => Operation::DomainIp,
            Self::Sensor => Operation::SensorLookup,
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query in the service's search syntax.
    pub query: String,

    #[arg(long, value_enum, default_value_t = SearchIndex::Hosts)]
    pub index: SearchIndex,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchIndex {
    Hosts,
    Images,
    Domains,
    Sensors,
}

impl SearchIndex {
    pub const fn operation(self) -> Operation {
        match self {
            Self::Hosts => Operation::HostSearch,
            Self::Images => Operation::ImageSearch,
            Self::Domains => Operation::DomainSearch,
            Self::Sensors => Operation::SensorSearch,
        }
    }
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    pub query: String,

    /// Statistic to aggregate: ports, products, versions, tags, services, countries or asn.
    #[arg(long = "type", value_name = "TYPE")]
    pub stat_type: String,

    #[arg(long, short, default_value_t = DEFAULT_PAGE)]
    pub page: u32,
}

#[derive(Debug, Args)]
pub struct SensorStatsArgs {
    pub query: String,

    /// Statistic to aggregate: ports, tags, countries, asn, ips, payloads or http_path.
    #[arg(long = "type", value_name = "TYPE")]
    pub stat_type: String,

    /// Window in days.
    #[arg(long, default_value_t = DEFAULT_STAT_DAYS)]
    pub days: u32,
}

#[derive(Debug, Args)]
pub struct DataleaksArgs {
    /// Email address, or a domain with `--organization`.
    pub target: String,

    /// Summarize breaches for every account of a domain.
    #[arg(long, default_value_t = false)]
    pub organization: bool,
}

impl DataleaksArgs {
    pub const fn operation(&self) -> Operation {
        if self.organization {
            Operation::DataleaksOrganization
        } else {
            Operation::DataleaksEmail
        }
    }
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(value_enum)]
    pub catalog: Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Catalog {
    /// Breaches known to the service.
    Dataleaks,
    /// Tags usable in image searches.
    ImageTags,
}

impl Catalog {
    pub const fn operation(self) -> Operation {
        match self {
            Self::Dataleaks => Operation::DataleaksInfo,
            Self::ImageTags => Operation::ImageTags,
        }
    }
}

#[derive(Debug, Args)]
pub struct DomainsArgs {
    pub domain: String,

    #[arg(long, value_enum, default_value_t = DomainView::Dns)]
    pub view: DomainView,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DomainView {
    Dns,
    Subdomains,
}

impl DomainView {
    pub const fn operation(self) -> Operation {
        match self {
            Self::Dns => Operation::DomainDns,
            Self::Subdomains => Operation::DomainSubdomains,
        }
    }
}
