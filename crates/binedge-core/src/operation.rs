//! Logical API operations and their routing descriptors.
//!
//! # Operations
//!
//! | Operation | Path | Target | Params | Paginated |
//! |-----------|------|--------|--------|-----------|
//! | [`HostLookup`](Operation::HostLookup) | `query/ip/{target}` | IP | - | no |
//! | [`HostVulnerabilities`](Operation::HostVulnerabilities) | `query/cve/ip/{target}` | IP | - | no |
//! | [`HostHistorical`](Operation::HostHistorical) | `query/ip/historical/{target}` | IP | - | no |
//! | [`HostSearch`](Operation::HostSearch) | `query/search` | - | query, page | yes |
//! | [`HostScore`](Operation::HostScore) | `query/score/ip/{target}` | IP | - | no |
//! | [`ImageLookup`](Operation::ImageLookup) | `query/image/ip/{target}` | IP | - | no |
//! | [`ImageSearch`](Operation::ImageSearch) | `query/image/search` | - | query, page | yes |
//! | [`ImageTags`](Operation::ImageTags) | `query/image/tags` | - | - | no |
//! | [`TorrentLookup`](Operation::TorrentLookup) | `query/torrent/ip/{target}` | IP | - | no |
//! | [`TorrentHistorical`](Operation::TorrentHistorical) | `query/torrent/historical/{target}` | IP | - | no |
//! | [`DataleaksEmail`](Operation::DataleaksEmail) | `query/dataleaks/email/{target}` | email | - | no |
//! | [`DataleaksOrganization`](Operation::DataleaksOrganization) | `query/dataleaks/organization/{target}` | domain | - | no |
//! | [`DataleaksInfo`](Operation::DataleaksInfo) | `query/dataleaks/info` | - | - | no |
//! | [`DomainSubdomains`](Operation::DomainSubdomains) | `query/domains/subdomain/{target}` | domain | page | yes |
//! | [`DomainDns`](Operation::DomainDns) | `query/domains/dns/{target}` | domain | page | yes |
//! | [`DomainIp`](Operation::DomainIp) | `query/domains/ip/{target}` | IP | page | yes |
//! | [`DomainSearch`](Operation::DomainSearch) | `query/domains/search` | - | query, page | yes |
//! | [`SensorLookup`](Operation::SensorLookup) | `query/sensors/ip/{target}` | IP | - | no |
//! | [`SensorSearch`](Operation::SensorSearch) | `query/sensors/search` | - | query, page | yes |
//! | [`SensorSearchStats`](Operation::SensorSearchStats) | `query/sensors/search/stats` | - | query, type, days | no |
//! | [`AggregateStats`](Operation::AggregateStats) | `query/search/stats` | - | query, type, page | no |

use std::fmt::{Display, Formatter};

use crate::stat::StatFamily;
use crate::target::TargetKind;

/// Default look-back window for sensor statistics, in days.
pub const DEFAULT_STAT_DAYS: u32 = 60;

/// Default page when the caller does not pick one.
pub const DEFAULT_PAGE: u32 = 1;

/// One logical capability of the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HostLookup,
    HostVulnerabilities,
    HostHistorical,
    HostSearch,
    HostScore,
    ImageLookup,
    ImageSearch,
    ImageTags,
    TorrentLookup,
    TorrentHistorical,
    DataleaksEmail,
    DataleaksOrganization,
    DataleaksInfo,
    DomainSubdomains,
    DomainDns,
    DomainIp,
    DomainSearch,
    SensorLookup,
    SensorSearch,
    SensorSearchStats,
    AggregateStats,
}

impl Operation {
    pub const ALL: [Self; 21] = [
        Self::HostLookup,
        Self::HostVulnerabilities,
        Self::HostHistorical,
        Self::HostSearch,
        Self::HostScore,
        Self::ImageLookup,
        Self::ImageSearch,
        Self::ImageTags,
        Self::TorrentLookup,
        Self::TorrentHistorical,
        Self::DataleaksEmail,
        Self::DataleaksOrganization,
        Self::DataleaksInfo,
        Self::DomainSubdomains,
        Self::DomainDns,
        Self::DomainIp,
        Self::DomainSearch,
        Self::SensorLookup,
        Self::SensorSearch,
        Self::SensorSearchStats,
        Self::AggregateStats,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HostLookup => "host_lookup",
            Self::HostVulnerabilities => "host_vulnerabilities",
            Self::HostHistorical => "host_historical",
            Self::HostSearch => "host_search",
            Self::HostScore => "host_score",
            Self::ImageLookup => "image_lookup",
            Self::ImageSearch => "image_search",
            Self::ImageTags => "image_tags",
            Self::TorrentLookup => "torrent_lookup",
            Self::TorrentHistorical => "torrent_historical",
            Self::DataleaksEmail => "dataleaks_email",
            Self::DataleaksOrganization => "dataleaks_organization",
            Self::DataleaksInfo => "dataleaks_info",
            Self::DomainSubdomains => "domain_subdomains",
            Self::DomainDns => "domain_dns",
            Self::DomainIp => "domain_ip",
            Self::DomainSearch => "domain_search",
            Self::SensorLookup => "sensor_lookup",
            Self::SensorSearch => "sensor_search",
            Self::SensorSearchStats => "sensor_search_stats",
            Self::AggregateStats => "aggregate_stats",
        }
    }

    /// Static routing descriptor for this operation.
    pub const fn descriptor(self) -> OperationDescriptor {
        use OperationDescriptor as D;

        match self {
            Self::HostLookup => D::target("query/ip/{target}", TargetKind::Ip),
            Self::HostVulnerabilities => D::target("query/cve/ip/{target}", TargetKind::Ip),
            Self::HostHistorical => D::target("query/ip/historical/{target}", TargetKind::Ip),
            Self::HostSearch => D::search("query/search"),
            Self::HostScore => D::target("query/score/ip/{target}", TargetKind::Ip),
            Self::ImageLookup => D::target("query/image/ip/{target}", TargetKind::Ip),
            Self::ImageSearch => D::search("query/image/search"),
            Self::ImageTags => D::fixed("query/image/tags"),
            Self::TorrentLookup => D::target("query/torrent/ip/{target}", TargetKind::Ip),
            Self::TorrentHistorical => {
                D::target("query/torrent/historical/{target}", TargetKind::Ip)
            }
            Self::DataleaksEmail => D::target("query/dataleaks/email/{target}", TargetKind::Email),
            Self::DataleaksOrganization => {
                D::target("query/dataleaks/organization/{target}", TargetKind::Domain)
            }
            Self::DataleaksInfo => D::fixed("query/dataleaks/info"),
            Self::DomainSubdomains => {
                D::target("query/domains/subdomain/{target}", TargetKind::Domain).paginated()
            }
            Self::DomainDns => {
                D::target("query/domains/dns/{target}", TargetKind::Domain).paginated()
            }
            Self::DomainIp => D::target("query/domains/ip/{target}", TargetKind::Ip).paginated(),
            Self::DomainSearch => D::search("query/domains/search"),
            Self::SensorLookup => D::target("query/sensors/ip/{target}", TargetKind::Ip),
            Self::SensorSearch => D::search("query/sensors/search"),
            Self::SensorSearchStats => D {
                days: true,
                ..D::stats("query/sensors/search/stats", StatFamily::Sensor)
            },
            Self::AggregateStats => D {
                page: true,
                ..D::stats("query/search/stats", StatFamily::Aggregate)
            },
        }
    }

    pub const fn is_paginated(self) -> bool {
        self.descriptor().paginated
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path template and parameter shape of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Path relative to the API base URL; `{target}` marks the path parameter.
    pub path: &'static str,
    pub target: Option<TargetKind>,
    pub query: bool,
    pub stat: Option<StatFamily>,
    pub days: bool,
    pub page: bool,
    /// Responses are event pages the engine can walk.
    pub paginated: bool,
}

impl OperationDescriptor {
    const fn fixed(path: &'static str) -> Self {
        Self {
            path,
            target: None,
            query: false,
            stat: None,
            days: false,
            page: false,
            paginated: false,
        }
    }

    const fn target(path: &'static str, kind: TargetKind) -> Self {
        Self {
            target: Some(kind),
            ..Self::fixed(path)
        }
    }

    const fn search(path: &'static str) -> Self {
        Self {
            query: true,
            ..Self::fixed(path)
        }
        .paginated()
    }

    const fn stats(path: &'static str, family: StatFamily) -> Self {
        Self {
            query: true,
            stat: Some(family),
            ..Self::fixed(path)
        }
    }

    const fn paginated(self) -> Self {
        Self {
            page: true,
            paginated: true,
            ..self
        }
    }
}

/// Raw caller inputs for an operation, validated by the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub target: Option<String>,
    pub query: Option<String>,
    pub stat_type: Option<String>,
    pub days: Option<u32>,
    pub page: Option<u32>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_stat_type(mut self, stat_type: impl Into<String>) -> Self {
        self.stat_type = Some(stat_type.into());
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
