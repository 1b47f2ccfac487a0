//! Statistic types accepted by the two stats endpoints.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ValidationError;

/// Statistic families, one per stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatFamily {
    /// `query/search/stats`
    Aggregate,
    /// `query/sensors/search/stats`
    Sensor,
}

impl StatFamily {
    /// Validate `value` against this family and return its wire form.
    pub fn parse(self, value: &str) -> Result<&'static str, ValidationError> {
        match self {
            Self::Aggregate => value.parse::<StatType>().map(StatType::as_str),
            Self::Sensor => value.parse::<SensorStatType>().map(SensorStatType::as_str),
        }
    }
}

/// Aggregate statistic for recent host events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatType {
    Ports,
    Products,
    Versions,
    Tags,
    Services,
    Countries,
    Asn,
}

impl StatType {
    pub const ALL: [Self; 7] = [
        Self::Ports,
        Self::Products,
        Self::Versions,
        Self::Tags,
        Self::Services,
        Self::Countries,
        Self::Asn,
    ];

    const EXPECTED: &'static str = "ports, products, versions, tags, services, countries, asn";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ports => "ports",
            Self::Products => "products",
            Self::Versions => "versions",
            Self::Tags => "tags",
            Self::Services => "services",
            Self::Countries => "countries",
            Self::Asn => "asn",
        }
    }
}

impl FromStr for StatType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidStatType {
                value: value.to_owned(),
                expected: Self::EXPECTED,
            })
    }
}

impl Display for StatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistic over sensor (honeypot) events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorStatType {
    Ports,
    Tags,
    Countries,
    Asn,
    Ips,
    Payloads,
    HttpPath,
}

impl SensorStatType {
    pub const ALL: [Self; 7] = [
        Self::Ports,
        Self::Tags,
        Self::Countries,
        Self::Asn,
        Self::Ips,
        Self::Payloads,
        Self::HttpPath,
    ];

    const EXPECTED: &'static str = "ports, tags, countries, asn, ips, payloads, http_path";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ports => "ports",
            Self::Tags => "tags",
            Self::Countries => "countries",
            Self::Asn => "asn",
            Self::Ips => "ips",
            Self::Payloads => "payloads",
            Self::HttpPath => "http_path",
        }
    }
}

impl FromStr for SensorStatType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidStatType {
                value: value.to_owned(),
                expected: Self::EXPECTED,
            })
    }
}

impl Display for SensorStatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_have_distinct_sets() {
        assert_eq!(StatFamily::Aggregate.parse("products"), Ok("products"));
        assert!(StatFamily::Sensor.parse("products").is_err());

        assert_eq!(StatFamily::Sensor.parse("http_path"), Ok("http_path"));
        assert!(StatFamily::Aggregate.parse("http_path").is_err());
    }

    #[test]
    fn matching_is_exact() {
        let err = "Ports".parse::<StatType>().expect_err("case sensitive");
        assert!(matches!(err, ValidationError::InvalidStatType { .. }));
        assert!(err.to_string().contains("ports, products"));
    }
}
