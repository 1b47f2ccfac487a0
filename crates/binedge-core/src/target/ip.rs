use std::fmt::{Display, Formatter};
use std::net::IpAddr;

use ipnet::IpNet;

use super::refang;
use crate::ValidationError;

/// IPv4/IPv6 address or network, normalized to canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpTarget {
    Address(IpAddr),
    Network(IpNet),
}

impl IpTarget {
    /// Parse a possibly defanged address or CIDR network.
    ///
    /// Networks keep their prefix length but lose host bits, so
    /// `10.1.2.3/8` becomes `10.0.0.0/8`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let plain = refang(input);
        if plain.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }

        if let Ok(address) = plain.parse::<IpAddr>() {
            return Ok(Self::Address(address));
        }

        plain
            .parse::<IpNet>()
            .map(|network| Self::Network(network.trunc()))
            .map_err(|_| ValidationError::InvalidAddress {
                value: input.trim().to_owned(),
            })
    }

    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl Display for IpTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Address(address) => Display::fmt(address, f),
            Self::Network(network) => Display::fmt(network, f),
        }
    }
}

impl TryFrom<&str> for IpTarget {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<IpAddr> for IpTarget {
    fn from(value: IpAddr) -> Self {
        Self::Address(value)
    }
}
