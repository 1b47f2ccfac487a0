//! # Targets
//!
//! Validated lookup subjects. Every value that ends up in a request path or
//! query string goes through one of these types first.
//!
//! | Type | Accepts |
//! |------|---------|
//! | [`IpTarget`] | IPv4/IPv6 address or CIDR network |
//! | [`DomainName`] | DNS name with at least two labels |
//! | [`EmailAddress`] | `local@domain` |
//! | [`SearchQuery`] | non-blank free text |
//!
//! IP, domain and email parsers accept bracket-defanged input
//! (`8[.]8[.]8[.]8`, `example[.]com`, `2001:db8[:]:1`) and rewrite it to
//! plain notation before validating.

mod domain_name;
mod email;
mod ip;
mod query;

pub use domain_name::DomainName;
pub use email::EmailAddress;
pub use ip::IpTarget;
pub use query::SearchQuery;

/// Kind of path target an operation expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Ip,
    Domain,
    Email,
}

impl TargetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "IP address or network",
            Self::Domain => "domain name",
            Self::Email => "email address",
        }
    }
}

/// Rewrites bracket-defanged notation to plain dotted/colon form.
pub fn refang(input: &str) -> String {
    input.trim().replace("[.]", ".").replace("[:]", ":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refang_rewrites_brackets_and_trims() {
        assert_eq!(refang(" 1[.]2[.]3[.]4 "), "1.2.3.4");
        assert_eq!(refang("fe80[:][:]1"), "fe80::1");
        assert_eq!(refang("example.com"), "example.com");
    }
}
