use std::fmt;

use async_trait::async_trait;

/// The result of resolving one MAC address.
///
/// Lookups never fail the run: every failure mode has a variant here and is
/// written into the output like any other value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The API knew the prefix. Holds the trimmed vendor name.
    Vendor(String),
    /// The API answered 404.
    NotFound,
    /// Any status other than 200 or 404.
    HttpStatus(u16),
    /// Timeout, refused connection, DNS failure and the like.
    Network(String),
    /// Anything else that went wrong while handling the response.
    Other(String),
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vendor(name) => f.write_str(name),
            Self::NotFound => f.write_str("Unknown"),
            Self::HttpStatus(code) => write!(f, "Error: HTTP {code}"),
            Self::Network(msg) => write!(f, "Network Error: {msg}"),
            Self::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Resolves the vendor for `mac_addr`.
    ///
    /// The address is used exactly as given: no case folding, no delimiter
    /// rewriting, no padding.
    async fn get_vendor(&self, mac_addr: &str) -> LookupOutcome;
}
