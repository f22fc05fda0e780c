//! # MAC Vendors API Adapter
//!
//! Implements [`VendorRepository`] against the macvendors.com plain-text API:
//! `GET {endpoint}/{mac}` answers 200 with the vendor name, or 404 when the
//! prefix is not registered.

use std::error::Error as StdError;

use async_trait::async_trait;
use netkit_common::config::LookupConfig;
use netkit_common::error::ToolError;
use netkit_common::vendors::{LookupOutcome, VendorRepository};
use reqwest::{Client, StatusCode};
use tracing::debug;

pub struct MacVendorsApi {
    client: Client,
    endpoint: String,
}

impl MacVendorsApi {
    pub fn new(cfg: &LookupConfig) -> Result<Self, ToolError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| ToolError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The request URL for `mac_addr`. The address is inserted verbatim.
    pub fn url_for(&self, mac_addr: &str) -> String {
        format!("{}/{}", self.endpoint, mac_addr)
    }
}

#[async_trait]
impl VendorRepository for MacVendorsApi {
    async fn get_vendor(&self, mac_addr: &str) -> LookupOutcome {
        let url = self.url_for(mac_addr);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("lookup {url} failed: {e}");
                return LookupOutcome::Network(describe(&e));
            }
        };

        match response.status() {
            StatusCode::OK => match response.text().await {
                Ok(body) => LookupOutcome::Vendor(body.trim().to_string()),
                Err(e) if e.is_timeout() => LookupOutcome::Network(describe(&e)),
                Err(e) => LookupOutcome::Other(describe(&e)),
            },
            StatusCode::NOT_FOUND => LookupOutcome::NotFound,
            status => LookupOutcome::HttpStatus(status.as_u16()),
        }
    }
}

/// Flattens an error and its sources into one line.
///
/// reqwest keeps the interesting part ("operation timed out", "connection
/// refused") in the source chain, not in the top-level message.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
