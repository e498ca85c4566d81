// ABOUTME: Default HTTP transport for the Strava client
// ABOUTME: Builds reqwest clients with no timeouts unless the caller opts in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::warn;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport settings applied when building a client
///
/// The default carries no timeouts: a request runs until the remote side
/// answers or the connection drops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportConfig {
    /// Total request timeout
    pub timeout: Option<Duration>,
    /// Connection establishment timeout
    pub connect_timeout: Option<Duration>,
}

impl TransportConfig {
    /// Build a reqwest client with these settings
    ///
    /// Falls back to a client with reqwest defaults if the builder fails.
    #[must_use]
    pub fn build(&self) -> Client {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        builder.build().unwrap_or_else(|err| {
            warn!("Failed to build configured HTTP client, using defaults: {err}");
            Client::new()
        })
    }
}

/// Create the HTTP client used when the caller supplies none
///
/// Sets only the user agent. Callers that want timeouts pass their own client,
/// e.g. one from [`create_client_with_timeout`], to
/// [`crate::StravaBuilder::http_client`].
#[must_use]
pub fn default_client() -> Client {
    TransportConfig::default().build()
}

/// Create an HTTP client with request and connect timeouts
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    TransportConfig {
        timeout: Some(Duration::from_secs(timeout_secs)),
        connect_timeout: Some(Duration::from_secs(connect_timeout_secs)),
    }
    .build()
}
