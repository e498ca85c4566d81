// ABOUTME: Strava client core: construction, token slot, and the authenticated request pipeline
// ABOUTME: Every resource facade funnels through send_json/send_text for uniform error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use reqwest::{Client, Method, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use strava_core::models::Fault;
use tracing::{debug, warn};

use crate::config::{Endpoints, StravaConfig};
use crate::errors::ApiError;
use crate::http_client::default_client;
use crate::middleware::{BearerAuth, RequestTracing, TokenSlot};

/// Longest response body echoed into debug logs
const MAX_LOGGED_BODY: usize = 500;

/// Strava API client
///
/// Owns the application configuration and at most one bearer token. The token
/// is attached to every resource request by the [`BearerAuth`] middleware and
/// is never attached to the OAuth endpoints.
///
/// The client is `Send + Sync`; resource calls may run concurrently. Token
/// writers (`set_token`, `exchange_token`, `clear_token`) are last-write-wins
/// with no ordering between racing writers.
pub struct Strava {
    pub(crate) config: StravaConfig,
    pub(crate) endpoints: Endpoints,
    /// Plain transport for the OAuth endpoints
    pub(crate) http: Client,
    /// Authenticated transport for the resource API
    api: ClientWithMiddleware,
    pub(crate) token: TokenSlot,
}

impl Strava {
    /// Create a client against the public Strava endpoints
    #[must_use]
    pub fn new(config: StravaConfig) -> Self {
        Self::builder(config).build()
    }

    /// Start building a client with custom endpoints or transport
    #[must_use]
    pub fn builder(config: StravaConfig) -> StravaBuilder {
        StravaBuilder::new(config)
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &StravaConfig {
        &self.config
    }

    /// The endpoints this client talks to
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.api.request(method, self.endpoints.api_url(path))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Send a resource request and parse the JSON payload
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = checked(request.send().await?).await?;
        let body = response.bytes().await.map_err(ApiError::transport)?;

        serde_json::from_slice(&body).map_err(|err| {
            debug!(
                "Strava API payload did not match the expected model: {err}; body: {}",
                truncate(&String::from_utf8_lossy(&body))
            );
            ApiError::Decode(err)
        })
    }

    /// Send a resource request and return the body as text
    pub(crate) async fn send_text(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = checked(request.send().await?).await?;
        response.text().await.map_err(ApiError::transport)
    }
}

impl fmt::Debug for Strava {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strava")
            .field("config", &self.config)
            .field("endpoints", &self.endpoints)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Turn a non-success response into [`ApiError::Status`]
async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|err| {
        warn!("Failed to read error response body: {err}");
        String::new()
    });
    let fault = serde_json::from_str::<Fault>(&body).ok();
    debug!(status = status.as_u16(), "Strava API error response: {}", truncate(&body));

    Err(ApiError::Status {
        status,
        fault,
        body,
    })
}

fn truncate(body: &str) -> &str {
    if body.len() <= MAX_LOGGED_BODY {
        return body;
    }
    let mut end = MAX_LOGGED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Builder for [`Strava`]
pub struct StravaBuilder {
    config: StravaConfig,
    endpoints: Endpoints,
    http: Option<Client>,
    token: Option<String>,
}

impl StravaBuilder {
    fn new(config: StravaConfig) -> Self {
        Self {
            config,
            endpoints: Endpoints::default(),
            http: None,
            token: None,
        }
    }

    /// Replace both endpoint bases
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Override the resource API base
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.endpoints.api_base = api_base.into();
        self
    }

    /// Override the OAuth base
    #[must_use]
    pub fn oauth_base(mut self, oauth_base: impl Into<String>) -> Self {
        self.endpoints.oauth_base = oauth_base.into();
        self
    }

    /// Use a caller-configured transport (timeouts, proxies, TLS)
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Start authenticated with a previously stored token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> Strava {
        let http = self.http.unwrap_or_else(default_client);
        let token: TokenSlot = Arc::new(ArcSwapOption::new(self.token.map(Arc::new)));

        let api = ClientBuilder::new(http.clone())
            .with(RequestTracing)
            .with(BearerAuth::new(Arc::clone(&token)))
            .build();

        Strava {
            config: self.config,
            endpoints: self.endpoints,
            http,
            api,
            token,
        }
    }
}
