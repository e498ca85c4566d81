// ABOUTME: Application credentials and endpoint configuration for the Strava client
// ABOUTME: Loaded programmatically or from STRAVA_* environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;

use strava_core::constants::{endpoints, env_vars, oauth};
use strava_core::Scope;
use url::Url;

use crate::errors::ConfigError;

/// OAuth application configuration, immutable for the lifetime of a client
#[derive(Clone, PartialEq, Eq)]
pub struct StravaConfig {
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Redirect URI registered with the application
    pub redirect_uri: String,
    /// Scopes requested on the authorization page, in the order given
    pub scopes: Vec<Scope>,
}

impl StravaConfig {
    /// Create a configuration from explicit values
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scopes: impl IntoIterator<Item = Scope>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes: scopes.into_iter().collect(),
        }
    }

    /// Load configuration from `STRAVA_CLIENT_ID`, `STRAVA_CLIENT_SECRET`,
    /// `STRAVA_REDIRECT_URI` and `STRAVA_SCOPES`
    ///
    /// `STRAVA_SCOPES` is a comma-separated list and defaults to `read`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required variable is missing or empty
    /// - `STRAVA_SCOPES` contains an unknown scope token
    pub fn from_env() -> Result<Self, ConfigError> {
        let scopes = env::var(env_vars::SCOPES).unwrap_or_else(|_| oauth::DEFAULT_SCOPES.into());

        Ok(Self {
            client_id: required_var(env_vars::CLIENT_ID)?,
            client_secret: required_var(env_vars::CLIENT_SECRET)?,
            redirect_uri: required_var(env_vars::REDIRECT_URI)?,
            scopes: Scope::parse_list(&scopes)?,
        })
    }
}

// Keeps the client secret out of logs and panic messages
impl fmt::Debug for StravaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StravaConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Base URLs of the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Resource API base, e.g. `https://www.strava.com/api/v3`
    pub api_base: String,
    /// OAuth base, e.g. `https://www.strava.com/oauth`
    pub oauth_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: endpoints::API_BASE.into(),
            oauth_base: endpoints::OAUTH_BASE.into(),
        }
    }
}

impl Endpoints {
    /// Point both bases at one server, e.g. a local mock
    ///
    /// The resource API is mounted under `/api/v3` and OAuth under `/oauth`.
    #[must_use]
    pub fn with_server(server: &str) -> Self {
        let server = server.trim_end_matches('/');
        Self {
            api_base: format!("{server}/api/v3"),
            oauth_base: format!("{server}/oauth"),
        }
    }

    /// Defaults overridden by `STRAVA_API_BASE` and `STRAVA_OAUTH_BASE`
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not an absolute URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            api_base: url_var(env_vars::API_BASE, defaults.api_base)?,
            oauth_base: url_var(env_vars::OAUTH_BASE, defaults.oauth_base)?,
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }

    pub(crate) fn oauth_url(&self, path: &str) -> String {
        format!("{}{path}", self.oauth_base.trim_end_matches('/'))
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn url_var(name: &'static str, default: String) -> Result<String, ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(default);
    };
    Url::parse(&value).map_err(|source| ConfigError::InvalidUrl { var: name, source })?;
    Ok(value)
}
