// ABOUTME: OAuth token exchange request and response payloads
// ABOUTME: Only access_token is retained by the client; everything else goes back to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::athlete::DetailedAthlete;
use crate::constants::oauth::GRANT_TYPE_AUTHORIZATION_CODE;

/// Body posted to the token endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Authorization code returned to the redirect URI
    pub code: &'a str,
    /// Application client ID
    pub client_id: &'a str,
    /// Application client secret
    pub client_secret: &'a str,
    /// Redirect URI registered with the application
    pub redirect_uri: &'a str,
    /// Always `authorization_code`
    pub grant_type: &'static str,
}

impl<'a> TokenRequest<'a> {
    /// Build an authorization-code grant request
    #[must_use]
    pub const fn authorization_code(
        code: &'a str,
        client_id: &'a str,
        client_secret: &'a str,
        redirect_uri: &'a str,
    ) -> Self {
        Self {
            code,
            client_id,
            client_secret,
            redirect_uri,
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE,
        }
    }
}

/// Token endpoint response, returned to the caller as received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthResponse {
    /// Token type, `Bearer`
    pub token_type: String,
    /// Expiry as epoch seconds
    pub expires_at: i64,
    /// Seconds until expiry at the time of issue
    pub expires_in: i64,
    /// Refresh token; the client does not keep it
    pub refresh_token: String,
    /// Bearer token for resource requests
    pub access_token: String,
    /// Profile of the athlete who granted access
    #[serde(default)]
    pub athlete: Option<DetailedAthlete>,
}

impl OAuthResponse {
    /// Expiry as a UTC timestamp, `None` if the epoch value is out of range
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires_at, 0)
    }

    /// Whether the access token has already expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}
