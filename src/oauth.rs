// ABOUTME: OAuth2 authorization-code flow for the Strava client
// ABOUTME: Builds the authorize URL, exchanges codes, deauthorizes, and manages the held token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # OAuth Operations
//!
//! The token lifecycle of a [`Strava`] client:
//!
//! - **Unauthenticated**: no token held; resource calls go out without an
//!   `Authorization` header and the remote API rejects them.
//! - **Authenticated**: a token is held, reached through
//!   [`Strava::exchange_token`] or [`Strava::set_token`]. It stays until it is
//!   overwritten, cleared with [`Strava::clear_token`], or the client is dropped.
//!
//! [`Strava::deauthorize`] revokes access remotely but keeps the local token.

use std::sync::Arc;

use reqwest::Response;
use strava_core::constants::endpoints::{AUTHORIZE_PATH, DEAUTHORIZE_PATH, TOKEN_PATH};
use strava_core::constants::oauth::RESPONSE_TYPE_CODE;
use strava_core::models::{OAuthResponse, TokenRequest};
use strava_core::Scope;
use tracing::{info, warn};

use crate::client::Strava;
use crate::errors::{ApiError, HttpError, StravaError};

impl Strava {
    /// URL of the authorization page the athlete must visit
    ///
    /// Pure function of the configuration: no network call, no state change.
    /// Values are inserted verbatim in the order `client_id`, `redirect_uri`,
    /// `response_type`, `scope`, with scopes comma-joined in configured order.
    #[must_use]
    pub fn authorize_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type={RESPONSE_TYPE_CODE}&scope={}",
            self.endpoints.oauth_url(AUTHORIZE_PATH),
            self.config.client_id,
            self.config.redirect_uri,
            Scope::join(&self.config.scopes),
        )
    }

    /// Exchange an authorization code for tokens
    ///
    /// On success the access token becomes the held token, replacing any
    /// previous one, and the full token response is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token endpoint answers with a non-success status
    ///   ([`StravaError::Http`] carrying the raw response)
    /// - The request cannot be sent ([`ApiError::Request`])
    /// - The success body is not a token response ([`ApiError::Decode`])
    pub async fn exchange_token(&self, code: &str) -> Result<OAuthResponse, StravaError> {
        let body = TokenRequest::authorization_code(
            code,
            &self.config.client_id,
            &self.config.client_secret,
            &self.config.redirect_uri,
        );

        let response = self
            .http
            .post(self.endpoints.oauth_url(TOKEN_PATH))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::transport)?;

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                "Token exchange rejected by Strava"
            );
            return Err(HttpError::new(response).into());
        }

        let bytes = response.bytes().await.map_err(ApiError::transport)?;
        let oauth: OAuthResponse = serde_json::from_slice(&bytes).map_err(ApiError::from)?;

        self.store_token(oauth.access_token.clone());
        info!(
            athlete_id = oauth.athlete.as_ref().map(|athlete| athlete.id),
            expires_at = oauth.expires_at,
            "Exchanged authorization code for Strava access token"
        );

        Ok(oauth)
    }

    /// Revoke the application's access for the athlete
    ///
    /// Sends no token and no body. The locally held token is kept; call
    /// [`Strava::clear_token`] to drop it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint answers with a non-success status
    ///   ([`StravaError::Http`] carrying the raw response)
    /// - The request cannot be sent ([`ApiError::Request`])
    pub async fn deauthorize(&self) -> Result<Response, StravaError> {
        let response = self
            .http
            .get(self.endpoints.oauth_url(DEAUTHORIZE_PATH))
            .send()
            .await
            .map_err(ApiError::transport)?;

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                "Deauthorization rejected by Strava"
            );
            return Err(HttpError::new(response).into());
        }

        info!(
            token_held = self.is_authenticated(),
            "Deauthorized Strava application"
        );
        Ok(response)
    }

    /// Hold the given token, e.g. one restored from storage
    ///
    /// The token is not validated; a bad token surfaces as a 401 on the next
    /// resource call.
    pub fn set_token(&self, token: impl Into<String>) {
        self.store_token(token.into());
        info!("Strava access token set");
    }

    /// The currently held token, for the caller to persist
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.load_full().map(|token| String::clone(&token))
    }

    /// Whether a token is currently held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.load().is_some()
    }

    /// Drop the held token; later resource calls go out unauthenticated
    pub fn clear_token(&self) {
        self.token.store(None);
        info!("Strava access token cleared");
    }

    fn store_token(&self, token: String) {
        self.token.store(Some(Arc::new(token)));
    }
}
