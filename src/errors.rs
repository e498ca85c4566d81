// ABOUTME: Error taxonomy for the Strava client
// ABOUTME: HttpError carries raw OAuth responses, ApiError carries structured resource failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Two kinds of failure reach callers:
//!
//! - [`HttpError`]: a non-success response from an OAuth endpoint, handed back
//!   untouched so the caller can inspect status, headers and body.
//! - [`ApiError`]: the structured failure of a resource call, produced by the
//!   request pipeline and returned as-is by every facade method.
//!
//! [`StravaError`] is the union returned by the OAuth operations.

use std::io;
use std::path::PathBuf;

use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode, Url};
use reqwest_middleware::Error as MiddlewareError;
use strava_core::models::Fault;
use strava_core::ParseVocabularyError;
use thiserror::Error;

/// Raw non-success response from an OAuth endpoint
///
/// The body is never read by the client.
#[derive(Debug, Error)]
#[error("OAuth endpoint {} returned HTTP {}", .response.url(), .response.status())]
pub struct HttpError {
    response: Response,
}

impl HttpError {
    pub(crate) const fn new(response: Response) -> Self {
        Self { response }
    }

    /// HTTP status of the response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }

    /// Final URL of the response
    #[must_use]
    pub fn url(&self) -> &Url {
        self.response.url()
    }

    /// Borrow the raw response
    #[must_use]
    pub const fn response(&self) -> &Response {
        &self.response
    }

    /// Take ownership of the raw response
    #[must_use]
    pub fn into_response(self) -> Response {
        self.response
    }

    /// Consume the error and read the response body as text
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not valid text
    pub async fn text(self) -> Result<String, reqwest::Error> {
        self.response.text().await
    }
}

/// Structured failure of a resource API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: connection, TLS, timeout or middleware failure
    #[error("Strava API request failed: {0}")]
    Request(#[from] MiddlewareError),

    /// The remote API answered with a non-success status
    #[error("Strava API returned HTTP {status}: {}", fault_message(.fault.as_ref(), .body))]
    Status {
        /// HTTP status code
        status: StatusCode,
        /// Remote error body, when it matched the fault schema
        fault: Option<Fault>,
        /// Raw response body
        body: String,
    },

    /// The response body did not match the expected payload
    #[error("Failed to decode Strava API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local file passed to an upload could not be read
    #[error("Failed to read upload file {}: {source}", .path.display())]
    File {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed call, when the remote API answered
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(MiddlewareError::Reqwest(err)) => err.status(),
            Self::Request(_) | Self::Decode(_) | Self::File { .. } => None,
        }
    }

    /// Remote fault body, when the remote API sent one
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Status { fault, .. } => fault.as_ref(),
            _ => None,
        }
    }

    /// Whether the remote API rejected the bearer token (HTTP 401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Request(err.into())
    }
}

fn fault_message<'a>(fault: Option<&'a Fault>, body: &'a str) -> &'a str {
    fault.map_or(body, |fault| fault.message.as_str())
}

/// Failure of an OAuth operation
#[derive(Debug, Error)]
pub enum StravaError {
    /// The OAuth endpoint answered with a non-success status
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The call failed before a usable response was obtained
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StravaError {
    /// HTTP status of the failure, when there was a response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(err) => Some(err.status()),
            Self::Api(err) => err.status(),
        }
    }
}

/// Invalid or missing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A scope list contains an unknown token
    #[error("Invalid scope configuration: {0}")]
    InvalidScope(#[from] ParseVocabularyError),

    /// An endpoint override is not a valid URL
    #[error("Environment variable {var} is not a valid URL: {source}")]
    InvalidUrl {
        /// Variable holding the bad value
        var: &'static str,
        /// Parse failure
        source: url::ParseError,
    },
}
