// ABOUTME: Typed Strava API v3 client with OAuth2 authorization-code flow
// ABOUTME: Exposes the client core, its configuration, error types, and resource facades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strava Client
//!
//! A typed binding for the Strava API v3.
//!
//! The [`Strava`] client owns the application credentials and a single bearer
//! token. Every resource request passes through an authentication middleware
//! that attaches `Authorization: Bearer <token>` while a token is held.
//!
//! ```rust,no_run
//! use strava_client::{Scope, Strava, StravaConfig};
//!
//! # async fn run() -> Result<(), strava_client::StravaError> {
//! let strava = Strava::new(StravaConfig::new(
//!     "12345",
//!     "client-secret",
//!     "https://example.com/callback",
//!     [Scope::Read, Scope::ActivityReadAll],
//! ));
//!
//! // Send the athlete here, then exchange the code Strava redirects back with
//! let url = strava.authorize_url();
//! # let _ = url;
//! strava.exchange_token("authorization-code").await?;
//!
//! let me = strava.athlete().me().await?;
//! # let _ = me;
//! # Ok(())
//! # }
//! ```
//!
//! Tokens are not persisted. Store the value returned by [`Strava::token`] and
//! restore it later with [`Strava::set_token`].

/// Client core: construction, token slot, and the request pipeline
pub mod client;
/// Application credentials and endpoint configuration
pub mod config;
/// Error taxonomy for OAuth and resource calls
pub mod errors;
/// Default HTTP transport construction
pub mod http_client;
/// Structured logging setup for binaries embedding the client
pub mod logging;
/// Request middlewares: bearer authentication and request tracing
pub mod middleware;
/// OAuth authorization-code flow operations
pub mod oauth;
/// One facade per remote resource
pub mod resources;

pub use client::{Strava, StravaBuilder};
pub use config::{Endpoints, StravaConfig};
pub use errors::{ApiError, ConfigError, HttpError, StravaError};
pub use resources::{
    ActivitiesApi, AthleteApi, ClubsApi, GearApi, RoutesApi, SegmentEffortsApi, SegmentsApi,
    UploadsApi,
};

pub use strava_core::models;
pub use strava_core::models::segment::ExploreActivityType;
pub use strava_core::models::upload::UploadDataType;
pub use strava_core::{ActivityStream, ActivityType, Scope, SegmentStream, SportType};
