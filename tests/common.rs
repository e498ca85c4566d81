// ABOUTME: Shared test utilities for the Strava client integration tests
// ABOUTME: Provides mock server setup, client construction, and canned Strava payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `strava_client`
//!
//! Every test gets its own `wiremock` server; the client under test is pointed
//! at it with [`Endpoints::with_server`], so API calls land on `/api/v3/...`
//! and OAuth calls on `/oauth/...`.

use std::env;
use std::sync::Once;

use serde_json::{json, Value};
use strava_client::{Endpoints, Scope, Strava, StravaConfig};
use tracing::Level;
use wiremock::{MockServer, Request};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Application credentials used throughout the tests
pub fn test_config() -> StravaConfig {
    StravaConfig::new(
        "1",
        "test_client_secret",
        "https://x/cb",
        [Scope::Read, Scope::ActivityReadAll],
    )
}

/// Start a mock server and a client pointed at it, without a token
pub async fn mock_strava() -> (MockServer, Strava) {
    init_test_logging();
    let server = MockServer::start().await;
    let strava = Strava::builder(test_config())
        .endpoints(Endpoints::with_server(&server.uri()))
        .build();
    (server, strava)
}

/// Start a mock server and a client already holding `token`
pub async fn authenticated_strava(token: &str) -> (MockServer, Strava) {
    let (server, strava) = mock_strava().await;
    strava.set_token(token);
    (server, strava)
}

/// Requests the mock server has seen, in arrival order
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
}

/// Value of the `Authorization` header of a recorded request, if any
pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .map(|value| value.to_str().unwrap().to_owned())
}

/// Minimal detailed athlete payload
pub fn athlete_json(id: u64) -> Value {
    json!({
        "id": id,
        "resource_state": 3,
        "firstname": "Marianne",
        "lastname": "Vos",
        "city": "Babberich",
        "country": "Netherlands",
        "sex": "F",
        "premium": true,
        "summit": true,
        "weight": 58.0,
        "ftp": 290
    })
}

/// Successful token exchange payload
pub fn oauth_json(access_token: &str) -> Value {
    json!({
        "token_type": "Bearer",
        "expires_at": 1_735_689_600,
        "expires_in": 21_600,
        "refresh_token": "refresh-abc",
        "access_token": access_token,
        "athlete": athlete_json(42)
    })
}

/// Standard Strava fault body
pub fn fault_json() -> Value {
    json!({
        "message": "Record Not Found",
        "errors": [
            { "resource": "Activity", "field": "id", "code": "not found" }
        ]
    })
}

/// Minimal summary activity payload
pub fn activity_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Morning Ride",
        "distance": 28_099.0,
        "moving_time": 4207,
        "elapsed_time": 4410,
        "type": "Ride",
        "sport_type": "MountainBikeRide",
        "trainer": false,
        "commute": false
    })
}
