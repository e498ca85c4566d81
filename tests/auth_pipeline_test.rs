// ABOUTME: Integration tests for the authenticated request pipeline
// ABOUTME: Verifies bearer header attachment, last-write-wins tokens, and concurrent use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{athlete_json, authenticated_strava, authorization, mock_strava, received};
use strava_client::{Endpoints, Strava};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_athlete(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(athlete_json(42)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_set_token_is_sent_as_bearer_header() -> Result<()> {
    let (server, strava) = authenticated_strava("tok123").await;

    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(athlete_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    let athlete = strava.athlete().me().await?;

    assert_eq!(athlete.id, 42);
    assert_eq!(athlete.firstname.as_deref(), Some("Marianne"));
    Ok(())
}

#[tokio::test]
async fn test_last_set_token_wins() -> Result<()> {
    let (server, strava) = authenticated_strava("t1").await;
    mount_athlete(&server).await;

    strava.set_token("t2");
    strava.athlete().me().await?;

    let requests = received(&server).await;
    assert_eq!(authorization(&requests[0]).as_deref(), Some("Bearer t2"));
    Ok(())
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let (server, strava) = mock_strava().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Authorization Error",
            "errors": [{ "resource": "Athlete", "field": "access_token", "code": "invalid" }]
        })))
        .mount(&server)
        .await;

    let err = strava.athlete().me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.fault().map(|fault| fault.message.as_str()), Some("Authorization Error"));
    let requests = received(&server).await;
    assert_eq!(authorization(&requests[0]), None);
}

#[tokio::test]
async fn test_token_restored_through_builder() -> Result<()> {
    let server = MockServer::start().await;
    mount_athlete(&server).await;

    let strava = Strava::builder(common::test_config())
        .endpoints(Endpoints::with_server(&server.uri()))
        .token("restored")
        .build();
    strava.athlete().me().await?;

    let requests = received(&server).await;
    assert_eq!(authorization(&requests[0]).as_deref(), Some("Bearer restored"));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() -> Result<()> {
    let (server, strava) = authenticated_strava("shared").await;
    mount_athlete(&server).await;
    let strava = Arc::new(strava);

    let handles = (0..8)
        .map(|_| {
            let strava = Arc::clone(&strava);
            tokio::spawn(async move { strava.athlete().me().await })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.await??;
    }

    let requests = received(&server).await;
    assert_eq!(requests.len(), 8);
    assert!(requests
        .iter()
        .all(|request| authorization(request).as_deref() == Some("Bearer shared")));
    Ok(())
}

#[tokio::test]
async fn test_user_agent_is_sent() -> Result<()> {
    let (server, strava) = authenticated_strava("tok").await;
    mount_athlete(&server).await;

    strava.athlete().me().await?;

    let requests = received(&server).await;
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(user_agent.starts_with("strava_client/"));
    Ok(())
}
