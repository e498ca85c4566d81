// ABOUTME: Integration tests for the OAuth authorization-code flow against a mock Strava
// ABOUTME: Covers token exchange, raw HTTP failures, deauthorization, and token lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{authorization, mock_strava, oauth_json, received};
use reqwest::StatusCode;
use serde_json::json;
use strava_client::{ApiError, StravaError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_exchange_token_posts_credentials_and_stores_token() -> Result<()> {
    let (server, strava) = mock_strava().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_json(json!({
            "code": "abc",
            "client_id": "1",
            "client_secret": "test_client_secret",
            "redirect_uri": "https://x/cb",
            "grant_type": "authorization_code"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(oauth_json("A1")))
        .expect(1)
        .mount(&server)
        .await;

    let oauth = strava.exchange_token("abc").await?;

    assert_eq!(oauth.access_token, "A1");
    assert_eq!(oauth.refresh_token, "refresh-abc");
    assert_eq!(oauth.athlete.map(|athlete| athlete.id), Some(42));
    assert_eq!(strava.token().as_deref(), Some("A1"));
    assert!(strava.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn test_exchanged_token_is_sent_on_next_resource_call() -> Result<()> {
    let (server, strava) = mock_strava().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oauth_json("A1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::athlete_json(42)))
        .mount(&server)
        .await;

    strava.exchange_token("abc").await?;
    strava.athlete().me().await?;

    let requests = received(&server).await;
    let token_request = &requests[0];
    let athlete_request = &requests[1];
    assert_eq!(authorization(token_request), None);
    assert_eq!(authorization(athlete_request).as_deref(), Some("Bearer A1"));
    Ok(())
}

#[tokio::test]
async fn test_exchange_token_failure_surfaces_raw_response() {
    let (server, strava) = mock_strava().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"message":"Bad Request","errors":[{"code":"invalid"}]}"#),
        )
        .mount(&server)
        .await;

    let err = strava.exchange_token("bad").await.unwrap_err();

    let StravaError::Http(http) = err else {
        panic!("expected raw HTTP error, got {err:?}");
    };
    assert_eq!(http.status(), StatusCode::UNAUTHORIZED);
    assert!(http.url().path().ends_with("/oauth/token"));
    let body = http.text().await.unwrap();
    assert!(body.contains("invalid"));
    assert!(!strava.is_authenticated());
}

#[tokio::test]
async fn test_exchange_token_failure_keeps_previous_token() {
    let (server, strava) = mock_strava().await;
    strava.set_token("kept");

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = strava.exchange_token("bad").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(strava.token().as_deref(), Some("kept"));
}

#[tokio::test]
async fn test_exchange_token_rejects_malformed_success_body() {
    let (server, strava) = mock_strava().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = strava.exchange_token("abc").await.unwrap_err();

    assert!(matches!(err, StravaError::Api(ApiError::Decode(_))));
    assert!(!strava.is_authenticated());
}

#[tokio::test]
async fn test_deauthorize_sends_no_token_and_keeps_local_token() -> Result<()> {
    let (server, strava) = mock_strava().await;
    strava.set_token("A1");

    Mock::given(method("GET"))
        .and(path("/oauth/deauthorize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "A1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = strava.deauthorize().await?;

    assert_eq!(response.status(), StatusCode::OK);
    let requests = received(&server).await;
    assert_eq!(authorization(&requests[0]), None);
    assert!(requests[0].body.is_empty());
    assert_eq!(strava.token().as_deref(), Some("A1"));
    Ok(())
}

#[tokio::test]
async fn test_deauthorize_failure_surfaces_raw_response() {
    let (server, strava) = mock_strava().await;

    Mock::given(method("GET"))
        .and(path("/oauth/deauthorize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = strava.deauthorize().await.unwrap_err();

    let StravaError::Http(http) = err else {
        panic!("expected raw HTTP error, got {err:?}");
    };
    assert_eq!(http.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(http.text().await.unwrap(), "upstream down");
}

#[tokio::test]
async fn test_clear_token_after_deauthorize() -> Result<()> {
    let (server, strava) = mock_strava().await;
    strava.set_token("A1");

    Mock::given(method("GET"))
        .and(path("/oauth/deauthorize"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    strava.deauthorize().await?;
    strava.clear_token();
    let err = strava.athlete().me().await.unwrap_err();

    assert!(err.is_unauthorized());
    let requests = received(&server).await;
    assert_eq!(authorization(&requests[1]), None);
    Ok(())
}
