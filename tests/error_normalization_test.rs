// ABOUTME: Integration tests for failure normalization across every resource facade
// ABOUTME: Each method must surface the same status and fault for the same remote failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fmt::Debug;

use common::{authenticated_strava, fault_json};
use reqwest::StatusCode;
use strava_client::models::{
    ActivityListParams, EffortListParams, ExploreParams, Fault, NewActivity, NewUpload,
    Pagination, UpdatableActivity,
};
use strava_client::{ActivityStream, ApiError, Endpoints, SegmentStream, SportType, Strava};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[track_caller]
fn assert_not_found<T: Debug>(operation: &str, result: Result<T, ApiError>) {
    let expected: Fault = serde_json::from_value(fault_json()).unwrap();
    let err = result.expect_err(operation);
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND), "{operation}");
    assert_eq!(err.fault(), Some(&expected), "{operation}");
}

#[tokio::test]
async fn test_every_operation_surfaces_the_pipeline_failure() {
    let (server, strava) = authenticated_strava("tok").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(fault_json()))
        .mount(&server)
        .await;

    let page = Pagination::default();

    assert_not_found("athlete.me", strava.athlete().me().await);
    assert_not_found("athlete.update", strava.athlete().update(70.0).await);
    assert_not_found(
        "athlete.activities",
        strava.athlete().activities(&ActivityListParams::default()).await,
    );
    assert_not_found("athlete.clubs", strava.athlete().clubs(&page).await);
    assert_not_found("athlete.zones", strava.athlete().zones().await);
    assert_not_found("athlete.routes", strava.athlete().routes(1, &page).await);
    assert_not_found("athlete.stats", strava.athlete().stats(1).await);

    assert_not_found("segments.get", strava.segments().get(1).await);
    assert_not_found("segments.starred", strava.segments().starred(&page).await);
    assert_not_found("segments.star", strava.segments().star(1, false).await);
    assert_not_found(
        "segments.explore",
        strava
            .segments()
            .explore(&ExploreParams::new([0.0, 0.0, 1.0, 1.0]))
            .await,
    );
    assert_not_found(
        "segments.streams",
        strava.segments().streams(1, &[SegmentStream::Distance], true).await,
    );
    assert_not_found(
        "segment_efforts.list",
        strava.segment_efforts().list(&EffortListParams::new(1)).await,
    );
    assert_not_found("segment_efforts.get", strava.segment_efforts().get(1).await);
    assert_not_found(
        "segment_efforts.streams",
        strava.segment_efforts().streams(1, &[ActivityStream::Time], true).await,
    );

    let activity = NewActivity::new("Ride", SportType::Ride, "2024-01-01T08:00:00Z", 60);
    assert_not_found("activities.create", strava.activities().create(&activity).await);
    assert_not_found("activities.get", strava.activities().get(1, None).await);
    assert_not_found(
        "activities.update",
        strava.activities().update(1, &UpdatableActivity::default()).await,
    );
    assert_not_found("activities.laps", strava.activities().laps(1).await);
    assert_not_found("activities.zones", strava.activities().zones(1).await);
    assert_not_found("activities.comments", strava.activities().comments(1, &page).await);
    assert_not_found("activities.kudos", strava.activities().kudos(1, &page).await);
    assert_not_found(
        "activities.streams",
        strava.activities().streams(1, &[ActivityStream::Time], true).await,
    );

    assert_not_found("clubs.get", strava.clubs().get(1).await);
    assert_not_found("clubs.activities", strava.clubs().activities(1, &page).await);
    assert_not_found("clubs.members", strava.clubs().members(1, &page).await);
    assert_not_found("clubs.admins", strava.clubs().admins(1, &page).await);

    assert_not_found("gear.get", strava.gear().get("b1").await);

    assert_not_found("routes.get", strava.routes().get(1).await);
    assert_not_found("routes.export_gpx", strava.routes().export_gpx(1).await);
    assert_not_found("routes.export_tcx", strava.routes().export_tcx(1).await);
    assert_not_found("routes.streams", strava.routes().streams(1).await);

    assert_not_found("uploads.get", strava.uploads().get(1).await);
    assert_not_found(
        "uploads.create",
        strava
            .uploads()
            .create("ride.fit", b"fit".to_vec(), &NewUpload::default())
            .await,
    );
}

#[tokio::test]
async fn test_non_fault_error_body_is_kept_verbatim() {
    let (server, strava) = authenticated_strava("tok").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = strava.gear().get("b1").await.unwrap_err();

    let ApiError::Status { status, fault, body } = err else {
        panic!("expected status error, got {err:?}");
    };
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(fault.is_none());
    assert_eq!(body, "<html>maintenance</html>");
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let (server, strava) = authenticated_strava("tok").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": \"not-a-number\"}"))
        .mount(&server)
        .await;

    let err = strava.athlete().me().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() {
    let strava = Strava::builder(common::test_config())
        .endpoints(Endpoints::with_server("http://127.0.0.1:1"))
        .token("tok")
        .build();

    let err = strava.athlete().me().await.unwrap_err();

    assert!(matches!(err, ApiError::Request(_)));
}
