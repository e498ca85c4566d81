// ABOUTME: Resource facades grouping Strava endpoints by domain noun
// ABOUTME: Each facade borrows the client and maps one method to one remote endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Resource Facades
//!
//! Thin groupings of endpoint methods. Every method builds exactly one request,
//! sends it through the client's authenticated pipeline, and returns either
//! the parsed payload or the pipeline's [`ApiError`](crate::ApiError)
//! unchanged. No method retries, caches, or adds context to failures.

/// `/activities` endpoints
pub mod activities;
/// `/athlete` and `/athletes/{id}` endpoints
pub mod athlete;
/// `/clubs` endpoints
pub mod clubs;
/// `/gear` endpoints
pub mod gear;
/// `/routes` endpoints
pub mod routes;
/// `/segments` and `/segment_efforts` endpoints
pub mod segments;
/// `/uploads` endpoints
pub mod uploads;

pub use activities::ActivitiesApi;
pub use athlete::AthleteApi;
pub use clubs::ClubsApi;
pub use gear::GearApi;
pub use routes::RoutesApi;
pub use segments::{SegmentEffortsApi, SegmentsApi};
pub use uploads::UploadsApi;
