// ABOUTME: Typed Strava API payloads grouped by resource
// ABOUTME: Response models are parsed verbatim; request models mirror the remote field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request and response payloads for the Strava API v3.
//!
//! Response models only type the fields callers commonly read. Unknown fields
//! are ignored and optional remote fields are `Option`, so additions on the
//! remote side never break parsing.

/// Activities, laps, zones, comments and activity mutations
pub mod activity;
/// Athlete profiles, zones and statistics
pub mod athlete;
/// Clubs, club members and club activities
pub mod club;
/// Error body returned by the resource API
pub mod fault;
/// Bikes and shoes
pub mod gear;
mod nullable;
/// OAuth token exchange payloads
pub mod oauth;
/// Shared query parameter types
pub mod params;
/// Routes
pub mod route;
/// Segments, segment efforts and segment exploration
pub mod segment;
/// Stream sets returned by the stream endpoints
pub mod stream;
/// File uploads
pub mod upload;

pub use activity::{
    ActivityListParams, ActivityRef, ActivityZone, Comment, DetailedActivity, Lap, NewActivity,
    PolylineMap, SummaryActivity, TimedZoneRange, UpdatableActivity,
};
pub use athlete::{
    ActivityStats, ActivityTotal, AthleteZones, DetailedAthlete, HeartRateZoneRanges, MetaAthlete,
    PowerZoneRanges, SummaryAthlete, ZoneRange,
};
pub use club::{ClubActivity, ClubActivityAthlete, ClubAthlete, DetailedClub, SummaryClub};
pub use fault::{Fault, FaultError};
pub use gear::{DetailedGear, SummaryGear};
pub use oauth::{OAuthResponse, TokenRequest};
pub use params::{Pagination, StreamQuery};
pub use route::Route;
pub use segment::{
    DetailedSegment, DetailedSegmentEffort, EffortListParams, ExploreActivityType, ExploreParams,
    ExplorerResponse, ExplorerSegment, StarSegment, SummarySegment, SummarySegmentEffort,
};
pub use stream::{Stream, StreamSet, StreamsResponse, TypedStream};
pub use upload::{NewUpload, Upload, UploadDataType};
