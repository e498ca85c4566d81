// ABOUTME: Segment, segment effort and segment explorer payloads
// ABOUTME: Includes the query types for exploring segments and listing efforts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::activity::{ActivityRef, PolylineMap};
use super::athlete::MetaAthlete;
use super::nullable::null_as_default;
use crate::errors::ParseVocabularyError;
use crate::vocabulary::wire_enum;

wire_enum! {
    /// Activity type filter accepted by the segment explorer
    pub enum ExploreActivityType("explore activity type") {
        /// Running segments
        Running => "running",
        /// Riding segments
        Riding => "riding",
    }
}

/// Summary representation of a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySegment {
    /// The unique identifier of this segment
    pub id: u64,
    /// The name of this segment
    pub name: String,
    /// `Ride` or `Run`
    pub activity_type: Option<String>,
    /// The segment's distance, in meters
    pub distance: Option<f64>,
    /// The segment's average grade, in percents
    pub average_grade: Option<f64>,
    /// The segments's maximum grade, in percents
    pub maximum_grade: Option<f64>,
    /// The segments's highest point, in meters
    pub elevation_high: Option<f64>,
    /// The segments's lowest point, in meters
    pub elevation_low: Option<f64>,
    /// Start coordinates `[latitude, longitude]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    /// End coordinates `[latitude, longitude]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    /// The category of the climb `[0, 5]`; higher is harder
    pub climb_category: Option<u8>,
    /// The segments's city
    pub city: Option<String>,
    /// The segments's state or geographical region
    pub state: Option<String>,
    /// The segment's country
    pub country: Option<String>,
    /// Whether this segment is private
    pub private: Option<bool>,
    /// Whether the authenticated athlete has starred this segment
    pub starred: Option<bool>,
}

/// Detailed representation of a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedSegment {
    /// Fields shared with the summary representation
    #[serde(flatten)]
    pub summary: SummarySegment,
    /// The time at which the segment was created
    pub created_at: Option<DateTime<Utc>>,
    /// The time at which the segment was last updated
    pub updated_at: Option<DateTime<Utc>>,
    /// The segment's total elevation gain
    pub total_elevation_gain: Option<f64>,
    /// The segment's polyline
    pub map: Option<PolylineMap>,
    /// The total number of efforts for this segment
    pub effort_count: Option<u64>,
    /// The number of unique athletes who have an effort for this segment
    pub athlete_count: Option<u64>,
    /// Whether this segment is considered hazardous
    pub hazardous: Option<bool>,
    /// The number of stars for this segment
    pub star_count: Option<u64>,
}

/// Segment returned by the explorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerSegment {
    /// The unique identifier of this segment
    pub id: u64,
    /// The name of this segment
    pub name: String,
    /// The category of the climb
    pub climb_category: Option<u8>,
    /// The description for the category of the climb
    pub climb_category_desc: Option<String>,
    /// The segment's average grade, in percents
    pub avg_grade: Option<f64>,
    /// Start coordinates `[latitude, longitude]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    /// End coordinates `[latitude, longitude]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    /// The segments's evelation difference, in meters
    pub elev_difference: Option<f64>,
    /// The segment's distance, in meters
    pub distance: Option<f64>,
    /// The polyline of the segment
    pub points: Option<String>,
}

/// Explorer result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerResponse {
    /// The set of segments matching an explorer request
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<ExplorerSegment>,
}

/// Summary of one attempt at a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySegmentEffort {
    /// The unique identifier of this effort
    pub id: u64,
    /// The unique identifier of the activity related to this effort
    pub activity_id: Option<u64>,
    /// The effort's elapsed time
    pub elapsed_time: Option<u64>,
    /// The time at which the effort was started
    pub start_date: Option<DateTime<Utc>>,
    /// The time at which the effort was started in the local timezone
    pub start_date_local: Option<DateTime<Utc>>,
    /// The effort's distance in meters
    pub distance: Option<f64>,
    /// Whether this effort is the current best on the leaderboard
    pub is_kom: Option<bool>,
}

/// Detailed representation of a segment effort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedSegmentEffort {
    /// The unique identifier of this effort
    pub id: u64,
    /// The name of the segment on which this effort was performed
    pub name: Option<String>,
    /// The activity related to this effort
    pub activity: Option<ActivityRef>,
    /// The athlete who performed the effort
    pub athlete: Option<MetaAthlete>,
    /// The effort's elapsed time
    pub elapsed_time: Option<u64>,
    /// The effort's moving time
    pub moving_time: Option<u64>,
    /// The time at which the effort was started
    pub start_date: Option<DateTime<Utc>>,
    /// The time at which the effort was started in the local timezone
    pub start_date_local: Option<DateTime<Utc>>,
    /// The effort's distance in meters
    pub distance: Option<f64>,
    /// The start index of this effort in its activity's stream
    pub start_index: Option<u64>,
    /// The end index of this effort in its activity's stream
    pub end_index: Option<u64>,
    /// The effort's average cadence
    pub average_cadence: Option<f64>,
    /// The average wattage of this effort
    pub average_watts: Option<f64>,
    /// For riding efforts, whether the wattage was reported by a device
    pub device_watts: Option<bool>,
    /// The heart heart rate of the athlete during this effort
    pub average_heartrate: Option<f64>,
    /// The maximum heart rate of the athlete during this effort
    pub max_heartrate: Option<f64>,
    /// The segment on which this effort was performed
    pub segment: Option<SummarySegment>,
    /// The rank of the effort on the global leaderboard if it belongs in the top 10
    pub kom_rank: Option<u32>,
    /// The rank of the effort on the athlete's leaderboard if it belongs in the top 3
    pub pr_rank: Option<u32>,
    /// Whether this effort should be hidden when viewed within an activity
    pub hidden: Option<bool>,
}

/// Body of the star/unstar request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarSegment {
    /// Whether the segment should be starred
    pub starred: bool,
}

/// Query for the segment explorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExploreParams {
    /// `[south-west lat, south-west lng, north-east lat, north-east lng]`
    #[serde(serialize_with = "bounds_csv")]
    pub bounds: [f64; 4],
    /// Restrict to running or riding segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ExploreActivityType>,
    /// Minimum climbing category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cat: Option<u8>,
    /// Maximum climbing category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cat: Option<u8>,
}

impl ExploreParams {
    /// Explore a bounding box without filters
    #[must_use]
    pub const fn new(bounds: [f64; 4]) -> Self {
        Self {
            bounds,
            activity_type: None,
            min_cat: None,
            max_cat: None,
        }
    }
}

/// Query for listing the authenticated athlete's efforts on a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffortListParams {
    /// The identifier of the segment
    pub segment_id: u64,
    /// ISO 8601 formatted date time lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_local: Option<String>,
    /// ISO 8601 formatted date time upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_local: Option<String>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl EffortListParams {
    /// List all efforts on a segment
    #[must_use]
    pub const fn new(segment_id: u64) -> Self {
        Self {
            segment_id,
            start_date_local: None,
            end_date_local: None,
            per_page: None,
        }
    }
}

fn bounds_csv<S: Serializer>(bounds: &[f64; 4], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = bounds
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}
