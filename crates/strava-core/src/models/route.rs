// ABOUTME: Route payload returned by the route endpoints
// ABOUTME: GPX/TCX exports are plain XML text and have no model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activity::PolylineMap;
use super::athlete::SummaryAthlete;
use super::nullable::null_as_default;
use super::segment::SummarySegment;

/// A planned route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The unique identifier of this route
    pub id: u64,
    /// The unique identifier of the route in string format
    pub id_str: Option<String>,
    /// The name of this route
    pub name: String,
    /// The description of the route
    pub description: Option<String>,
    /// The route's athlete
    pub athlete: Option<SummaryAthlete>,
    /// The route's distance, in meters
    pub distance: Option<f64>,
    /// The route's elevation gain
    pub elevation_gain: Option<f64>,
    /// The route's map
    pub map: Option<PolylineMap>,
    /// Whether this route is private
    pub private: Option<bool>,
    /// Whether this route is starred by the logged-in athlete
    pub starred: Option<bool>,
    /// `1` for ride, `2` for runs
    #[serde(rename = "type")]
    pub route_type: Option<u8>,
    /// `1` road, `2` mountain bike, `3` cross, `4` trail, `5` mixed
    pub sub_type: Option<u8>,
    /// Estimated time in seconds for the authenticated athlete to complete the route
    pub estimated_moving_time: Option<u64>,
    /// The time at which the route was created
    pub created_at: Option<DateTime<Utc>>,
    /// The time at which the route was last updated
    pub updated_at: Option<DateTime<Utc>>,
    /// Segments traversed by this route
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<SummarySegment>,
}
