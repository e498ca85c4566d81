// ABOUTME: Athlete profile, zone and statistics payloads
// ABOUTME: Returned by the /athlete and /athletes/{id} endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::club::SummaryClub;
use super::gear::SummaryGear;
use super::nullable::null_as_default;

/// Athlete reference carrying only the identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAthlete {
    /// The unique identifier of the athlete
    pub id: u64,
}

/// Public summary of an athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryAthlete {
    /// The unique identifier of the athlete
    pub id: u64,
    /// Resource state, indicates level of detail (1 meta, 2 summary, 3 detail)
    pub resource_state: Option<u8>,
    /// The athlete's first name
    pub firstname: Option<String>,
    /// The athlete's last name
    pub lastname: Option<String>,
    /// URL to a 62x62 pixel profile picture
    pub profile_medium: Option<String>,
    /// URL to a 124x124 pixel profile picture
    pub profile: Option<String>,
    /// The athlete's city
    pub city: Option<String>,
    /// The athlete's state or geographical region
    pub state: Option<String>,
    /// The athlete's country
    pub country: Option<String>,
    /// The athlete's sex, `M` or `F`
    pub sex: Option<String>,
    /// Whether the athlete has any Summit subscription
    pub summit: Option<bool>,
    /// Creation time of the athlete's account
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time of the athlete's account
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full profile of the authenticated athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAthlete {
    /// The unique identifier of the athlete
    pub id: u64,
    /// The athlete's username
    pub username: Option<String>,
    /// Resource state, indicates level of detail
    pub resource_state: Option<u8>,
    /// The athlete's first name
    pub firstname: Option<String>,
    /// The athlete's last name
    pub lastname: Option<String>,
    /// The athlete's bio
    pub bio: Option<String>,
    /// The athlete's city
    pub city: Option<String>,
    /// The athlete's state or geographical region
    pub state: Option<String>,
    /// The athlete's country
    pub country: Option<String>,
    /// The athlete's sex, `M` or `F`
    pub sex: Option<String>,
    /// Whether the athlete has any Summit subscription
    pub summit: Option<bool>,
    /// URL to a 62x62 pixel profile picture
    pub profile_medium: Option<String>,
    /// URL to a 124x124 pixel profile picture
    pub profile: Option<String>,
    /// Creation time of the athlete's account
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time of the athlete's account
    pub updated_at: Option<DateTime<Utc>>,
    /// The athlete's follower count
    pub follower_count: Option<u32>,
    /// The athlete's friend count
    pub friend_count: Option<u32>,
    /// The athlete's preferred unit system, `feet` or `meters`
    pub measurement_preference: Option<String>,
    /// The athlete's FTP (Functional Threshold Power)
    pub ftp: Option<u32>,
    /// The athlete's weight in kilograms
    pub weight: Option<f64>,
    /// The athlete's clubs
    #[serde(default, deserialize_with = "null_as_default")]
    pub clubs: Vec<SummaryClub>,
    /// The athlete's bikes
    #[serde(default, deserialize_with = "null_as_default")]
    pub bikes: Vec<SummaryGear>,
    /// The athlete's shoes
    #[serde(default, deserialize_with = "null_as_default")]
    pub shoes: Vec<SummaryGear>,
}

/// Lower and upper bound of one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRange {
    /// The minimum value in the range
    pub min: i32,
    /// The maximum value in the range, `-1` for open-ended
    pub max: i32,
}

/// Heart rate zones of the athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZoneRanges {
    /// Whether the athlete has set their own custom heart rate zones
    pub custom_zones: bool,
    /// The zone boundaries
    pub zones: Vec<ZoneRange>,
}

/// Power zones of the athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerZoneRanges {
    /// The zone boundaries
    pub zones: Vec<ZoneRange>,
}

/// Training zones of the authenticated athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteZones {
    /// Heart rate zones
    pub heart_rate: Option<HeartRateZoneRanges>,
    /// Power zones, only present for Summit athletes
    pub power: Option<PowerZoneRanges>,
}

/// Rolled-up totals for a set of activities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityTotal {
    /// The number of activities considered in this total
    pub count: u64,
    /// The total distance covered, in meters
    pub distance: f64,
    /// The total moving time, in seconds
    pub moving_time: u64,
    /// The total elapsed time, in seconds
    pub elapsed_time: u64,
    /// The total elevation gain, in meters
    pub elevation_gain: f64,
    /// The total number of achievements
    pub achievement_count: Option<u64>,
}

/// Activity statistics of an athlete; only includes Everyone-visible activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// The longest distance ridden by the athlete
    pub biggest_ride_distance: Option<f64>,
    /// The highest climb ridden by the athlete
    pub biggest_climb_elevation_gain: Option<f64>,
    /// Recent (last 4 weeks) ride stats
    pub recent_ride_totals: ActivityTotal,
    /// Recent (last 4 weeks) run stats
    pub recent_run_totals: ActivityTotal,
    /// Recent (last 4 weeks) swim stats
    pub recent_swim_totals: ActivityTotal,
    /// Year to date ride stats
    pub ytd_ride_totals: ActivityTotal,
    /// Year to date run stats
    pub ytd_run_totals: ActivityTotal,
    /// Year to date swim stats
    pub ytd_swim_totals: ActivityTotal,
    /// All time ride stats
    pub all_ride_totals: ActivityTotal,
    /// All time run stats
    pub all_run_totals: ActivityTotal,
    /// All time swim stats
    pub all_swim_totals: ActivityTotal,
}
