// ABOUTME: Activity payloads: summaries, details, laps, zones, comments and mutations
// ABOUTME: Mutation payloads encode the trainer/commute flags the way each endpoint expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::athlete::{MetaAthlete, SummaryAthlete};
use super::gear::SummaryGear;
use super::nullable::null_as_default;
use super::segment::DetailedSegmentEffort;
use crate::sport::{ActivityType, SportType};

/// Encoded route polyline of an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolylineMap {
    /// The identifier of the map
    pub id: String,
    /// The polyline of the map, only returned on detailed representations
    pub polyline: Option<String>,
    /// The summary polyline of the map
    pub summary_polyline: Option<String>,
}

/// Summary representation of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryActivity {
    /// The unique identifier of the activity
    pub id: u64,
    /// The identifier provided at upload time
    pub external_id: Option<String>,
    /// The identifier of the upload that resulted in this activity
    pub upload_id: Option<u64>,
    /// The athlete who performed the activity
    pub athlete: Option<MetaAthlete>,
    /// The name of the activity
    pub name: String,
    /// The activity's distance, in meters
    pub distance: Option<f64>,
    /// The activity's moving time, in seconds
    pub moving_time: Option<u64>,
    /// The activity's elapsed time, in seconds
    pub elapsed_time: Option<u64>,
    /// The activity's total elevation gain
    pub total_elevation_gain: Option<f64>,
    /// Legacy activity type, as sent by the remote API
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Sport type, as sent by the remote API
    pub sport_type: Option<String>,
    /// The time at which the activity was started
    pub start_date: Option<DateTime<Utc>>,
    /// The time at which the activity was started in the local timezone
    pub start_date_local: Option<DateTime<Utc>>,
    /// The timezone of the activity
    pub timezone: Option<String>,
    /// Start coordinates `[latitude, longitude]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    /// End coordinates `[latitude, longitude]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    /// The number of achievements gained during this activity
    pub achievement_count: Option<u32>,
    /// The number of kudos given for this activity
    pub kudos_count: Option<u32>,
    /// The number of comments for this activity
    pub comment_count: Option<u32>,
    /// The number of athletes taking part in a group activity
    pub athlete_count: Option<u32>,
    /// The number of Instagram photos for this activity
    pub photo_count: Option<u32>,
    /// The map of the activity
    pub map: Option<PolylineMap>,
    /// Whether this activity was recorded on a training machine
    pub trainer: Option<bool>,
    /// Whether this activity is a commute
    pub commute: Option<bool>,
    /// Whether this activity was created manually
    pub manual: Option<bool>,
    /// Whether this activity is private
    pub private: Option<bool>,
    /// Whether this activity is flagged
    pub flagged: Option<bool>,
    /// The id of the gear for the activity
    pub gear_id: Option<String>,
    /// The activity's average speed, in meters per second
    pub average_speed: Option<f64>,
    /// The activity's max speed, in meters per second
    pub max_speed: Option<f64>,
    /// Average power output in watts during this activity (rides only)
    pub average_watts: Option<f64>,
    /// Kilojoules expended during this activity (rides only)
    pub kilojoules: Option<f64>,
    /// Whether the watts are from a power meter
    pub device_watts: Option<bool>,
    /// Whether the athlete used a heart rate monitor
    pub has_heartrate: Option<bool>,
    /// Average heart rate during the activity
    pub average_heartrate: Option<f64>,
    /// Maximum heart rate during the activity
    pub max_heartrate: Option<f64>,
    /// Whether the current athlete has kudoed this activity
    pub has_kudoed: Option<bool>,
}

/// Detailed representation of an activity owned by the authenticated athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedActivity {
    /// Fields shared with the summary representation
    #[serde(flatten)]
    pub summary: SummaryActivity,
    /// The description of the activity
    pub description: Option<String>,
    /// Kilocalories consumed during this activity
    pub calories: Option<f64>,
    /// The name of the device used to record the activity
    pub device_name: Option<String>,
    /// The token used to embed a Strava activity
    pub embed_token: Option<String>,
    /// The gear used for the activity
    pub gear: Option<SummaryGear>,
    /// Segment efforts of the activity
    #[serde(default, deserialize_with = "null_as_default")]
    pub segment_efforts: Vec<DetailedSegmentEffort>,
    /// Laps of the activity
    #[serde(default, deserialize_with = "null_as_default")]
    pub laps: Vec<Lap>,
}

/// One lap of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    /// The unique identifier of this lap
    pub id: u64,
    /// The activity this lap belongs to
    pub activity: Option<ActivityRef>,
    /// The athlete who performed the lap
    pub athlete: Option<MetaAthlete>,
    /// The name of the lap
    pub name: Option<String>,
    /// The lap's elapsed time, in seconds
    pub elapsed_time: Option<u64>,
    /// The lap's moving time, in seconds
    pub moving_time: Option<u64>,
    /// The time at which the lap was started
    pub start_date: Option<DateTime<Utc>>,
    /// The lap's distance, in meters
    pub distance: Option<f64>,
    /// The lap's average speed
    pub average_speed: Option<f64>,
    /// The maximum speed of this lap, in meters per second
    pub max_speed: Option<f64>,
    /// The elevation gain of this lap, in meters
    pub total_elevation_gain: Option<f64>,
    /// The lap's average cadence
    pub average_cadence: Option<f64>,
    /// The index of this lap in the activity it belongs to
    pub lap_index: Option<u32>,
    /// The athlete's pace zone during this lap
    pub pace_zone: Option<u32>,
    /// Start index in the activity's stream
    pub start_index: Option<u64>,
    /// End index in the activity's stream
    pub end_index: Option<u64>,
}

/// Activity reference carrying only the identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRef {
    /// The unique identifier of the activity
    pub id: u64,
}

/// Time spent inside one zone range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedZoneRange {
    /// The minimum value in the range
    pub min: f64,
    /// The maximum value in the range
    pub max: f64,
    /// The number of seconds spent in this zone
    pub time: f64,
}

/// Heart rate or power zone distribution of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityZone {
    /// Suffer score contribution of the zone
    pub score: Option<i64>,
    /// Time spent per zone
    #[serde(default, deserialize_with = "null_as_default")]
    pub distribution_buckets: Vec<TimedZoneRange>,
    /// `heartrate` or `power`
    #[serde(rename = "type")]
    pub zone_type: Option<String>,
    /// Whether the zone data came from a sensor
    pub sensor_based: Option<bool>,
    /// Points awarded for the zone
    pub points: Option<i64>,
    /// Whether the athlete uses custom zones
    pub custom_zones: Option<bool>,
    /// Upper bound of the zone set
    pub max: Option<i64>,
}

/// A comment on an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// The unique identifier of this comment
    pub id: u64,
    /// The identifier of the activity this comment is related to
    pub activity_id: Option<u64>,
    /// The content of the comment
    pub text: String,
    /// The athlete who wrote the comment
    pub athlete: Option<SummaryAthlete>,
    /// The time at which this comment was created
    pub created_at: Option<DateTime<Utc>>,
}

/// Filters for the authenticated athlete's activity list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityListParams {
    /// Only activities that took place before this epoch timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    /// Only activities that took place after this epoch timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Payload for creating a manual activity
///
/// The create endpoint takes `trainer` and `commute` as `1`/`0` integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewActivity {
    /// The name of the activity
    pub name: String,
    /// Legacy activity type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// Sport type of the activity
    pub sport_type: SportType,
    /// ISO 8601 formatted local start time
    pub start_date_local: String,
    /// Elapsed time in seconds
    pub elapsed_time: u64,
    /// Description of the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Recorded on a training machine
    #[serde(
        serialize_with = "flag_as_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub trainer: Option<bool>,
    /// Marked as a commute
    #[serde(
        serialize_with = "flag_as_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub commute: Option<bool>,
    /// Hidden from everyone but the owner
    #[serde(rename = "private", skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Flagged activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
    /// Gear used for the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,
}

impl NewActivity {
    /// Start a payload with the fields the endpoint requires
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        sport_type: SportType,
        start_date_local: impl Into<String>,
        elapsed_time: u64,
    ) -> Self {
        Self {
            name: name.into(),
            activity_type: None,
            sport_type,
            start_date_local: start_date_local.into(),
            elapsed_time,
            description: None,
            distance: None,
            trainer: None,
            commute: None,
            is_private: None,
            flagged: None,
            gear_id: None,
        }
    }
}

/// Payload for updating an activity; native booleans are passed through
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatableActivity {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New legacy activity type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// New sport type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<SportType>,
    /// New ISO 8601 local start time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_local: Option<String>,
    /// New elapsed time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Recorded on a training machine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<bool>,
    /// Marked as a commute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    /// Hidden from everyone but the owner
    #[serde(rename = "private", skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Flagged activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
    /// Gear used; `none` clears it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,
    /// Muted from the home feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_home: Option<bool>,
}

// Only reached for `Some`; the fields skip `None`.
#[allow(clippy::ref_option)] // serde's serialize_with signature passes the field by reference
fn flag_as_int<S: Serializer>(flag: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match flag {
        Some(value) => serializer.serialize_u8(u8::from(*value)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_activity_encodes_flags_as_integers() {
        let mut activity = NewActivity::new("Lunch Run", SportType::Run, "2024-03-01T12:00:00Z", 1800);
        activity.trainer = Some(true);
        activity.commute = Some(false);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["trainer"], json!(1));
        assert_eq!(json["commute"], json!(0));
        assert_eq!(json["sport_type"], json!("Run"));
    }

    #[test]
    fn test_new_activity_omits_absent_fields() {
        let activity = NewActivity::new("Ride", SportType::Ride, "2024-03-01T12:00:00Z", 3600);
        let json = serde_json::to_value(&activity).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("trainer"));
        assert!(!object.contains_key("commute"));
        assert!(!object.contains_key("type"));
        assert!(!object.contains_key("private"));
    }

    #[test]
    fn test_new_activity_maps_private_flag() {
        let mut activity = NewActivity::new("Secret", SportType::Walk, "2024-03-01T12:00:00Z", 60);
        activity.is_private = Some(true);
        activity.activity_type = Some(ActivityType::Walk);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["private"], json!(true));
        assert_eq!(json["type"], json!("Walk"));
    }

    #[test]
    fn test_updatable_activity_keeps_native_booleans() {
        let update = UpdatableActivity {
            trainer: Some(true),
            commute: Some(false),
            ..UpdatableActivity::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, json!({"trainer": true, "commute": false}));
    }

    #[test]
    fn test_detailed_activity_flattens_summary() {
        let body = json!({
            "id": 12345,
            "name": "Morning Ride",
            "type": "Ride",
            "sport_type": "MountainBikeRide",
            "distance": 28099.0,
            "description": "Into the hills",
            "laps": [{"id": 1, "lap_index": 1}]
        });

        let activity: DetailedActivity = serde_json::from_value(body).unwrap();
        assert_eq!(activity.summary.id, 12345);
        assert_eq!(activity.summary.sport_type.as_deref(), Some("MountainBikeRide"));
        assert_eq!(activity.description.as_deref(), Some("Into the hills"));
        assert_eq!(activity.laps.len(), 1);
    }

    #[test]
    fn test_manual_activity_with_null_coordinates_parses() {
        let body = json!({
            "id": 154_504_250_376_823_u64,
            "resource_state": 3,
            "name": "Yoga",
            "distance": 0,
            "moving_time": 3600,
            "elapsed_time": 3600,
            "type": "Yoga",
            "sport_type": "Yoga",
            "start_date_local": "2018-02-20T10:02:13Z",
            "start_latlng": null,
            "end_latlng": null,
            "manual": true,
            "segment_efforts": null,
            "laps": null
        });

        let activity: DetailedActivity = serde_json::from_value(body).unwrap();
        assert!(activity.summary.start_latlng.is_empty());
        assert!(activity.summary.end_latlng.is_empty());
        assert!(activity.segment_efforts.is_empty());
        assert!(activity.laps.is_empty());
        assert_eq!(activity.summary.manual, Some(true));
    }

    #[test]
    fn test_summary_activity_null_coordinates_match_missing_ones() {
        let with_null: SummaryActivity =
            serde_json::from_value(json!({"id": 1, "name": "Walk", "start_latlng": null})).unwrap();
        let missing: SummaryActivity =
            serde_json::from_value(json!({"id": 1, "name": "Walk"})).unwrap();

        assert_eq!(with_null, missing);
    }
}
