// ABOUTME: Stream channel keys requested from the activity, segment, and effort stream endpoints
// ABOUTME: Values pass straight through to the query string as a comma-separated list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseVocabularyError;
use crate::vocabulary::wire_enum;

wire_enum! {
    /// Time-series channel of an activity or segment effort
    pub enum ActivityStream("activity stream") {
        /// Seconds since the start of the activity
        Time => "time",
        /// Distance in meters
        Distance => "distance",
        /// `[latitude, longitude]` pairs
        LatLng => "latlng",
        /// Altitude in meters
        Altitude => "altitude",
        /// Smoothed velocity in meters per second
        VelocitySmooth => "velocity_smooth",
        /// Heart rate in beats per minute
        Heartrate => "heartrate",
        /// Cadence in rotations per minute
        Cadence => "cadence",
        /// Power in watts
        Watts => "watts",
        /// Temperature in degrees Celsius
        Temp => "temp",
        /// Whether the athlete was moving
        Moving => "moving",
        /// Smoothed grade in percent
        GradeSmooth => "grade_smooth",
    }
}

wire_enum! {
    /// Time-series channel of a segment
    pub enum SegmentStream("segment stream") {
        /// Distance in meters
        Distance => "distance",
        /// `[latitude, longitude]` pairs
        LatLng => "latlng",
        /// Altitude in meters
        Altitude => "altitude",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_stream_keys_join() {
        let keys = ActivityStream::join(&[
            ActivityStream::Time,
            ActivityStream::LatLng,
            ActivityStream::GradeSmooth,
        ]);
        assert_eq!(keys, "time,latlng,grade_smooth");
    }

    #[test]
    fn test_all_activity_streams_listed() {
        assert_eq!(ActivityStream::ALL.len(), 11);
    }

    #[test]
    fn test_segment_stream_parse() {
        assert_eq!("latlng".parse::<SegmentStream>(), Ok(SegmentStream::LatLng));
        assert!("heartrate".parse::<SegmentStream>().is_err());
    }
}
