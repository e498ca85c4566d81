// ABOUTME: Stream payloads returned by the activity, segment, effort and route stream endpoints
// ABOUTME: Handles both the keyed (key_by_type=true) and list-shaped responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One time-series channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream<T> {
    /// The number of data points in this stream
    pub original_size: Option<u64>,
    /// The level of detail (sampling) in which this stream was returned
    pub resolution: Option<String>,
    /// The base series used in the case the stream was downsampled
    pub series_type: Option<String>,
    /// The sequence of values for this stream
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Streams keyed by channel, as returned with `key_by_type=true`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamSet {
    /// Seconds since start
    pub time: Option<Stream<f64>>,
    /// Distance in meters
    pub distance: Option<Stream<f64>>,
    /// `[latitude, longitude]` pairs
    pub latlng: Option<Stream<[f64; 2]>>,
    /// Altitude in meters
    pub altitude: Option<Stream<f64>>,
    /// Smoothed velocity in meters per second
    pub velocity_smooth: Option<Stream<f64>>,
    /// Heart rate in beats per minute
    pub heartrate: Option<Stream<f64>>,
    /// Cadence in rotations per minute
    pub cadence: Option<Stream<f64>>,
    /// Power in watts; samples may be missing
    pub watts: Option<Stream<Option<f64>>>,
    /// Temperature in degrees Celsius
    pub temp: Option<Stream<f64>>,
    /// Moving flag
    pub moving: Option<Stream<bool>>,
    /// Smoothed grade in percent
    pub grade_smooth: Option<Stream<f64>>,
}

/// Stream entry of a list-shaped response, tagged with its channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedStream {
    /// Channel name, e.g. `heartrate`
    #[serde(rename = "type")]
    pub stream_type: String,
    /// The channel itself; values stay untyped because they vary per channel
    #[serde(flatten)]
    pub stream: Stream<Value>,
}

/// Body of a stream endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamsResponse {
    /// List of tagged channels (`key_by_type=false`)
    Listed(Vec<TypedStream>),
    /// Object keyed by channel (`key_by_type=true`)
    Keyed(StreamSet),
}
