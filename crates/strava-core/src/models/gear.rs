// ABOUTME: Gear payloads for bikes and shoes
// ABOUTME: Gear identifiers are strings such as `b12345678987654321`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Summary representation of a piece of gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryGear {
    /// The gear's unique identifier
    pub id: String,
    /// Resource state, indicates level of detail
    pub resource_state: Option<u8>,
    /// Whether this gear's is the owner's default one
    pub primary: Option<bool>,
    /// The gear's name
    pub name: Option<String>,
    /// The distance logged with this gear
    pub distance: Option<f64>,
}

/// Detailed representation of a piece of gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedGear {
    /// Fields shared with the summary representation
    #[serde(flatten)]
    pub summary: SummaryGear,
    /// The gear's brand name
    pub brand_name: Option<String>,
    /// The gear's model name
    pub model_name: Option<String>,
    /// The gear's frame type (bike only)
    pub frame_type: Option<u8>,
    /// The gear's description
    pub description: Option<String>,
}
