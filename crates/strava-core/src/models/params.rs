// ABOUTME: Query parameter types shared by several resource endpoints
// ABOUTME: Serialized with reqwest's query encoder; absent values are never sent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// Page selection for list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Page number, starting at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Pagination {
    /// Request a specific page with a page size
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// Query for the stream endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamQuery {
    /// Comma-separated stream keys
    pub keys: String,
    /// Return a map keyed by stream type instead of a list
    pub key_by_type: bool,
}

impl StreamQuery {
    /// Build a stream query from already joined keys
    #[must_use]
    pub const fn new(keys: String, key_by_type: bool) -> Self {
        Self { keys, key_by_type }
    }
}
