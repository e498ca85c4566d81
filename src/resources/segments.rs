// ABOUTME: Segment and segment-effort facades: lookups, starring, exploration, and streams
// ABOUTME: Segment streams take segment keys while effort streams take activity keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strava_core::models::{
    DetailedSegment, DetailedSegmentEffort, EffortListParams, ExplorerResponse, ExploreParams,
    Pagination, StarSegment, StreamQuery, StreamsResponse, SummarySegment,
};
use strava_core::{ActivityStream, SegmentStream};

use crate::client::Strava;
use crate::errors::ApiError;

/// Segment endpoints
#[derive(Debug, Clone, Copy)]
pub struct SegmentsApi<'a> {
    client: &'a Strava,
}

/// Segment effort endpoints
#[derive(Debug, Clone, Copy)]
pub struct SegmentEffortsApi<'a> {
    client: &'a Strava,
}

impl Strava {
    /// Segment endpoints
    #[must_use]
    pub const fn segments(&self) -> SegmentsApi<'_> {
        SegmentsApi { client: self }
    }

    /// Segment effort endpoints
    #[must_use]
    pub const fn segment_efforts(&self) -> SegmentEffortsApi<'_> {
        SegmentEffortsApi { client: self }
    }
}

impl<'a> SegmentsApi<'a> {
    /// Effort endpoints, reachable from the segment grouping as well
    #[must_use]
    pub const fn efforts(&self) -> SegmentEffortsApi<'a> {
        SegmentEffortsApi {
            client: self.client,
        }
    }

    /// Get a segment (`GET /segments/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(&self, id: u64) -> Result<DetailedSegment, ApiError> {
        let request = self.client.get(&format!("/segments/{id}"));
        self.client.send_json(request).await
    }

    /// List segments starred by the authenticated athlete (`GET /segments/starred`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn starred(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<SummarySegment>, ApiError> {
        let request = self.client.get("/segments/starred").query(pagination);
        self.client.send_json(request).await
    }

    /// Star or unstar a segment (`PUT /segments/{id}/starred`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn star(&self, id: u64, starred: bool) -> Result<DetailedSegment, ApiError> {
        let request = self
            .client
            .put(&format!("/segments/{id}/starred"))
            .json(&StarSegment { starred });
        self.client.send_json(request).await
    }

    /// Find popular segments within a bounding box (`GET /segments/explore`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn explore(&self, params: &ExploreParams) -> Result<ExplorerResponse, ApiError> {
        let request = self.client.get("/segments/explore").query(params);
        self.client.send_json(request).await
    }

    /// Get the streams of a segment (`GET /segments/{id}/streams`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn streams(
        &self,
        id: u64,
        keys: &[SegmentStream],
        key_by_type: bool,
    ) -> Result<StreamsResponse, ApiError> {
        let query = StreamQuery::new(SegmentStream::join(keys), key_by_type);
        let request = self
            .client
            .get(&format!("/segments/{id}/streams"))
            .query(&query);
        self.client.send_json(request).await
    }
}

impl SegmentEffortsApi<'_> {
    /// List the authenticated athlete's efforts on a segment (`GET /segment_efforts`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn list(
        &self,
        params: &EffortListParams,
    ) -> Result<Vec<DetailedSegmentEffort>, ApiError> {
        let request = self.client.get("/segment_efforts").query(params);
        self.client.send_json(request).await
    }

    /// Get a segment effort (`GET /segment_efforts/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(&self, id: u64) -> Result<DetailedSegmentEffort, ApiError> {
        let request = self.client.get(&format!("/segment_efforts/{id}"));
        self.client.send_json(request).await
    }

    /// Get the streams of a segment effort (`GET /segment_efforts/{id}/streams`)
    ///
    /// Takes [`ActivityStream`] keys rather than the narrower [`SegmentStream`]
    /// set: an effort is a slice of an activity and serves every activity channel.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn streams(
        &self,
        id: u64,
        keys: &[ActivityStream],
        key_by_type: bool,
    ) -> Result<StreamsResponse, ApiError> {
        let query = StreamQuery::new(ActivityStream::join(keys), key_by_type);
        let request = self
            .client
            .get(&format!("/segment_efforts/{id}/streams"))
            .query(&query);
        self.client.send_json(request).await
    }
}
