// ABOUTME: Activity facade: create, read, update, and the per-activity sub-resources
// ABOUTME: Laps, zones, comments, kudoers and streams hang off /activities/{id}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use strava_core::models::{
    ActivityZone, Comment, DetailedActivity, Lap, NewActivity, Pagination, StreamQuery,
    StreamsResponse, SummaryAthlete, UpdatableActivity,
};
use strava_core::ActivityStream;

use crate::client::Strava;
use crate::errors::ApiError;

/// Activity endpoints
#[derive(Debug, Clone, Copy)]
pub struct ActivitiesApi<'a> {
    client: &'a Strava,
}

#[derive(Serialize)]
struct IncludeAllEfforts {
    #[serde(skip_serializing_if = "Option::is_none")]
    include_all_efforts: Option<bool>,
}

impl Strava {
    /// Activity endpoints
    #[must_use]
    pub const fn activities(&self) -> ActivitiesApi<'_> {
        ActivitiesApi { client: self }
    }
}

impl ActivitiesApi<'_> {
    /// Create a manual activity (`POST /activities`)
    ///
    /// Requires the `activity:write` scope.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn create(&self, activity: &NewActivity) -> Result<DetailedActivity, ApiError> {
        let request = self.client.post("/activities").json(activity);
        self.client.send_json(request).await
    }

    /// Get an activity (`GET /activities/{id}`)
    ///
    /// `include_all_efforts` asks for every segment effort rather than the
    /// highlighted ones; `None` leaves the remote default.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(
        &self,
        id: u64,
        include_all_efforts: Option<bool>,
    ) -> Result<DetailedActivity, ApiError> {
        let request = self
            .client
            .get(&format!("/activities/{id}"))
            .query(&IncludeAllEfforts {
                include_all_efforts,
            });
        self.client.send_json(request).await
    }

    /// Update an activity (`PUT /activities/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn update(
        &self,
        id: u64,
        changes: &UpdatableActivity,
    ) -> Result<DetailedActivity, ApiError> {
        let request = self.client.put(&format!("/activities/{id}")).json(changes);
        self.client.send_json(request).await
    }

    /// List the laps of an activity (`GET /activities/{id}/laps`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn laps(&self, id: u64) -> Result<Vec<Lap>, ApiError> {
        let request = self.client.get(&format!("/activities/{id}/laps"));
        self.client.send_json(request).await
    }

    /// Get the time spent in each zone (`GET /activities/{id}/zones`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn zones(&self, id: u64) -> Result<Vec<ActivityZone>, ApiError> {
        let request = self.client.get(&format!("/activities/{id}/zones"));
        self.client.send_json(request).await
    }

    /// List comments on an activity (`GET /activities/{id}/comments`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn comments(
        &self,
        id: u64,
        pagination: &Pagination,
    ) -> Result<Vec<Comment>, ApiError> {
        let request = self
            .client
            .get(&format!("/activities/{id}/comments"))
            .query(pagination);
        self.client.send_json(request).await
    }

    /// List athletes who gave kudos (`GET /activities/{id}/kudos`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn kudos(
        &self,
        id: u64,
        pagination: &Pagination,
    ) -> Result<Vec<SummaryAthlete>, ApiError> {
        let request = self
            .client
            .get(&format!("/activities/{id}/kudos"))
            .query(pagination);
        self.client.send_json(request).await
    }

    /// Get the streams of an activity (`GET /activities/{id}/streams`)
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
            .get(&format!("/activities/{id}/streams"))
            .query(&query);
        self.client.send_json(request).await
    }
}
