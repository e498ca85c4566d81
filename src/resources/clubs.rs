// ABOUTME: Club facade: club details, recent activities, members, and administrators
// ABOUTME: Listing endpoints share the same page/per_page pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strava_core::models::{ClubActivity, ClubAthlete, DetailedClub, Pagination, SummaryAthlete};

use crate::client::Strava;
use crate::errors::ApiError;

/// Club endpoints
#[derive(Debug, Clone, Copy)]
pub struct ClubsApi<'a> {
    client: &'a Strava,
}

impl Strava {
    /// Club endpoints
    #[must_use]
    pub const fn clubs(&self) -> ClubsApi<'_> {
        ClubsApi { client: self }
    }
}

impl ClubsApi<'_> {
    /// Get a club (`GET /clubs/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(&self, id: u64) -> Result<DetailedClub, ApiError> {
        let request = self.client.get(&format!("/clubs/{id}"));
        self.client.send_json(request).await
    }

    /// Recent activities of club members (`GET /clubs/{id}/activities`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn activities(
        &self,
        id: u64,
        pagination: &Pagination,
    ) -> Result<Vec<ClubActivity>, ApiError> {
        let request = self
            .client
            .get(&format!("/clubs/{id}/activities"))
            .query(pagination);
        self.client.send_json(request).await
    }

    /// Club members (`GET /clubs/{id}/members`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn members(
        &self,
        id: u64,
        pagination: &Pagination,
    ) -> Result<Vec<ClubAthlete>, ApiError> {
        let request = self
            .client
            .get(&format!("/clubs/{id}/members"))
            .query(pagination);
        self.client.send_json(request).await
    }

    /// Club administrators (`GET /clubs/{id}/admins`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn admins(
        &self,
        id: u64,
        pagination: &Pagination,
    ) -> Result<Vec<SummaryAthlete>, ApiError> {
        let request = self
            .client
            .get(&format!("/clubs/{id}/admins"))
            .query(pagination);
        self.client.send_json(request).await
    }
}
