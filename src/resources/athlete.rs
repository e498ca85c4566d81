// ABOUTME: Athlete facade: profile, activities, clubs, zones, routes and statistics
// ABOUTME: Maps onto /athlete for the authenticated athlete and /athletes/{id} for lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strava_core::models::{
    ActivityListParams, ActivityStats, AthleteZones, DetailedAthlete, Pagination, Route,
    SummaryActivity, SummaryClub,
};
use tracing::warn;

use crate::client::Strava;
use crate::errors::ApiError;

/// Endpoints of the authenticated athlete
#[derive(Debug, Clone, Copy)]
pub struct AthleteApi<'a> {
    client: &'a Strava,
}

impl Strava {
    /// Athlete endpoints
    #[must_use]
    pub const fn athlete(&self) -> AthleteApi<'_> {
        AthleteApi { client: self }
    }
}

impl AthleteApi<'_> {
    /// Get the authenticated athlete (`GET /athlete`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn me(&self) -> Result<DetailedAthlete, ApiError> {
        self.client.send_json(self.client.get("/athlete")).await
    }

    /// Update the authenticated athlete's weight in kilograms (`PUT /athlete`)
    ///
    /// Requires the `profile:write` scope.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn update(&self, weight: f64) -> Result<DetailedAthlete, ApiError> {
        let request = self.client.put("/athlete").query(&[("weight", weight)]);
        self.client.send_json(request).await
    }

    /// List the authenticated athlete's activities (`GET /athlete/activities`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn activities(
        &self,
        params: &ActivityListParams,
    ) -> Result<Vec<SummaryActivity>, ApiError> {
        let request = self.client.get("/athlete/activities").query(params);
        self.client.send_json(request).await
    }

    /// List the clubs the authenticated athlete belongs to (`GET /athlete/clubs`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn clubs(&self, pagination: &Pagination) -> Result<Vec<SummaryClub>, ApiError> {
        let request = self.client.get("/athlete/clubs").query(pagination);
        self.client.send_json(request).await
    }

    /// Get the authenticated athlete's heart rate and power zones (`GET /athlete/zones`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn zones(&self) -> Result<AthleteZones, ApiError> {
        self.client.send_json(self.client.get("/athlete/zones")).await
    }

    /// List an athlete's routes (`GET /athletes/{id}/routes`)
    ///
    /// Not yet verified against the live API.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn routes(&self, id: u64, pagination: &Pagination) -> Result<Vec<Route>, ApiError> {
        warn!(athlete_id = id, "athlete routes listing is unverified against the live API");
        let request = self
            .client
            .get(&format!("/athletes/{id}/routes"))
            .query(pagination);
        self.client.send_json(request).await
    }

    /// Get an athlete's activity totals (`GET /athletes/{id}/stats`)
    ///
    /// Only includes activities visible to everyone.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn stats(&self, id: u64) -> Result<ActivityStats, ApiError> {
        let request = self.client.get(&format!("/athletes/{id}/stats"));
        self.client.send_json(request).await
    }
}
