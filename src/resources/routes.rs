// ABOUTME: Route facade: route details, GPX/TCX export, and route streams
// ABOUTME: Exports return the raw XML document rather than a parsed model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strava_core::models::{Route, StreamsResponse};

use crate::client::Strava;
use crate::errors::ApiError;

/// Route endpoints
#[derive(Debug, Clone, Copy)]
pub struct RoutesApi<'a> {
    client: &'a Strava,
}

impl Strava {
    /// Route endpoints
    #[must_use]
    pub const fn routes(&self) -> RoutesApi<'_> {
        RoutesApi { client: self }
    }
}

impl RoutesApi<'_> {
    /// Get a route (`GET /routes/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(&self, id: u64) -> Result<Route, ApiError> {
        let request = self.client.get(&format!("/routes/{id}"));
        self.client.send_json(request).await
    }

    /// Export a route as a GPX document (`GET /routes/{id}/export_gpx`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn export_gpx(&self, id: u64) -> Result<String, ApiError> {
        let request = self.client.get(&format!("/routes/{id}/export_gpx"));
        self.client.send_text(request).await
    }

    /// Export a route as a TCX document (`GET /routes/{id}/export_tcx`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn export_tcx(&self, id: u64) -> Result<String, ApiError> {
        let request = self.client.get(&format!("/routes/{id}/export_tcx"));
        self.client.send_text(request).await
    }

    /// Get the streams of a route (`GET /routes/{id}/streams`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn streams(&self, id: u64) -> Result<StreamsResponse, ApiError> {
        let request = self.client.get(&format!("/routes/{id}/streams"));
        self.client.send_json(request).await
    }
}
