// ABOUTME: Gear facade for bikes and shoes
// ABOUTME: Gear identifiers are strings such as "b12345"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use strava_core::models::DetailedGear;

use crate::client::Strava;
use crate::errors::ApiError;

/// Gear endpoints
#[derive(Debug, Clone, Copy)]
pub struct GearApi<'a> {
    client: &'a Strava,
}

impl Strava {
    /// Gear endpoints
    #[must_use]
    pub const fn gear(&self) -> GearApi<'_> {
        GearApi { client: self }
    }
}

impl GearApi<'_> {
    /// Get a piece of gear (`GET /gear/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(&self, id: &str) -> Result<DetailedGear, ApiError> {
        let request = self.client.get(&format!("/gear/{id}"));
        self.client.send_json(request).await
    }
}
