// ABOUTME: Request middlewares for the resource API pipeline
// ABOUTME: BearerAuth injects the held token; RequestTracing records method, path, status and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use http::Extensions;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Request, Response};
use reqwest_middleware::{Error as MiddlewareError, Middleware, Next, Result as MiddlewareResult};
use tracing::{debug, warn};

/// Bearer token shared between a client and its [`BearerAuth`] middleware
///
/// Reads never block; a store replaces the whole value, so racing writers
/// resolve to whichever store lands last.
pub type TokenSlot = Arc<ArcSwapOption<String>>;

/// Attaches `Authorization: Bearer <token>` while a token is held
///
/// Without a token the request is forwarded unmodified and the remote API
/// decides how to reject it.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: TokenSlot,
}

impl BearerAuth {
    /// Create a middleware reading from the given slot
    #[must_use]
    pub const fn new(token: TokenSlot) -> Self {
        Self { token }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> MiddlewareResult<Response> {
        if let Some(token) = self.token.load_full() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| MiddlewareError::Middleware(err.into()))?;
            value.set_sensitive(true);
            req.headers_mut().insert(AUTHORIZATION, value);
        }

        next.run(req, extensions).await
    }
}

/// Emits one debug event per resource request
///
/// Only method, path, status and latency are recorded; headers are never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracing;

#[async_trait]
impl Middleware for RequestTracing {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> MiddlewareResult<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_owned();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => debug!(
                %method,
                %path,
                status = response.status().as_u16(),
                elapsed_ms,
                "Strava API response"
            ),
            Err(err) => warn!(%method, %path, elapsed_ms, "Strava API request failed: {err}"),
        }

        result
    }
}
