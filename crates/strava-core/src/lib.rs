// ABOUTME: Core vocabulary and data models for the Strava API client
// ABOUTME: Foundation crate with scopes, stream keys, sport types, constants, and payload models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strava Core
//!
//! Transport-free types shared by the Strava client. Nothing in this crate
//! performs I/O; it only describes what goes over the wire.
//!
//! ## Modules
//!
//! - **constants**: Default endpoints and environment variable names
//! - **errors**: Parse errors for the fixed vocabularies
//! - **scopes**: OAuth scopes requested during authorization
//! - **streams**: Stream channel keys for activities and segments
//! - **sport**: Activity and sport type vocabularies
//! - **models**: Request and response payloads

/// Default endpoints and environment variable names
pub mod constants;

/// Parse errors for the enumerated vocabularies
pub mod errors;

/// Typed request and response payloads
pub mod models;

/// OAuth scope vocabulary
pub mod scopes;

/// Activity and sport type vocabularies
pub mod sport;

/// Stream channel keys
pub mod streams;

mod vocabulary;

pub use errors::ParseVocabularyError;
pub use scopes::Scope;
pub use sport::{ActivityType, SportType};
pub use streams::{ActivityStream, SegmentStream};
