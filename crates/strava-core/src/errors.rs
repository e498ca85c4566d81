// ABOUTME: Error type for parsing Strava vocabulary tokens from strings
// ABOUTME: Shared by every FromStr implementation in the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// A string did not match any token of a fixed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} token: '{token}'")]
pub struct ParseVocabularyError {
    /// Name of the vocabulary being parsed (e.g. "scope")
    pub vocabulary: &'static str,
    /// The rejected input
    pub token: String,
}

impl ParseVocabularyError {
    /// Create a new parse error for the given vocabulary
    #[must_use]
    pub fn new(vocabulary: &'static str, token: &str) -> Self {
        Self {
            vocabulary,
            token: token.to_owned(),
        }
    }
}
