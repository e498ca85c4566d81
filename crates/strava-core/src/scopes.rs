// ABOUTME: OAuth scope vocabulary requested during Strava authorization
// ABOUTME: Scopes only shape the authorize URL; the client never checks them locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseVocabularyError;
use crate::vocabulary::wire_enum;

wire_enum! {
    /// Permission requested from the athlete on the authorization page
    pub enum Scope("scope") {
        /// Public segments, routes, profile data, posts, events, club feeds and leaderboards
        Read => "read",
        /// Private routes, segments and events
        ReadAll => "read_all",
        /// All profile information, regardless of visibility
        ProfileReadAll => "profile:read_all",
        /// Update weight and FTP, star segments
        ProfileWrite => "profile:write",
        /// Activities visible to Everyone and Followers
        ActivityRead => "activity:read",
        /// Activities including Only You visibility and privacy zone data
        ActivityReadAll => "activity:read_all",
        /// Create, edit and upload activities
        ActivityWrite => "activity:write",
    }
}

impl Scope {
    /// Parse a comma-separated scope list such as `read,activity:read_all`
    ///
    /// Blank entries are skipped so trailing commas are tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first token that is not a known scope
    pub fn parse_list(list: &str) -> Result<Vec<Self>, ParseVocabularyError> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_wire_tokens() {
        assert_eq!(Scope::Read.as_str(), "read");
        assert_eq!(Scope::ProfileReadAll.as_str(), "profile:read_all");
        assert_eq!(Scope::ActivityWrite.to_string(), "activity:write");
    }

    #[test]
    fn test_join_preserves_order() {
        let joined = Scope::join(&[Scope::ActivityReadAll, Scope::Read]);
        assert_eq!(joined, "activity:read_all,read");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(Scope::join(&[]), "");
    }

    #[test]
    fn test_from_str_round_trips_every_scope() {
        for scope in Scope::ALL {
            assert_eq!(scope.as_str().parse::<Scope>(), Ok(*scope));
        }
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let err = "activity:delete".parse::<Scope>().unwrap_err();
        assert_eq!(err.vocabulary, "scope");
        assert_eq!(err.token, "activity:delete");
    }

    #[test]
    fn test_parse_list() {
        let scopes = Scope::parse_list("read, activity:read_all,").unwrap();
        assert_eq!(scopes, vec![Scope::Read, Scope::ActivityReadAll]);
        assert!(Scope::parse_list("read,bogus").is_err());
    }

    #[test]
    fn test_serde_uses_wire_token() {
        let json = serde_json::to_string(&Scope::ProfileWrite).unwrap();
        assert_eq!(json, "\"profile:write\"");
    }
}
