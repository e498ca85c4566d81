// ABOUTME: Club payloads: club profiles, members, admins and club activity feed entries
// ABOUTME: Returned by the /clubs/{id} family of endpoints and /athlete/clubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Summary representation of a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryClub {
    /// The club's unique identifier
    pub id: u64,
    /// Resource state, indicates level of detail
    pub resource_state: Option<u8>,
    /// The club's name
    pub name: String,
    /// URL to a 60x60 pixel profile picture
    pub profile_medium: Option<String>,
    /// URL to a ~1185x580 pixel cover photo
    pub cover_photo: Option<String>,
    /// URL to a ~360x176 pixel cover photo
    pub cover_photo_small: Option<String>,
    /// Sport type of the club
    pub sport_type: Option<String>,
    /// The club's city
    pub city: Option<String>,
    /// The club's state or geographical region
    pub state: Option<String>,
    /// The club's country
    pub country: Option<String>,
    /// Whether the club is private
    pub private: Option<bool>,
    /// The club's member count
    pub member_count: Option<u32>,
    /// Whether the club is featured or not
    pub featured: Option<bool>,
    /// Whether the club is verified or not
    pub verified: Option<bool>,
    /// The club's vanity URL
    pub url: Option<String>,
}

/// Detailed representation of a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedClub {
    /// Fields shared with the summary representation
    #[serde(flatten)]
    pub summary: SummaryClub,
    /// The membership status of the logged-in athlete, `member` or `pending`
    pub membership: Option<String>,
    /// Whether the currently logged-in athlete is an administrator of this club
    pub admin: Option<bool>,
    /// Whether the currently logged-in athlete is the owner of this club
    pub owner: Option<bool>,
    /// The number of athletes in the club that the logged-in athlete follows
    pub following_count: Option<u32>,
}

/// Entry of a club's activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubActivity {
    /// The athlete, with only first name and last initial
    pub athlete: Option<ClubActivityAthlete>,
    /// The name of the activity
    pub name: String,
    /// The activity's distance, in meters
    pub distance: Option<f64>,
    /// The activity's moving time, in seconds
    pub moving_time: Option<u64>,
    /// The activity's elapsed time, in seconds
    pub elapsed_time: Option<u64>,
    /// The activity's total elevation gain
    pub total_elevation_gain: Option<f64>,
    /// Legacy activity type
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Sport type
    pub sport_type: Option<String>,
}

/// Abbreviated athlete shown in club feeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubActivityAthlete {
    /// The athlete's first name
    pub firstname: Option<String>,
    /// The athlete's last initial
    pub lastname: Option<String>,
}

/// Member or admin of a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubAthlete {
    /// Resource state, indicates level of detail
    pub resource_state: Option<u8>,
    /// The athlete's first name
    pub firstname: Option<String>,
    /// The athlete's last initial
    pub lastname: Option<String>,
    /// The athlete's member status
    pub member: Option<String>,
    /// Whether the athlete is a club admin
    pub admin: Option<bool>,
    /// Whether the athlete is club owner
    pub owner: Option<bool>,
}
