// ABOUTME: Activity type and sport type vocabularies accepted by the Strava API
// ABOUTME: Serialized with the exact remote spelling and never validated beyond membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseVocabularyError;
use crate::vocabulary::wire_enum;

wire_enum! {
    /// Legacy activity type, superseded remotely by [`SportType`] but still accepted
    pub enum ActivityType("activity type") {
        /// Alpine skiing
        AlpineSki => "AlpineSki",
        /// Backcountry skiing
        BackcountrySki => "BackcountrySki",
        /// Canoeing
        Canoeing => "Canoeing",
        /// `CrossFit`
        Crossfit => "Crossfit",
        /// Electric bike ride
        EBikeRide => "EBikeRide",
        /// Elliptical trainer
        Elliptical => "Elliptical",
        /// Golf
        Golf => "Golf",
        /// Handcycle
        Handcycle => "Handcycle",
        /// Hike
        Hike => "Hike",
        /// Ice skating
        IceSkate => "IceSkate",
        /// Inline skating
        InlineSkate => "InlineSkate",
        /// Kayaking
        Kayaking => "Kayaking",
        /// Kitesurfing
        Kitesurf => "Kitesurf",
        /// Nordic skiing
        NordicSki => "NordicSki",
        /// Ride
        Ride => "Ride",
        /// Rock climbing
        RockClimbing => "RockClimbing",
        /// Roller skiing
        RollerSki => "RollerSki",
        /// Rowing
        Rowing => "Rowing",
        /// Run
        Run => "Run",
        /// Sailing
        Sail => "Sail",
        /// Skateboarding
        Skateboard => "Skateboard",
        /// Snowboarding
        Snowboard => "Snowboard",
        /// Snowshoeing
        Snowshoe => "Snowshoe",
        /// Soccer
        Soccer => "Soccer",
        /// Stair stepper
        StairStepper => "StairStepper",
        /// Stand-up paddling
        StandUpPaddling => "StandUpPaddling",
        /// Surfing
        Surfing => "Surfing",
        /// Swim
        Swim => "Swim",
        /// Velomobile
        Velomobile => "Velomobile",
        /// Indoor ride on a virtual platform
        VirtualRide => "VirtualRide",
        /// Treadmill run on a virtual platform
        VirtualRun => "VirtualRun",
        /// Walk
        Walk => "Walk",
        /// Weight training
        WeightTraining => "WeightTraining",
        /// Wheelchair
        Wheelchair => "Wheelchair",
        /// Windsurfing
        Windsurf => "Windsurf",
        /// Generic workout
        Workout => "Workout",
        /// Yoga
        Yoga => "Yoga",
    }
}

wire_enum! {
    /// Sport type of an activity
    pub enum SportType("sport type") {
        /// Alpine skiing
        AlpineSki => "AlpineSki",
        /// Backcountry skiing
        BackcountrySki => "BackcountrySki",
        /// Badminton
        Badminton => "Badminton",
        /// Canoeing
        Canoeing => "Canoeing",
        /// `CrossFit`
        Crossfit => "Crossfit",
        /// Electric bike ride
        EBikeRide => "EBikeRide",
        /// Elliptical trainer
        Elliptical => "Elliptical",
        /// Electric mountain bike ride
        EMountainBikeRide => "EMountainBikeRide",
        /// Golf
        Golf => "Golf",
        /// Gravel ride
        GravelRide => "GravelRide",
        /// Handcycle
        Handcycle => "Handcycle",
        /// High intensity interval training
        HighIntensityIntervalTraining => "HighIntensityIntervalTraining",
        /// Hike
        Hike => "Hike",
        /// Ice skating
        IceSkate => "IceSkate",
        /// Inline skating
        InlineSkate => "InlineSkate",
        /// Kayaking
        Kayaking => "Kayaking",
        /// Kitesurfing
        Kitesurf => "Kitesurf",
        /// Mountain bike ride
        MountainBikeRide => "MountainBikeRide",
        /// Nordic skiing
        NordicSki => "NordicSki",
        /// Pickleball
        Pickleball => "Pickleball",
        /// Pilates
        Pilates => "Pilates",
        /// Racquetball
        Racquetball => "Racquetball",
        /// Ride
        Ride => "Ride",
        /// Rock climbing
        RockClimbing => "RockClimbing",
        /// Roller skiing
        RollerSki => "RollerSki",
        /// Rowing
        Rowing => "Rowing",
        /// Run
        Run => "Run",
        /// Sailing
        Sail => "Sail",
        /// Skateboarding
        Skateboard => "Skateboard",
        /// Snowboarding
        Snowboard => "Snowboard",
        /// Snowshoeing
        Snowshoe => "Snowshoe",
        /// Soccer
        Soccer => "Soccer",
        /// Squash
        Squash => "Squash",
        /// Stair stepper
        StairStepper => "StairStepper",
        /// Stand-up paddling
        StandUpPaddling => "StandUpPaddling",
        /// Surfing
        Surfing => "Surfing",
        /// Swim
        Swim => "Swim",
        /// Table tennis
        TableTennis => "TableTennis",
        /// Tennis
        Tennis => "Tennis",
        /// Trail run
        TrailRun => "TrailRun",
        /// Velomobile
        Velomobile => "Velomobile",
        /// Indoor ride on a virtual platform
        VirtualRide => "VirtualRide",
        /// Indoor row on a virtual platform
        VirtualRow => "VirtualRow",
        /// Treadmill run on a virtual platform
        VirtualRun => "VirtualRun",
        /// Walk
        Walk => "Walk",
        /// Weight training
        WeightTraining => "WeightTraining",
        /// Wheelchair
        Wheelchair => "Wheelchair",
        /// Windsurfing
        Windsurf => "Windsurf",
        /// Generic workout
        Workout => "Workout",
        /// Yoga
        Yoga => "Yoga",
    }
}
