// ABOUTME: Strava endpoint defaults and environment variable names
// ABOUTME: Centralizes URLs so the client and CLI agree on where requests go
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default remote endpoints
pub mod endpoints {
    /// Resource API base, including the version segment
    pub const API_BASE: &str = "https://www.strava.com/api/v3";

    /// OAuth base; `/authorize`, `/token` and `/deauthorize` hang off it
    pub const OAUTH_BASE: &str = "https://www.strava.com/oauth";

    /// Authorization path under the OAuth base
    pub const AUTHORIZE_PATH: &str = "/authorize";

    /// Token exchange path under the OAuth base
    pub const TOKEN_PATH: &str = "/token";

    /// Deauthorization path under the OAuth base
    pub const DEAUTHORIZE_PATH: &str = "/deauthorize";
}

/// Environment variable names read by `from_env` constructors
pub mod env_vars {
    /// OAuth client ID
    pub const CLIENT_ID: &str = "STRAVA_CLIENT_ID";
    /// OAuth client secret
    pub const CLIENT_SECRET: &str = "STRAVA_CLIENT_SECRET";
    /// OAuth redirect URI
    pub const REDIRECT_URI: &str = "STRAVA_REDIRECT_URI";
    /// Comma-separated scope list
    pub const SCOPES: &str = "STRAVA_SCOPES";
    /// Resource API base override
    pub const API_BASE: &str = "STRAVA_API_BASE";
    /// OAuth base override
    pub const OAUTH_BASE: &str = "STRAVA_OAUTH_BASE";
}

/// OAuth protocol literals
pub mod oauth {
    /// Response type requested from the authorize endpoint
    pub const RESPONSE_TYPE_CODE: &str = "code";

    /// Grant type sent to the token endpoint
    pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

    /// Scope requested when none is configured
    pub const DEFAULT_SCOPES: &str = "read";
}
