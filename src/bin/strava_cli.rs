// ABOUTME: Command-line front end for the Strava client
// ABOUTME: Prints the authorize URL, exchanges codes, deauthorizes, and fetches the athlete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strava command-line client.
//!
//! Credentials come from `STRAVA_CLIENT_ID`, `STRAVA_CLIENT_SECRET`,
//! `STRAVA_REDIRECT_URI` and `STRAVA_SCOPES`. `STRAVA_API_BASE` and
//! `STRAVA_OAUTH_BASE` point the client at another server.
//!
//! Usage:
//! ```bash
//! # Print the page the athlete must visit
//! cargo run --bin strava-cli -- authorize-url
//!
//! # Exchange the code from the redirect for tokens
//! cargo run --bin strava-cli -- exchange 3f2a9c...
//!
//! # Fetch the authenticated athlete with a stored access token
//! cargo run --bin strava-cli -- me --token 8b1c4e...
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use strava_client::logging::LoggingConfig;
use strava_client::{Endpoints, Scope, Strava, StravaConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "strava-cli",
    about = "Strava API v3 command-line client",
    long_about = "Run the OAuth authorization-code flow against Strava and query the authenticated athlete."
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the authorization page URL for the configured application
    AuthorizeUrl,
    /// Exchange an authorization code and print the token response as JSON
    Exchange {
        /// Code from the `code` query parameter of the redirect
        code: String,
    },
    /// Revoke the application's access
    Deauthorize,
    /// Print the authenticated athlete as JSON
    Me {
        /// Access token from a previous exchange
        #[arg(long)]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let endpoints = Endpoints::from_env().context("Invalid endpoint override")?;

    match args.command {
        Command::AuthorizeUrl => {
            let strava = client(endpoints)?;
            println!("{}", strava.authorize_url());
        }
        Command::Exchange { code } => {
            let strava = client(endpoints)?;
            let oauth = strava
                .exchange_token(&code)
                .await
                .context("Failed to exchange authorization code")?;
            print_json(&oauth)?;
        }
        Command::Deauthorize => {
            let strava = client(endpoints)?;
            let response = strava
                .deauthorize()
                .await
                .context("Failed to deauthorize application")?;
            let body = response
                .text()
                .await
                .context("Failed to read deauthorization response")?;
            println!("{body}");
        }
        Command::Me { token } => {
            // Resource calls need only the token
            let config = StravaConfig::from_env().unwrap_or_else(|error| {
                debug!(%error, "Strava credentials not configured");
                StravaConfig::new("", "", "", Vec::<Scope>::new())
            });
            let strava = Strava::builder(config)
                .endpoints(endpoints)
                .token(token)
                .build();
            let athlete = strava
                .athlete()
                .me()
                .await
                .context("Failed to fetch authenticated athlete")?;
            print_json(&athlete)?;
        }
    }

    Ok(())
}

fn client(endpoints: Endpoints) -> Result<Strava> {
    let config = StravaConfig::from_env().context("Strava credentials not configured")?;
    Ok(Strava::builder(config).endpoints(endpoints).build())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
