//! Configuration loading for the jrep application.
//!
//! Connection parameters, the billed project, and the billing rate all come
//! from the environment (optionally seeded from a `.env` file), matching the
//! tracker's static-credential model. The loaded values travel as an explicit
//! `Config` value object passed into each component, never as ambient global
//! state, so every stage of the pipeline stays testable with fixed inputs.
//!
//! ## Required variables
//!
//! - `JIRA_URL` — tracker base URL, e.g. `https://your-domain.atlassian.net`
//! - `EMAIL` — account email for basic auth
//! - `API_TOKEN` — API token paired with the email
//! - `PROJECT_KEY` — key of the billed project
//! - `HOURLY_RATE` — decimal billing rate, e.g. `40.00`
//! - `CURRENCY` — currency label appended to cost figures, e.g. `EUR`

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rust_decimal::Decimal;
use std::env;

/// Connection parameters for the remote tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Base URL of the tracker instance.
    pub api_url: String,
    /// Account email used for basic authentication.
    pub email: String,
    /// Static API token paired with the email.
    pub api_token: String,
}

/// Complete run configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub tracker: TrackerConfig,
    /// Key of the project whose issues are billed.
    pub project_key: String,
    /// Hourly billing rate in exact decimal form.
    pub hourly_rate: Decimal,
    /// Currency label for rendered cost values.
    pub currency: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Every required variable must be set; the first missing one aborts
    /// with a message naming it.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let rate_raw = require("HOURLY_RATE")?;
        let hourly_rate = rate_raw
            .parse::<Decimal>()
            .map_err(|_| msg_error_anyhow!(Message::ConfigInvalidRate(rate_raw.clone())))?;

        Ok(Self {
            tracker: TrackerConfig {
                api_url: require("JIRA_URL")?,
                email: require("EMAIL")?,
                api_token: require("API_TOKEN")?,
            },
            project_key: require("PROJECT_KEY")?,
            hourly_rate,
            currency: require("CURRENCY")?,
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| msg_error_anyhow!(Message::ConfigMissingVar(name.to_string())))
}
