//! Error taxonomy for the tracker fetch pipeline.
//!
//! Three failure classes cross the fetch boundary:
//!
//! - **Transport**: the HTTP request itself failed (connection, timeout,
//!   body decode). Never retried; aborts the run.
//! - **Status**: the tracker answered with a non-success HTTP status.
//!   Surfaced verbatim with the offending URL; aborts the run.
//! - **Shape**: the payload decoded but lacks a field the pipeline needs.
//!   Aborts the current fetch stage.
//!
//! Malformed display-only timestamps are not part of this taxonomy; they are
//! recovered locally to an empty string at the normalization site.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("tracker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("tracker returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("tracker payload missing or malformed field `{0}`")]
    Shape(&'static str),
}
