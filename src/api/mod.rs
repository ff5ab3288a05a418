//! API client modules for the remote tracker.
//!
//! All network access goes through the [`Tracker`] trait so the fetch
//! pipeline never depends on a concrete HTTP client. The production
//! implementation is [`jira::Jira`]; tests substitute in-memory fakes that
//! serve canned pages. The trait is also the seam where a bounded-concurrency
//! worklog fetch could be introduced later without touching the pipeline
//! contract.

use crate::libs::error::FetchError;

pub mod jira;

pub use jira::{Jira, RawIssue, RawWorklog, SearchPage};

/// Read-only transport to the tracker's two endpoints.
///
/// Calls are blocking-sequential from the pipeline's point of view: each
/// search page depends on the previous continuation token, and worklogs are
/// fetched one issue at a time after the full issue set is known.
#[allow(async_fn_in_trait)]
pub trait Tracker {
    /// Fetches one page of the issue search.
    ///
    /// `page_token` is the continuation token from the previous response,
    /// echoed back verbatim; it is opaque to the client and must never be
    /// constructed or interpreted locally.
    async fn search_page(&self, jql: &str, page_token: Option<&str>) -> Result<SearchPage, FetchError>;

    /// Fetches all worklog entries recorded on one issue.
    async fn issue_worklogs(&self, issue_id: i64) -> Result<Vec<RawWorklog>, FetchError>;
}
