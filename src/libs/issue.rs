//! Issue model and paginated issue retrieval.
//!
//! `fetch_all` walks the tracker's search endpoint page by page, collecting
//! every raw issue before normalization. The continuation token from each
//! page is echoed back verbatim on the next request; the walk stops when the
//! server signals the last page or stops handing out a token.
//!
//! Normalization enforces the pipeline's invariants:
//! - issues whose logged time is zero or absent carry no billing signal and
//!   are excluded from the result set entirely;
//! - `updated` timestamps are rendered as naive local-clock strings, with a
//!   malformed value recovered to an empty string for that field only;
//! - a payload missing its id, project, or summary is a shape error.

use crate::api::{RawIssue, Tracker};
use crate::libs::error::FetchError;
use crate::libs::formatter;
use crate::libs::messages::Message;
use crate::msg_debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// A billed issue after normalization.
///
/// `task_cost` and `time_spent_display` are derived, not fetched; they are
/// zero/empty until `metrics::derive` fills them in.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: i64,
    pub project: String,
    pub summary: String,
    /// Naive local-clock display string; empty when the source timestamp
    /// could not be parsed.
    pub updated: String,
    pub time_spent_seconds: i64,
    pub task_cost: Decimal,
    pub time_spent_display: String,
}

/// Fetches every issue matching `jql`, across all pages.
///
/// `predicate`, when supplied, is applied client-side per issue — it covers
/// comparisons the remote query language cannot express (e.g. updated-after
/// on the local clock).
pub async fn fetch_all<T: Tracker>(
    tracker: &T,
    jql: &str,
    predicate: Option<&dyn Fn(&Issue) -> bool>,
) -> Result<Vec<Issue>, FetchError> {
    let mut raw_issues: Vec<RawIssue> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = tracker.search_page(jql, page_token.as_deref()).await?;
        msg_debug!(Message::IssuePageReceived(page.issues.len()));
        raw_issues.extend(page.issues);

        if page.is_last.unwrap_or(false) || page.next_page_token.is_none() {
            break;
        }
        page_token = page.next_page_token;
    }

    let mut issues = Vec::with_capacity(raw_issues.len());
    for raw in raw_issues {
        if let Some(issue) = normalize(raw)? {
            if predicate.map(|keep| keep(&issue)).unwrap_or(true) {
                issues.push(issue);
            }
        }
    }
    Ok(issues)
}

/// Converts a raw payload into an [`Issue`], or `None` when the issue has no
/// logged time.
fn normalize(raw: RawIssue) -> Result<Option<Issue>, FetchError> {
    let seconds = match raw.fields.timespent {
        Some(seconds) if seconds > 0 => seconds,
        _ => return Ok(None),
    };

    let id = raw.id.parse::<i64>().map_err(|_| FetchError::Shape("issue.id"))?;
    let project = raw.fields.project.ok_or(FetchError::Shape("issue.fields.project"))?.name;
    let summary = raw.fields.summary.ok_or(FetchError::Shape("issue.fields.summary"))?;

    let updated = match raw.fields.updated {
        Some(ref raw_ts) => formatter::to_local_display(raw_ts).unwrap_or_else(|| {
            msg_debug!(Message::MalformedTimestamp(raw_ts.clone()));
            String::new()
        }),
        None => String::new(),
    };

    Ok(Some(Issue {
        id,
        project,
        summary,
        updated,
        time_spent_seconds: seconds,
        task_cost: Decimal::ZERO,
        time_spent_display: String::new(),
    }))
}
