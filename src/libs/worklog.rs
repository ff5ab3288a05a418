//! Worklog model and per-issue worklog retrieval.
//!
//! The tracker has no multi-issue worklog query, so entries are fetched one
//! issue at a time, sequentially and in issue order. The first failure
//! aborts the whole batch — the aggregate report is meaningless if any
//! issue's worklogs are missing. The `Tracker` seam leaves room for a
//! bounded-concurrency variant with fail-fast cancellation later, without
//! changing this function's contract.

use crate::api::{RawWorklog, Tracker};
use crate::libs::adf;
use crate::libs::error::FetchError;
use crate::libs::formatter;
use crate::libs::issue::Issue;
use chrono::NaiveDateTime;

/// A single flat worklog record.
///
/// References its issue weakly by id; the entry set is owned by the fetch
/// result, not by the issues.
#[derive(Debug, Clone)]
pub struct WorklogEntry {
    pub id: i64,
    pub issue_id: i64,
    /// Author email, empty when the tracker withholds it.
    pub author: String,
    /// Local-clock start timestamp; its date part drives daily aggregation.
    pub started: NaiveDateTime,
    pub time_spent_seconds: i64,
    /// Comment flattened from the rich-document tree, empty when absent.
    pub comment: String,
}

/// Fetches and normalizes the worklogs of every issue, in issue order.
pub async fn fetch_for_issues<T: Tracker>(tracker: &T, issues: &[Issue]) -> Result<Vec<WorklogEntry>, FetchError> {
    let mut entries = Vec::new();
    for issue in issues {
        for raw in tracker.issue_worklogs(issue.id).await? {
            entries.push(normalize(issue.id, raw)?);
        }
    }
    Ok(entries)
}

fn normalize(issue_id: i64, raw: RawWorklog) -> Result<WorklogEntry, FetchError> {
    let id = raw.id.parse::<i64>().map_err(|_| FetchError::Shape("worklog.id"))?;

    // The start date is load-bearing for aggregation, so unlike the
    // display-only issue timestamp a malformed value is a shape error.
    let started = raw
        .started
        .as_deref()
        .and_then(formatter::to_local)
        .ok_or(FetchError::Shape("worklog.started"))?;

    let seconds = raw
        .time_spent_seconds
        .ok_or(FetchError::Shape("worklog.timeSpentSeconds"))?;

    let author = raw.author.and_then(|a| a.email_address).unwrap_or_default();
    let comment = raw.comment.as_ref().map(adf::extract).unwrap_or_default();

    Ok(WorklogEntry {
        id,
        issue_id,
        author,
        started,
        time_spent_seconds: seconds,
        comment,
    })
}
