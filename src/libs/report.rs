//! Report pipeline orchestration.
//!
//! Sequences the full extraction run: paginated issue fetch, metric
//! derivation, per-issue worklog fetch, daily aggregation. The output is a
//! pair of plain in-memory structures — [`ReportData`] for the document
//! report and [`Timesheet`] for the daily spreadsheet — ready for the
//! rendering layer. No file I/O happens here, and nothing is rendered when
//! any fetch stage fails.

use crate::api::Tracker;
use crate::libs::config::Config;
use crate::libs::daily::{self, DailyBucket};
use crate::libs::error::FetchError;
use crate::libs::issue::{self, Issue};
use crate::libs::messages::Message;
use crate::libs::metrics;
use crate::libs::worklog;
use crate::msg_debug;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Invocation-level filters applied to the issue fetch.
#[derive(Debug, Default, Clone)]
pub struct ReportFilter {
    /// Restrict the JQL to issues whose status category is Done.
    pub only_done: bool,
    /// Client-side updated-on-or-after cutoff; the tracker's query language
    /// cannot express this comparison against the local clock.
    pub updated_after: Option<NaiveDate>,
}

impl ReportFilter {
    pub fn jql(&self, project_key: &str) -> String {
        let mut jql = format!("project = \"{}\"", project_key);
        if self.only_done {
            jql.push_str(" AND statusCategory = Done");
        }
        jql.push_str(" ORDER BY updated ASC");
        jql
    }
}

/// Enriched issue set plus aggregate billing totals for one run.
#[derive(Debug)]
pub struct ReportData {
    pub issues: Vec<Issue>,
    pub total_seconds: i64,
    pub total_hours: Decimal,
    pub total_cost: Decimal,
}

/// Gap-filled daily effort totals for one run.
#[derive(Debug)]
pub struct Timesheet {
    pub days: Vec<DailyBucket>,
    pub total_hours: Decimal,
}

/// Runs the whole pipeline against one tracker.
pub async fn build<T: Tracker>(tracker: &T, config: &Config, filter: &ReportFilter) -> Result<(ReportData, Timesheet), FetchError> {
    let jql = filter.jql(&config.project_key);
    msg_debug!(Message::FetchingIssues(jql.clone()));

    let issues = match filter.updated_after {
        Some(after) => {
            let keep = move |issue: &Issue| updated_on_or_after(issue, after);
            issue::fetch_all(tracker, &jql, Some(&keep)).await?
        }
        None => issue::fetch_all(tracker, &jql, None).await?,
    };

    let (issues, total_hours) = metrics::derive(issues, config.hourly_rate);
    let total_seconds = issues.iter().map(|issue| issue.time_spent_seconds).sum();
    let total_cost = issues.iter().map(|issue| issue.task_cost).sum();
    msg_debug!(Message::IssuesFetched(issues.len()));

    msg_debug!(Message::FetchingWorklogs(issues.len()));
    let worklogs = worklog::fetch_for_issues(tracker, &issues).await?;
    msg_debug!(Message::WorklogsFetched(worklogs.len()));

    let (days, sheet_total) = daily::aggregate(&worklogs);

    Ok((
        ReportData {
            issues,
            total_seconds,
            total_hours,
            total_cost,
        },
        Timesheet {
            days,
            total_hours: sheet_total,
        },
    ))
}

/// Issues whose normalized `updated` failed to parse are excluded: without a
/// date the cutoff cannot be honored.
fn updated_on_or_after(issue: &Issue, after: NaiveDate) -> bool {
    issue
        .updated
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date >= after)
        .unwrap_or(false)
}
