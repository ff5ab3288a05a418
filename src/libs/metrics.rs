//! Billing and duration metrics over fetched issues.
//!
//! All money and hour-fraction math runs on `rust_decimal::Decimal` so that
//! seconds → hours → currency conversion never picks up binary-float
//! rounding drift. Seconds are converted to decimal before any division.

use crate::libs::issue::Issue;
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3600;

/// Enriches issues with task cost and duration display, and returns the
/// total logged hours across the set.
///
/// `task_cost = seconds / 3600 * hourly_rate`, exact decimal. The total is
/// computed from the summed raw seconds, not from per-issue roundings.
pub fn derive(mut issues: Vec<Issue>, hourly_rate: Decimal) -> (Vec<Issue>, Decimal) {
    let mut total_seconds: i64 = 0;
    for issue in &mut issues {
        total_seconds += issue.time_spent_seconds;
        issue.task_cost = task_cost(Some(issue.time_spent_seconds), hourly_rate);
        issue.time_spent_display = duration(Some(issue.time_spent_seconds));
    }
    (issues, hours(total_seconds))
}

/// Cost of one task at the given hourly rate; absent seconds bill as zero.
pub fn task_cost(seconds: Option<i64>, hourly_rate: Decimal) -> Decimal {
    match seconds {
        Some(seconds) => Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR) * hourly_rate,
        None => Decimal::ZERO,
    }
}

/// Seconds as exact decimal hours.
pub fn hours(seconds: i64) -> Decimal {
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}

/// Human-readable duration, e.g. `"1h 30m"`; absent seconds read `"0h 0m"`.
pub fn duration(seconds: Option<i64>) -> String {
    let seconds = seconds.unwrap_or(0).max(0);
    format!("{}h {}m", seconds / SECONDS_PER_HOUR, (seconds % SECONDS_PER_HOUR) / 60)
}

/// Total-hours footer line, e.g. `"7h 30m (7.50)"`.
pub fn total_hours_display(total_seconds: i64) -> String {
    format!("{} ({:.2})", duration(Some(total_seconds)), hours(total_seconds))
}
