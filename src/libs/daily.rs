//! Calendar-day aggregation of worklog entries.
//!
//! Worklog seconds are bucketed by the calendar date of their start
//! timestamp, then the span from the earliest to the latest date is filled
//! out so the result is always a contiguous run of days. Days the input
//! never touched carry an explicit [`DayTotal::Missing`] marker — rendered
//! as an empty cell, which keeps them distinguishable from a day where
//! exactly zero seconds were logged.

use crate::libs::metrics;
use crate::libs::worklog::WorklogEntry;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Logged seconds for one calendar day, or the absence of any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTotal {
    Logged(i64),
    Missing,
}

/// One day of the gap-filled timesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub total: DayTotal,
}

impl DailyBucket {
    /// Two-decimal hour string for spreadsheet cells; empty for gap days.
    pub fn hours_display(&self) -> String {
        match self.total {
            DayTotal::Logged(seconds) => format!("{:.2}", metrics::hours(seconds)),
            DayTotal::Missing => String::new(),
        }
    }
}

/// Buckets worklogs into an ascending, gap-free run of calendar days and
/// returns the grand total in decimal hours.
///
/// The grand total is computed from the summed raw seconds rather than the
/// per-day display strings, so rounding never compounds. Empty input yields
/// an empty bucket list and a zero total — the signal that no timesheet
/// artifact should be produced.
pub fn aggregate(worklogs: &[WorklogEntry]) -> (Vec<DailyBucket>, Decimal) {
    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in worklogs {
        *by_date.entry(entry.started.date()).or_insert(0) += entry.time_spent_seconds;
    }

    let (min_date, max_date) = match (by_date.keys().next(), by_date.keys().next_back()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return (Vec::new(), Decimal::ZERO),
    };

    let mut buckets = Vec::new();
    let mut total_seconds: i64 = 0;
    let mut day = min_date;
    loop {
        let total = match by_date.get(&day) {
            Some(&seconds) => {
                total_seconds += seconds;
                DayTotal::Logged(seconds)
            }
            None => DayTotal::Missing,
        };
        buckets.push(DailyBucket { date: day, total });

        if day == max_date {
            break;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    (buckets, metrics::hours(total_seconds))
}
