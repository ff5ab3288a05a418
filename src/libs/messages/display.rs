//! Display implementation for jrep application messages.
//!
//! Single source of truth for all user-facing message text. Every `Message`
//! variant is converted to its display form here, keeping wording consistent
//! and parameter interpolation type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === FETCH MESSAGES ===
            Message::FetchingIssues(jql) => format!("Fetching issues: {}", jql),
            Message::IssuesFetched(count) => format!("Fetched {} issues with logged time", count),
            Message::IssuePageReceived(count) => format!("Received page with {} issues", count),
            Message::FetchingWorklogs(count) => format!("Fetching worklogs for {} issues", count),
            Message::WorklogsFetched(count) => format!("Fetched {} worklog entries", count),
            Message::NoIssuesFound => "No issues with logged time found".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Task report generated on {}", date),
            Message::ReportSaved(path) => format!("Report saved to {}", path),
            Message::TotalCost(amount, currency) => format!("Total cost: {} {}", amount, currency),
            Message::TotalHours(total) => format!("Total hours: {}", total),

            // === TIMESHEET MESSAGES ===
            Message::TimesheetSaved(path) => format!("Timesheet saved to {}", path),
            Message::TimesheetSkippedEmpty => "No worklogs in range; timesheet not generated".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigMissingVar(name) => format!("Missing required environment variable: {}", name),
            Message::ConfigInvalidRate(value) => format!("HOURLY_RATE is not a valid decimal: {}", value),

            // === ERROR MESSAGES ===
            Message::MalformedTimestamp(raw) => format!("Could not parse timestamp '{}', field left empty", raw),
        };
        write!(f, "{}", text)
    }
}
