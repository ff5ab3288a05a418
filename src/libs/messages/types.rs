#[derive(Debug, Clone)]
pub enum Message {
    // === FETCH MESSAGES ===
    FetchingIssues(String),        // jql
    IssuesFetched(usize),          // count after filtering
    IssuePageReceived(usize),      // issues on page
    FetchingWorklogs(usize),       // issue count
    WorklogsFetched(usize),        // worklog count
    NoIssuesFound,

    // === REPORT MESSAGES ===
    ReportHeader(String), // date
    ReportSaved(String),  // path
    TotalCost(String, String),  // amount, currency
    TotalHours(String),         // formatted total

    // === TIMESHEET MESSAGES ===
    TimesheetSaved(String), // path
    TimesheetSkippedEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigMissingVar(String),
    ConfigInvalidRate(String),

    // === ERROR MESSAGES ===
    MalformedTimestamp(String),
}
