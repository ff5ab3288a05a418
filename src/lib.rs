//! # Jrep - Jira Report
//!
//! A command-line utility for extracting issues and worklogs from a
//! Jira-style tracker and generating billing and timesheet reports.
//!
//! ## Features
//!
//! - **Issue Extraction**: Paginated JQL search with opaque continuation tokens
//! - **Worklog Retrieval**: Per-issue worklog fetch with rich-text comment flattening
//! - **Exact Billing Math**: Decimal-exact task cost and hour totals, no float drift
//! - **Daily Aggregation**: Calendar-gap-filled effort timesheet
//! - **Report Output**: HTML document report, XLSX/CSV timesheet
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jrep::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
