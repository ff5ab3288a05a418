pub mod adf;
pub mod config;
pub mod daily;
pub mod error;
pub mod export;
pub mod formatter;
pub mod issue;
pub mod messages;
pub mod metrics;
pub mod report;
pub mod view;
pub mod worklog;
