use crate::api::Jira;
use crate::libs::{
    config::Config,
    export::{Exporter, TimesheetFormat},
    report::{self, ReportFilter},
    view::View,
};
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TimesheetArgs {
    #[arg(long, value_enum, default_value = "xlsx", help = "Timesheet output format")]
    format: TimesheetFormat,
    #[arg(long, help = "Only include issues whose status category is Done")]
    done: bool,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Only include issues updated on or after this date")]
    updated_after: Option<NaiveDate>,
    #[arg(long, value_name = "PATH", help = "Output path for the timesheet file")]
    output: Option<PathBuf>,
}

pub async fn cmd(args: TimesheetArgs) -> Result<()> {
    let config = Config::from_env()?;
    let jira = Jira::new(&config.tracker);
    let filter = ReportFilter {
        only_done: args.done,
        updated_after: args.updated_after,
    };

    let (_report, timesheet) = report::build(&jira, &config, &filter).await?;
    if timesheet.days.is_empty() {
        msg_warning!(Message::TimesheetSkippedEmpty);
        return Ok(());
    }

    View::timesheet(&timesheet)?;

    let exporter = Exporter::new(args.format, args.output);
    exporter.write_timesheet(&timesheet)?;
    msg_success!(Message::TimesheetSaved(exporter.output_path().display().to_string()));

    Ok(())
}
