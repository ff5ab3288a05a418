use crate::api::Jira;
use crate::libs::{
    config::Config,
    export, metrics,
    report::{self, ReportFilter},
    view::View,
};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Only include issues whose status category is Done")]
    done: bool,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Only include issues updated on or after this date")]
    updated_after: Option<NaiveDate>,
    #[arg(long, value_name = "PATH", help = "Output path for the HTML report (default: report.html)")]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::from_env()?;
    let jira = Jira::new(&config.tracker);
    let filter = ReportFilter {
        only_done: args.done,
        updated_after: args.updated_after,
    };

    let (report, _timesheet) = report::build(&jira, &config, &filter).await?;
    if report.issues.is_empty() {
        msg_warning!(Message::NoIssuesFound);
        return Ok(());
    }

    msg_print!(Message::ReportHeader(Local::now().format("%B %-d, %Y").to_string()), true);
    View::issues(&report, &config.currency)?;
    msg_print!(Message::TotalHours(metrics::total_hours_display(report.total_seconds)));
    msg_print!(Message::TotalCost(format!("{:.2}", report.total_cost), config.currency.clone()));

    let path = args.output.unwrap_or_else(|| PathBuf::from("report.html"));
    export::write_html_report(&path, &report, &config)?;
    msg_success!(Message::ReportSaved(path.display().to_string()));

    Ok(())
}
