pub mod report;
pub mod timesheet;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Generate the task billing report")]
    Report(report::ReportArgs),
    #[command(about = "Generate the daily effort timesheet")]
    Timesheet(timesheet::TimesheetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Report(args) => report::cmd(args).await,
            Commands::Timesheet(args) => timesheet::cmd(args).await,
        }
    }
}
