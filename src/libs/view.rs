use crate::libs::report::{ReportData, Timesheet};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn issues(report: &ReportData, currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "SUMMARY", "UPDATED", "TIME SPENT", "TASK COST"]);
        for issue in &report.issues {
            table.add_row(row![
                issue.id,
                issue.project,
                issue.summary,
                issue.updated,
                issue.time_spent_display,
                format!("{:.2} {}", issue.task_cost, currency)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn timesheet(sheet: &Timesheet) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "HOURS"]);
        for day in &sheet.days {
            table.add_row(row![day.date.format("%Y-%m-%d"), day.hours_display()]);
        }
        table.add_row(row!["Total", format!("{:.2}", sheet.total_hours)]);
        table.printstd();

        Ok(())
    }
}
