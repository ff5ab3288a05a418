//! Report rendering and file output.
//!
//! Two artifacts leave the pipeline: an HTML document report (issue table
//! with billing columns and a total-cost footer) and the daily timesheet,
//! written as XLSX or CSV. Rendering consumes the already-derived decimal
//! and string values; no metric is recomputed here.

use crate::libs::config::Config;
use crate::libs::formatter;
use crate::libs::report::{ReportData, Timesheet};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

/// Inline styles for the HTML report, kept verbatim in the document so the
/// file renders standalone and survives PDF conversion.
const HTML_STYLES: &str = "<style>
    table {
        border-collapse: collapse;
        width: 100%;
        font-family: Arial, sans-serif;
    }
    th, td {
        border: 1px solid #ddd;
        padding: 8px;
        text-align: left;
    }
    th {
        background-color: #f2f2f2;
        font-weight: bold;
    }
    tr:nth-child(even) {
        background-color: #f9f9f9;
    }
    tr:hover {
        background-color: #e6f7ff;
    }
</style>";

/// Output format for the timesheet artifact.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TimesheetFormat {
    /// Excel workbook with formatted headers.
    Xlsx,
    /// Plain CSV for universal compatibility.
    Csv,
}

/// Writes the HTML document report to `path`.
pub fn write_html_report(path: &Path, report: &ReportData, config: &Config) -> Result<()> {
    let cost_header = format!("Task Cost (hours x{}{}/hour)", config.hourly_rate, config.currency);

    let mut rows = String::new();
    for issue in &report.issues {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2} {}</td></tr>\n",
            escape(&issue.project),
            escape(&issue.summary),
            issue.time_spent_display,
            issue.updated,
            issue.task_cost,
            config.currency,
        ));
    }

    let html = format!(
        "{styles}\n\n<h1>Task Report</h1>\n<p>Generated on {generated}</p>\n\n\
         <table>\n<tr><th>Project name</th><th>Summary</th><th>Time Spent</th>\
         <th>Updated</th><th>{cost_header}</th></tr>\n{rows}</table>\n\n\
         <h3>Total cost {total:.2}{currency}</h3>\n",
        styles = HTML_STYLES,
        generated = Local::now().format(formatter::DISPLAY_FORMAT),
        cost_header = escape(&cost_header),
        rows = rows,
        total = report.total_cost,
        currency = config.currency,
    );

    fs::write(path, html)?;
    Ok(())
}

/// Timesheet file writer with the target format and destination path.
pub struct Exporter {
    format: TimesheetFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, generating a timestamped default filename when
    /// no path is given (`jrep_timesheet_20250115_143022.xlsx`).
    pub fn new(format: TimesheetFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("jrep_timesheet_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            TimesheetFormat::Xlsx => "xlsx",
            TimesheetFormat::Csv => "csv",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the timesheet in the configured format: one Date/Hours row per
    /// calendar day (gap days as empty cells) and a final Total row.
    pub fn write_timesheet(&self, sheet: &Timesheet) -> Result<()> {
        match self.format {
            TimesheetFormat::Csv => self.write_csv(sheet),
            TimesheetFormat::Xlsx => self.write_xlsx(sheet),
        }
    }

    fn write_csv(&self, sheet: &Timesheet) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Date", "Hours"])?;
        for day in &sheet.days {
            wtr.write_record([day.date.format("%Y-%m-%d").to_string(), day.hours_display()])?;
        }
        wtr.write_record(["Total".to_string(), format!("{:.2}", sheet.total_hours)])?;

        wtr.flush()?;
        Ok(())
    }

    fn write_xlsx(&self, sheet: &Timesheet) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Hours", &header_format)?;

        let mut row = 1;
        for day in &sheet.days {
            worksheet.write_string(row, 0, day.date.format("%Y-%m-%d").to_string())?;
            worksheet.write_string(row, 1, day.hours_display())?;
            row += 1;
        }
        worksheet.write_string_with_format(row, 0, "Total", &header_format)?;
        worksheet.write_string(row, 1, format!("{:.2}", sheet.total_hours))?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
