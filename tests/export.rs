#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use jrep::libs::config::{Config, TrackerConfig};
    use jrep::libs::daily::{DailyBucket, DayTotal};
    use jrep::libs::export::{write_html_report, Exporter, TimesheetFormat};
    use jrep::libs::issue::Issue;
    use jrep::libs::report::{ReportData, Timesheet};
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn config() -> Config {
        Config {
            tracker: TrackerConfig {
                api_url: "https://example.atlassian.net".to_string(),
                email: "dev@example.com".to_string(),
                api_token: "token".to_string(),
            },
            project_key: "AP".to_string(),
            hourly_rate: dec("40.00"),
            currency: "EUR".to_string(),
        }
    }

    fn day(year: i32, month: u32, d: u32, total: DayTotal) -> DailyBucket {
        DailyBucket {
            date: NaiveDate::from_ymd_opt(year, month, d).unwrap(),
            total,
        }
    }

    fn timesheet() -> Timesheet {
        Timesheet {
            days: vec![
                day(2024, 1, 1, DayTotal::Logged(3600)),
                day(2024, 1, 2, DayTotal::Missing),
                day(2024, 1, 3, DayTotal::Logged(7200)),
            ],
            total_hours: dec("3.00"),
        }
    }

    #[test]
    fn test_csv_timesheet_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.csv");

        let exporter = Exporter::new(TimesheetFormat::Csv, Some(path.clone()));
        exporter.write_timesheet(&timesheet()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Date,Hours");
        assert_eq!(lines[1], "2024-01-01,1.00");
        // Gap day carries an empty cell, not a zero.
        assert_eq!(lines[2], "2024-01-02,");
        assert_eq!(lines[3], "2024-01-03,2.00");
        assert_eq!(lines[4], "Total,3.00");
    }

    #[test]
    fn test_xlsx_timesheet_is_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.xlsx");

        let exporter = Exporter::new(TimesheetFormat::Xlsx, Some(path.clone()));
        exporter.write_timesheet(&timesheet()).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_default_filename_carries_format_extension() {
        let csv = Exporter::new(TimesheetFormat::Csv, None);
        let name = csv.output_path().to_string_lossy().into_owned();
        assert!(name.starts_with("jrep_timesheet_"));
        assert!(name.ends_with(".csv"));

        let xlsx = Exporter::new(TimesheetFormat::Xlsx, None);
        assert!(xlsx.output_path().to_string_lossy().ends_with(".xlsx"));
    }

    #[test]
    fn test_explicit_path_is_kept_verbatim() {
        let exporter = Exporter::new(TimesheetFormat::Csv, Some("out/my_sheet.csv".into()));
        assert_eq!(exporter.output_path().to_string_lossy(), "out/my_sheet.csv");
    }

    #[test]
    fn test_html_report_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");

        let report = ReportData {
            issues: vec![Issue {
                id: 1,
                project: "Apollo".to_string(),
                summary: "Fix <script> & co".to_string(),
                updated: "2024-05-01 10:00:00".to_string(),
                time_spent_seconds: 5400,
                task_cost: dec("60.00"),
                time_spent_display: "1h 30m".to_string(),
            }],
            total_seconds: 5400,
            total_hours: dec("1.50"),
            total_cost: dec("60.00"),
        };

        write_html_report(&path, &report, &config()).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<h1>Task Report</h1>"));
        assert!(html.contains("Task Cost (hours x40.00EUR/hour)"));
        assert!(html.contains("<td>Apollo</td>"));
        assert!(html.contains("Fix &lt;script&gt; &amp; co"));
        assert!(html.contains("<td>1h 30m</td>"));
        assert!(html.contains("<td>60.00 EUR</td>"));
        assert!(html.contains("<h3>Total cost 60.00EUR</h3>"));
    }

    #[test]
    fn test_html_report_empty_issue_set_still_renders() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");

        let report = ReportData {
            issues: Vec::new(),
            total_seconds: 0,
            total_hours: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        };

        write_html_report(&path, &report, &config()).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<h1>Task Report</h1>"));
        assert!(html.contains("<h3>Total cost 0.00EUR</h3>"));
    }
}
