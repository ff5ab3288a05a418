#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use jrep::libs::daily::{aggregate, DayTotal};
    use jrep::libs::worklog::WorklogEntry;
    use rust_decimal::Decimal;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn entry(id: i64, started: NaiveDateTime, seconds: i64) -> WorklogEntry {
        WorklogEntry {
            id,
            issue_id: 100,
            author: "dev@example.com".to_string(),
            started,
            time_spent_seconds: seconds,
            comment: String::new(),
        }
    }

    #[test]
    fn test_gap_days_get_explicit_marker() {
        let worklogs = vec![entry(1, at(2024, 1, 1, 9), 3600), entry(2, at(2024, 1, 3, 9), 7200)];
        let (buckets, total) = aggregate(&worklogs);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].total, DayTotal::Logged(3600));
        assert_eq!(buckets[1].total, DayTotal::Missing);
        assert_eq!(buckets[2].total, DayTotal::Logged(7200));
        assert_eq!(total, "3.00".parse::<Decimal>().unwrap());

        assert_eq!(buckets[0].hours_display(), "1.00");
        assert_eq!(buckets[1].hours_display(), "");
        assert_eq!(buckets[2].hours_display(), "2.00");
    }

    #[test]
    fn test_bucket_count_spans_full_range() {
        let worklogs = vec![entry(1, at(2024, 1, 1, 9), 600), entry(2, at(2024, 1, 10, 9), 600)];
        let (buckets, _) = aggregate(&worklogs);

        // (max - min).days + 1, regardless of gaps
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(buckets[9].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn test_buckets_ascend_and_are_contiguous() {
        let worklogs = vec![
            entry(1, at(2024, 2, 27, 9), 600),
            entry(2, at(2024, 3, 2, 9), 600),
            entry(3, at(2024, 2, 29, 9), 600), // leap day
        ];
        let (buckets, _) = aggregate(&worklogs);

        assert_eq!(buckets.len(), 5);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }

    #[test]
    fn test_same_day_entries_are_summed() {
        let worklogs = vec![
            entry(1, at(2024, 1, 5, 9), 1800),
            entry(2, at(2024, 1, 5, 14), 1800),
            entry(3, at(2024, 1, 5, 16), 3600),
        ];
        let (buckets, total) = aggregate(&worklogs);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total, DayTotal::Logged(7200));
        assert_eq!(total, "2.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_time_of_day_is_dropped() {
        // Entries near midnight on the same date land in the same bucket.
        let late = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(23, 59, 59).unwrap();
        let worklogs = vec![entry(1, at(2024, 1, 5, 0), 600), entry(2, late, 600)];
        let (buckets, _) = aggregate(&worklogs);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total, DayTotal::Logged(1200));
    }

    #[test]
    fn test_logged_zero_is_distinct_from_missing() {
        let worklogs = vec![entry(1, at(2024, 1, 1, 9), 0), entry(2, at(2024, 1, 3, 9), 3600)];
        let (buckets, _) = aggregate(&worklogs);

        assert_eq!(buckets[0].total, DayTotal::Logged(0));
        assert_eq!(buckets[0].hours_display(), "0.00");
        assert_eq!(buckets[1].total, DayTotal::Missing);
        assert_eq!(buckets[1].hours_display(), "");
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let (buckets, total) = aggregate(&[]);
        assert!(buckets.is_empty());
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_bucket_seconds_round_trip() {
        let worklogs = vec![
            entry(1, at(2024, 1, 1, 9), 3600),
            entry(2, at(2024, 1, 1, 13), 1234),
            entry(3, at(2024, 1, 4, 9), 5678),
            entry(4, at(2024, 1, 7, 9), 90),
        ];
        let input_sum: i64 = worklogs.iter().map(|w| w.time_spent_seconds).sum();

        let (buckets, _) = aggregate(&worklogs);
        let bucket_sum: i64 = buckets
            .iter()
            .map(|b| match b.total {
                DayTotal::Logged(seconds) => seconds,
                DayTotal::Missing => 0,
            })
            .sum();

        assert_eq!(bucket_sum, input_sum);
    }
}
