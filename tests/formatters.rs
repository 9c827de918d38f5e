#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, TimeZone, Utc};
    use worktimer::libs::formatter::{format_date_time_in, format_duration_secs, option_label};
    use worktimer::libs::log::{LogDuration, LogRecord, NewLogRecord};
    use worktimer::libs::task::TaskRef;
    use worktimer::libs::view::{category_options, sort_history, task_options, HistoryOrder, UNCATEGORIZED_LABEL};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_secs(0), "00:00:00");
        assert_eq!(format_duration_secs(59), "00:00:59");
        assert_eq!(format_duration_secs(3_661), "01:01:01");
        assert_eq!(format_duration_secs(90_000), "25:00:00");
        assert_eq!(format_duration_secs(360_000), "100:00:00");
        assert_eq!(format_duration_secs(-5), "00:00:00");
    }

    #[test]
    fn test_duration_serializes_as_clock_text() {
        let json = serde_json::to_string(&LogDuration::from_secs(93_784)).unwrap();
        assert_eq!(json, "\"26:03:04\"");
        assert_eq!(serde_json::from_str::<LogDuration>(&json).unwrap().as_secs(), 93_784);
        assert!(serde_json::from_str::<LogDuration>("\"1:99:00\"").is_err());
    }

    #[test]
    fn test_format_date_time_in_zone() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 0, 30, 5).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date_time_in(&instant, &tokyo), "2025/01/15 09:30:05");
        assert_eq!(format_date_time_in(&instant, &Utc), "2025/01/15 00:30:05");
    }

    #[test]
    fn test_option_label_counts_characters() {
        assert_eq!(option_label("短い", 15), "短い");
        assert_eq!(option_label("あいうえおかきくけこさしすせそた", 15), "あいうえおかきくけこさしすせそ…");
        assert_eq!(option_label(&"a".repeat(23), 23), "a".repeat(23));
    }

    fn log(id: i64, offset_mins: i64) -> LogRecord {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap() + Duration::minutes(offset_mins);
        NewLogRecord::new(start, start, "", "", start).into_record(id)
    }

    #[test]
    fn test_sort_history() {
        let logs = vec![log(1, 10), log(2, 0), log(3, 20)];

        let desc: Vec<i64> = sort_history(logs.clone(), HistoryOrder::Desc).iter().map(|l| l.id).collect();
        assert_eq!(desc, vec![3, 1, 2]);
        let asc: Vec<i64> = sort_history(logs, HistoryOrder::default().toggled()).iter().map(|l| l.id).collect();
        assert_eq!(asc, vec![2, 1, 3]);
    }

    #[test]
    fn test_selector_options() {
        let tasks = vec![TaskRef::new("Short"), TaskRef::new(&"x".repeat(30))];
        let options = task_options(&tasks);
        assert_eq!(options[0].label, "Short");
        assert_eq!(options[1].value, "x".repeat(30));
        assert_eq!(options[1].label, format!("{}…", "x".repeat(23)));

        let options = category_options(&["Dev".to_string()]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, UNCATEGORIZED_LABEL);
        assert_eq!(options[1].value, "Dev");
    }
}
