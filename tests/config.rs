#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worktimer::libs::config::{Config, CONFIG_FILE_NAME};
    use worktimer::libs::export::DEFAULT_CSV_COLUMNS;
    use worktimer::libs::view::HistoryOrder;

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext {
                path: temp_dir.path().join(CONFIG_FILE_NAME),
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.csv_columns, DEFAULT_CSV_COLUMNS);
        assert_eq!(config.history_order, HistoryOrder::Desc);
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            csv_columns: "内容,経過時間".to_string(),
            history_order: HistoryOrder::Asc,
            database: Some(PathBuf::from("/tmp/timer.db")),
        };
        config.save_to(&ctx.path).unwrap();

        assert_eq!(Config::read_from(&ctx.path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_keys_use_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "history_order": "asc" }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.history_order, HistoryOrder::Asc);
        assert_eq!(config.csv_columns, DEFAULT_CSV_COLUMNS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "history_order = asc").unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }
}
