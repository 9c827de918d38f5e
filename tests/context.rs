#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::Cell;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use worktimer::libs::config::Config;
    use worktimer::libs::context::{AppContext, AssumeYes, Outcome};
    use worktimer::libs::data_storage::DataStorage;
    use worktimer::libs::log::NewLogRecord;
    use worktimer::libs::task::DEFAULT_TASK_NAMES;

    struct AppTestContext {
        temp_dir: TempDir,
        app: AppContext,
    }

    impl AsyncTestContext for AppTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let app = AppContext::open_in(&DataStorage::at(temp_dir.path()), &Config::default()).unwrap();
            app.init().await;
            AppTestContext { temp_dir, app }
        }
    }

    fn decline(_: &str) -> bool {
        false
    }

    async fn add_log(app: &AppContext) -> i64 {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let end = start + Duration::minutes(25);
        app.logs.add(NewLogRecord::new(start, end, "Design", "", end)).await.unwrap()
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_init_seeds_defaults_once(ctx: &mut AppTestContext) {
        assert_eq!(ctx.app.tasks.count().await.unwrap(), DEFAULT_TASK_NAMES.len() as u64);

        ctx.app.tasks.delete(DEFAULT_TASK_NAMES[0]).await.unwrap();
        ctx.app.init().await;
        assert_eq!(ctx.app.tasks.count().await.unwrap(), DEFAULT_TASK_NAMES.len() as u64 - 1);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_declined_log_delete_changes_nothing(ctx: &mut AppTestContext) {
        let id = add_log(&ctx.app).await;

        assert_eq!(ctx.app.delete_log(id, &decline).await.unwrap(), Outcome::Aborted);
        assert!(ctx.app.logs.get(id).await.unwrap().is_some());

        assert_eq!(ctx.app.delete_log(id, &AssumeYes).await.unwrap(), Outcome::Deleted);
        assert_eq!(ctx.app.delete_log(id, &AssumeYes).await.unwrap(), Outcome::NotFound);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_confirmation_prompt_is_shown_once(ctx: &mut AppTestContext) {
        let id = add_log(&ctx.app).await;
        let asked = Cell::new(0);
        let confirm = |prompt: &str| {
            asked.set(asked.get() + 1);
            prompt.contains("Design")
        };

        assert_eq!(ctx.app.delete_log(id, &confirm).await.unwrap(), Outcome::Deleted);
        assert_eq!(asked.get(), 1);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_task_delete_keeps_history(ctx: &mut AppTestContext) {
        let id = add_log(&ctx.app).await;
        ctx.app.tasks.upsert("Design").await.unwrap();

        assert_eq!(ctx.app.delete_task("Design", &decline).await.unwrap(), Outcome::Aborted);
        assert_eq!(ctx.app.delete_task("Design", &AssumeYes).await.unwrap(), Outcome::Deleted);
        assert_eq!(ctx.app.delete_task("Design", &AssumeYes).await.unwrap(), Outcome::NotFound);

        let record = ctx.app.logs.get(id).await.unwrap().unwrap();
        assert_eq!(record.task, "Design");
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_category_remove_needs_confirmation(ctx: &mut AppTestContext) {
        ctx.app.categories.append("Dev").unwrap();

        assert_eq!(ctx.app.remove_category("Dev", &decline).unwrap(), Outcome::Aborted);
        assert_eq!(ctx.app.categories.list(), vec!["Dev"]);

        assert_eq!(ctx.app.remove_category("Dev", &AssumeYes).unwrap(), Outcome::Deleted);
        assert!(ctx.app.categories.list().is_empty());
        assert_eq!(ctx.app.remove_category("Dev", &AssumeYes).unwrap(), Outcome::NotFound);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_database_location_override(ctx: &mut AppTestContext) {
        let db_path = ctx.temp_dir.path().join("elsewhere").join("custom.db");
        let config = Config {
            database: Some(db_path.clone()),
            ..Config::default()
        };

        let app = AppContext::open_in(&DataStorage::at(ctx.temp_dir.path()), &config).unwrap();
        add_log(&app).await;
        app.shutdown().await.unwrap();

        assert!(db_path.exists());
        assert!(ctx.app.logs.get_all().await.unwrap().is_empty());
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_unopenable_database_is_an_error(ctx: &mut AppTestContext) {
        // A directory where the database file should be.
        let config = Config {
            database: Some(ctx.temp_dir.path().to_path_buf()),
            ..Config::default()
        };

        assert!(AppContext::open_in(&DataStorage::at(ctx.temp_dir.path()), &config).is_err());
    }
}
