#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use worktimer::db::db::Db;
    use worktimer::libs::config::Config;
    use worktimer::libs::context::AppContext;
    use worktimer::libs::data_storage::DataStorage;
    use worktimer::libs::error::Error;
    use worktimer::libs::log::LogDuration;
    use worktimer::libs::timer::{Clock, PresentationTarget, TimerController, TimerEvent, TimerState};

    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn at(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(ManualClock { now: Mutex::new(now) })
        }

        fn set(&self, now: DateTime<Utc>) {
            *self.now.lock().unwrap() = now;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingTarget {
        events: Mutex<Vec<TimerEvent>>,
    }

    impl RecordingTarget {
        fn events(&self) -> Vec<TimerEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl PresentationTarget for RecordingTarget {
        fn on_event(&self, event: &TimerEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    struct TimerTestContext {
        _temp_dir: TempDir,
        app: AppContext,
        clock: Arc<ManualClock>,
        target: Arc<RecordingTarget>,
    }

    impl TimerTestContext {
        fn timer(&self) -> TimerController {
            let target: Arc<dyn PresentationTarget> = self.target.clone();
            self.app.timer(self.clock.clone(), vec![target])
        }

        fn db(&self) -> &Db {
            &self.app.db
        }
    }

    impl AsyncTestContext for TimerTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let app = AppContext::open_in(&DataStorage::at(temp_dir.path()), &Config::default()).unwrap();
            TimerTestContext {
                _temp_dir: temp_dir,
                app,
                clock: ManualClock::at(base()),
                target: Arc::new(RecordingTarget::default()),
            }
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
    }

    async fn rename_table(db: &Db, from: &'static str, to: &'static str) {
        db.call(move |conn| {
            conn.execute(&format!("ALTER TABLE {} RENAME TO {}", from, to), [])?;
            Ok(())
        })
        .await
        .unwrap();
    }

    #[test_context(TimerTestContext)]
    #[tokio::test]
    async fn test_session_is_recorded_on_stop(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();
        timer.start("Design", "").await.unwrap();
        assert!(timer.is_running());

        ctx.clock.set(base() + Duration::minutes(90));
        assert_eq!(timer.elapsed(), Some(LogDuration::from_secs(5_400)));

        let record = timer.stop().await.unwrap();
        assert_eq!(*timer.state(), TimerState::Idle);
        assert_eq!(record.task, "Design");
        assert_eq!(record.category, "");
        assert_eq!(record.start_time, base());
        assert_eq!(record.end_time, base() + Duration::minutes(90));
        assert_eq!(record.duration.to_string(), "01:30:00");

        let all = ctx.app.logs.get_all().await.unwrap();
        assert_eq!(all, vec![record]);
        let tasks = ctx.app.tasks.get_all().await.unwrap();
        assert!(tasks.iter().any(|t| t.name == "Design"));
    }

    #[test_context(TimerTestContext)]
    #[tokio::test]
    async fn test_each_start_begins_a_new_record(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();

        timer.start("A", "").await.unwrap();
        ctx.clock.set(base() + Duration::minutes(10));
        let first = timer.stop().await.unwrap();

        ctx.clock.set(base() + Duration::minutes(30));
        assert!(timer.toggle("A", "Dev").await.unwrap().is_none());
        ctx.clock.set(base() + Duration::minutes(35));
        let second = timer.toggle("ignored", "").await.unwrap().unwrap();

        assert!(second.id > first.id);
        assert_eq!(second.category, "Dev");
        assert_eq!(second.duration.as_secs(), 300);
        assert_eq!(ctx.app.logs.get_all().await.unwrap().len(), 2);
    }

    #[test_context(TimerTestContext)]
    #[tokio::test]
    async fn test_invalid_transitions(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();

        assert!(matches!(timer.stop().await, Err(Error::NoRunningSession)));
        timer.start("A", "").await.unwrap();
        assert!(matches!(timer.start("B", "").await, Err(Error::SessionAlreadyRunning)));

        timer.stop().await.unwrap();
        assert_eq!(ctx.app.logs.get_all().await.unwrap().len(), 1);
    }

    #[test_context(TimerTestContext)]
    #[tokio::test]
    async fn test_clock_stepping_back_yields_empty_interval(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();
        timer.start("A", "").await.unwrap();

        ctx.clock.set(base() - Duration::minutes(5));
        let record = timer.stop().await.unwrap();
        assert_eq!(record.end_time, record.start_time);
        assert_eq!(record.duration.as_secs(), 0);
    }

    #[test_context(TimerTestContext)]
    #[tokio::test]
    async fn test_failed_save_keeps_session_running(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();
        timer.start("A", "").await.unwrap();
        ctx.clock.set(base() + Duration::minutes(1));

        rename_table(ctx.db(), "logs", "logs_away").await;
        assert!(matches!(timer.stop().await, Err(Error::Storage(_))));
        assert!(timer.is_running());

        rename_table(ctx.db(), "logs_away", "logs").await;
        let record = timer.stop().await.unwrap();
        assert_eq!(record.duration.as_secs(), 60);
    }

    #[test_context(TimerTestContext)]
    #[tokio::test]
    async fn test_failed_task_write_keeps_timer_idle(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();

        rename_table(ctx.db(), "tasks", "tasks_away").await;
        assert!(timer.start("A", "").await.is_err());
        assert!(!timer.is_running());
        assert!(ctx.target.events().is_empty());
    }

    #[test_context(TimerTestContext)]
    #[tokio::test(start_paused = true)]
    async fn test_targets_see_start_ticks_and_stop(ctx: &mut TimerTestContext) {
        let mut timer = ctx.timer();
        timer.start("Design", "Dev").await.unwrap();

        ctx.clock.set(base() + Duration::seconds(2));
        // Paused runtime: the sleep auto-advances past the first one-second tick.
        tokio::time::sleep(std::time::Duration::from_millis(1_500)).await;
        let record = timer.stop().await.unwrap();

        let events = ctx.target.events();
        assert_eq!(
            events.first(),
            Some(&TimerEvent::Started {
                task: "Design".to_string(),
                category: "Dev".to_string(),
                started_at: base(),
            })
        );
        assert!(events.contains(&TimerEvent::Tick(LogDuration::from_secs(2))));
        assert_eq!(events.last(), Some(&TimerEvent::Stopped(record)));
    }
}
