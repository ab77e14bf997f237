#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use taskapp::db::db::Db;
    use taskapp::db::notifications::Notifications;
    use taskapp::libs::store::{NotificationRequest, NotificationService};
    use taskapp::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct NotificationTestContext {
        _temp_dir: TempDir,
        notifications: Notifications,
    }

    impl TestContext for NotificationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("reminders.db")).unwrap();
            NotificationTestContext {
                _temp_dir: temp_dir,
                notifications: Notifications::with_db(db),
            }
        }
    }

    fn at(hours: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap() + Duration::hours(hours)
    }

    fn remind(ctx: &mut NotificationTestContext, id: i64, title: &str, fire_at: DateTime<Utc>) {
        let task = Task::new(id, title, "home", at(0));
        ctx.notifications.schedule(&NotificationRequest::for_task(&task, fire_at)).unwrap();
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_schedule_and_list(ctx: &mut NotificationTestContext) {
        remind(ctx, 1, "Call the plumber", at(5));

        let pending = ctx.notifications.list_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "1");
        assert_eq!(pending[0].task_id, 1);
        assert_eq!(pending[0].title, "Call the plumber");
        assert_eq!(pending[0].body, "home");
        assert_eq!(pending[0].fire_at, at(5));
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_schedule_replaces_same_task(ctx: &mut NotificationTestContext) {
        remind(ctx, 4, "Old title", at(1));
        remind(ctx, 4, "New title", at(8));

        let pending = ctx.notifications.list_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "New title");
        assert_eq!(pending[0].fire_at, at(8));
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_list_ordered_by_fire_time(ctx: &mut NotificationTestContext) {
        remind(ctx, 1, "Late", at(10));
        remind(ctx, 2, "Early", at(2));
        remind(ctx, 3, "Middle", at(6));

        let ids: Vec<String> = ctx.notifications.list_pending().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_cancel_pending(ctx: &mut NotificationTestContext) {
        remind(ctx, 1, "Keep", at(1));
        remind(ctx, 2, "Drop", at(2));
        remind(ctx, 3, "Drop too", at(3));

        ctx.notifications.cancel_pending(&["2".to_string(), "3".to_string()]).unwrap();

        let pending = ctx.notifications.list_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "1");
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_cancel_unknown_or_empty_is_noop(ctx: &mut NotificationTestContext) {
        remind(ctx, 1, "Keep", at(1));

        ctx.notifications.cancel_pending(&["99".to_string()]).unwrap();
        ctx.notifications.cancel_pending(&[]).unwrap();

        assert_eq!(ctx.notifications.list_pending().unwrap().len(), 1);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_empty_list(ctx: &mut NotificationTestContext) {
        assert!(ctx.notifications.list_pending().unwrap().is_empty());
    }
}
