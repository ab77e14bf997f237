#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use taskapp::db::db::Db;
    use taskapp::db::tasks::Tasks;
    use taskapp::libs::error::StoreError;
    use taskapp::libs::store::RecordStore;
    use taskapp::libs::task::{Task, TaskQuery};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("tasks.db")).unwrap();
            TaskTestContext {
                temp_dir,
                tasks: Tasks::with_db(db),
            }
        }
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn seed(tasks: &mut Tasks, items: &[Task]) {
        tasks
            .transaction(|writer| {
                for task in items {
                    writer.upsert(task)?;
                }
                Ok(())
            })
            .unwrap();
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_query_all_newest_first(ctx: &mut TaskTestContext) {
        seed(
            &mut ctx.tasks,
            &[
                Task::new(1, "Oldest", "home", at(0)),
                Task::new(2, "Newest", "work", at(20)),
                Task::new(3, "Middle", "work", at(10)),
            ],
        );

        let all = ctx.tasks.query(&TaskQuery::all()).unwrap();
        assert_eq!(ids(&all), vec![2, 3, 1]);

        let oldest_first = ctx.tasks.query(&TaskQuery::all().ascending()).unwrap();
        assert_eq!(ids(&oldest_first), vec![1, 3, 2]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_equal_dates_ordered_by_id(ctx: &mut TaskTestContext) {
        seed(
            &mut ctx.tasks,
            &[Task::new(1, "A", "", at(5)), Task::new(2, "B", "", at(5)), Task::new(3, "C", "", at(5))],
        );

        let all = ctx.tasks.query(&TaskQuery::all()).unwrap();
        assert_eq!(ids(&all), vec![3, 2, 1]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_category_prefix_filter(ctx: &mut TaskTestContext) {
        seed(
            &mut ctx.tasks,
            &[
                Task::new(1, "Report", "work", at(1)),
                Task::new(2, "Balance", "worklife", at(2)),
                Task::new(3, "Groceries", "home", at(3)),
                Task::new(4, "Standup", "Work", at(4)),
            ],
        );

        let work = ctx.tasks.query(&TaskQuery::category("work")).unwrap();
        assert_eq!(ids(&work), vec![2, 1]);

        // Prefix, not substring
        assert!(ctx.tasks.query(&TaskQuery::category("life")).unwrap().is_empty());

        // Case-sensitive
        let capital = ctx.tasks.query(&TaskQuery::category("Work")).unwrap();
        assert_eq!(ids(&capital), vec![4]);

        // Empty prefix matches everything
        let everything = ctx.tasks.query(&TaskQuery::category("")).unwrap();
        assert_eq!(everything.len(), 4);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_prefix_is_not_a_like_pattern(ctx: &mut TaskTestContext) {
        seed(
            &mut ctx.tasks,
            &[Task::new(1, "Literal", "50%_off", at(1)), Task::new(2, "Other", "50 cents", at(2))],
        );

        let matched = ctx.tasks.query(&TaskQuery::category("50%")).unwrap();
        assert_eq!(ids(&matched), vec![1]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_max_id(ctx: &mut TaskTestContext) {
        assert_eq!(ctx.tasks.max_id().unwrap(), None);

        seed(
            &mut ctx.tasks,
            &[Task::new(1, "", "", at(0)), Task::new(2, "", "", at(1)), Task::new(5, "", "", at(2))],
        );
        assert_eq!(ctx.tasks.max_id().unwrap(), Some(5));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_upsert_replaces_existing(ctx: &mut TaskTestContext) {
        seed(&mut ctx.tasks, &[Task::new(7, "Draft", "home", at(0))]);
        seed(&mut ctx.tasks, &[Task::new(7, "Final", "work", at(30))]);

        let task = ctx.tasks.find(7).unwrap().unwrap();
        assert_eq!(task, Task::new(7, "Final", "work", at(30)));
        assert_eq!(ctx.tasks.query(&TaskQuery::all()).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(ctx: &mut TaskTestContext) {
        seed(&mut ctx.tasks, &[Task::new(1, "Keep", "", at(0)), Task::new(2, "Drop", "", at(1))]);

        let removed = ctx.tasks.transaction(|writer| writer.delete(2)).unwrap();
        assert!(removed);
        assert!(ctx.tasks.find(2).unwrap().is_none());

        // Deleting again is not an error
        let removed_again = ctx.tasks.transaction(|writer| writer.delete(2)).unwrap();
        assert!(!removed_again);
        assert_eq!(ids(&ctx.tasks.query(&TaskQuery::all()).unwrap()), vec![1]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_failed_transaction_rolls_back(ctx: &mut TaskTestContext) {
        seed(&mut ctx.tasks, &[Task::new(1, "Survivor", "", at(0))]);

        let result: Result<(), StoreError> = ctx.tasks.transaction(|writer| {
            writer.delete(1)?;
            writer.upsert(&Task::new(2, "Ghost", "", at(1)))?;
            Err(StoreError::TransactionFailed("aborted".to_string()))
        });

        assert!(matches!(result, Err(StoreError::TransactionFailed(_))));
        assert!(ctx.tasks.find(1).unwrap().is_some());
        assert!(ctx.tasks.find(2).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut TaskTestContext) {
        seed(&mut ctx.tasks, &[Task::new(3, "Persisted", "home", at(0))]);

        let reopened = Tasks::with_db(Db::open(ctx.temp_dir.path().join("tasks.db")).unwrap());
        assert_eq!(reopened.find(3).unwrap(), Some(Task::new(3, "Persisted", "home", at(0))));
    }
}
