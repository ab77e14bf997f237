#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Utc};
    use taskapp::libs::messages::Message;
    use taskapp::libs::task::{format_date, EditTarget, Task, TaskQuery, DATE_FORMAT};
    use taskapp::libs::view::{RowAnimation, RowContent, TaskListView, TerminalView};

    #[test]
    fn test_format_date_uses_local_time() {
        let local = Local.with_ymd_and_hms(2024, 11, 5, 7, 9, 0).unwrap();
        assert_eq!(format_date(&local.with_timezone(&Utc)), "2024-11-05 07:09");
        assert_eq!(DATE_FORMAT, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_format_date_drops_seconds() {
        let local = Local.with_ymd_and_hms(2024, 11, 5, 23, 59, 59).unwrap();
        assert_eq!(format_date(&local.with_timezone(&Utc)), "2024-11-05 23:59");
    }

    #[test]
    fn test_query_matches_prefix() {
        let task = Task::new(1, "Report", "worklife", Utc::now());
        assert!(TaskQuery::all().matches(&task));
        assert!(TaskQuery::category("work").matches(&task));
        assert!(TaskQuery::category("").matches(&task));
        assert!(!TaskQuery::category("life").matches(&task));
        assert!(!TaskQuery::category("Work").matches(&task));
    }

    #[test]
    fn test_edit_target() {
        let task = Task::new(9, "Plan", "home", Utc::now());
        let new = EditTarget::New(task.clone());
        let existing = EditTarget::Existing(task.clone());

        assert!(new.is_new());
        assert!(!existing.is_new());
        assert_eq!(existing.task(), &task);
        assert_eq!(new.into_task(), task);
        assert_eq!(task.notification_id(), "9");
    }

    #[test]
    fn test_row_not_found_message() {
        assert_eq!(Message::RowNotFound(3, 0).to_string(), "Row 3 not found: the list is empty.");
        assert_eq!(
            Message::RowNotFound(5, 2).to_string(),
            "Row 5 not found. Choose a row between 1 and 2."
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(Message::TaskRowDeleted(1).to_string(), "Row 1 deleted");
        assert_eq!(
            Message::TaskDeleteFailed("disk I/O error".to_string()).to_string(),
            "Could not delete task, try again (disk I/O error)"
        );
        assert_eq!(
            Message::SearchResultsHeader("work".to_string()).to_string(),
            "Tasks in categories starting with 'work':"
        );
    }

    #[test]
    fn test_row_animation_names() {
        assert_eq!(RowAnimation::Fade.to_string(), "fade");
        assert_eq!(RowAnimation::None.to_string(), "none");
        assert_eq!(serde_json::to_string(&RowAnimation::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_terminal_view_tracks_search() {
        let mut view = TerminalView::muted();
        assert!(!view.is_search_active());

        view.set_search_active(true);
        view.show_rows(&[RowContent {
            title: "Hidden while muted".to_string(),
            date: "2024-01-01 00:00".to_string(),
        }]);
        assert!(view.is_search_active());

        view.set_search_active(false);
        assert!(!view.is_search_active());
    }
}
