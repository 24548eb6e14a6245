#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::tasks::Tasks;
    use tudu::libs::task::{Category, Priority, Task};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn insert_and_fetch_newest_first(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.insert("alice", &Task::new("first")).unwrap();
        let second = tasks.insert("alice", &Task::new("second")).unwrap();
        assert!(second > first);

        let all = tasks.fetch_all("alice").unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn insert_persists_optional_fields(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut task = Task::new("detailed");
        task.category = Some(Category::Work);
        task.priority = Some(Priority::High);
        task.due_date = Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        task.notes = Some("context".to_string());
        let id = tasks.insert("bob", &task).unwrap();

        let stored = tasks.fetch_one("bob", id).unwrap().unwrap();
        assert_eq!(stored.category, Some(Category::Work));
        assert_eq!(stored.priority, Some(Priority::High));
        assert_eq!(stored.due_date, task.due_date);
        assert_eq!(stored.notes.as_deref(), Some("context"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn update_changes_the_row(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert("carol", &Task::new("before")).unwrap();
        let mut task = tasks.fetch_one("carol", id).unwrap().unwrap();
        task.text = "after".to_string();
        task.completed = true;
        assert!(tasks.update("carol", &task).unwrap());

        let stored = tasks.fetch_one("carol", id).unwrap().unwrap();
        assert_eq!(stored.text, "after");
        assert!(stored.completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn delete_removes_the_task(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert("dave", &Task::new("doomed")).unwrap();
        assert!(tasks.delete("dave", id).unwrap());
        assert!(!tasks.delete("dave", id).unwrap());
        assert!(tasks.fetch_one("dave", id).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn subtasks_keep_insertion_order(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert("erin", &Task::new("parent")).unwrap();
        assert!(tasks.add_subtask("erin", id, "one").unwrap());
        assert!(tasks.add_subtask("erin", id, "two").unwrap());

        let stored = tasks.fetch_one("erin", id).unwrap().unwrap();
        assert_eq!(stored.subtasks.len(), 2);
        assert_eq!(stored.subtasks[0].text, "one");
        assert_eq!(stored.subtasks[1].text, "two");

        let sub_id = stored.subtasks[0].id;
        assert!(tasks.toggle_subtask("erin", id, sub_id).unwrap());
        let stored = tasks.fetch_one("erin", id).unwrap().unwrap();
        assert!(stored.subtasks[0].completed);

        assert!(tasks.delete_subtask("erin", id, sub_id).unwrap());
        let stored = tasks.fetch_one("erin", id).unwrap().unwrap();
        assert_eq!(stored.subtasks.len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn add_subtask_to_missing_task_reports_false(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(!tasks.add_subtask("frank", 9999, "orphan").unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn owners_never_see_each_other(_ctx: &mut StoreTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert("grace", &Task::new("private")).unwrap();
        assert!(tasks.fetch_all("henry").unwrap().iter().all(|t| t.id != id));
        assert!(tasks.fetch_one("henry", id).unwrap().is_none());

        // Cross-owner mutations miss every row.
        let mut task = tasks.fetch_one("grace", id).unwrap().unwrap();
        task.text = "stolen".to_string();
        assert!(!tasks.update("henry", &task).unwrap());
        assert!(!tasks.delete("henry", id).unwrap());
        assert!(!tasks.add_subtask("henry", id, "sneaky").unwrap());

        assert!(tasks.add_subtask("grace", id, "mine").unwrap());
        let sub_id = tasks.fetch_one("grace", id).unwrap().unwrap().subtasks[0].id;
        assert!(!tasks.toggle_subtask("henry", id, sub_id).unwrap());
        assert!(!tasks.delete_subtask("henry", id, sub_id).unwrap());
    }
}
