#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tudu::libs::progress::{completion_percentage, snapshot, Celebration, Streak};
    use tudu::libs::task::{Priority, Task};

    fn task(text: &str, completed: bool) -> Task {
        let mut t = Task::new(text);
        t.completed = completed;
        t
    }

    #[test]
    fn empty_collection_is_zero_percent() {
        assert_eq!(completion_percentage(&[]), 0);
    }

    #[test]
    fn percentage_counts_only_non_archived() {
        let mut archived = task("archived done", true);
        archived.archived = true;
        let tasks = vec![task("done", true), task("pending", false), archived];

        assert_eq!(completion_percentage(&tasks), 50);
    }

    #[test]
    fn all_done_is_full() {
        let tasks = vec![task("a", true), task("b", true)];
        assert_eq!(completion_percentage(&tasks), 100);
    }

    #[test]
    fn snapshot_counts_high_priority() {
        let mut urgent = task("urgent", false);
        urgent.priority = Some(Priority::High);
        let mut relaxed = task("relaxed", true);
        relaxed.priority = Some(Priority::Low);
        let tasks = vec![urgent, relaxed, task("plain", false)];

        let snap = snapshot(&tasks);
        assert_eq!(snap.total, 3);
        assert_eq!(snap.completed, 1);
        assert_eq!(snap.pending, 2);
        assert_eq!(snap.high_priority, 1);
        assert_eq!(snap.percent, 33);
    }

    #[test]
    fn celebration_fires_once_per_completion() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut celebration = Celebration::default();
        let mut streak = Streak::default();

        let all_done = snapshot(&[task("a", true)]);
        assert!(celebration.observe(&all_done, &mut streak, today));
        assert!(!celebration.observe(&all_done, &mut streak, today));

        // Dropping below 100% re-arms the latch.
        let partial = snapshot(&[task("a", true), task("b", false)]);
        assert!(!celebration.observe(&partial, &mut streak, today));
        assert!(celebration.observe(&all_done, &mut streak, today));
    }

    #[test]
    fn celebration_never_fires_on_empty_collection() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut celebration = Celebration::default();
        let mut streak = Streak::default();

        assert!(!celebration.observe(&snapshot(&[]), &mut streak, today));
        assert_eq!(streak.completed_days(), 0);
    }

    #[test]
    fn celebration_marks_the_streak_day() {
        // 2024-01-10 is a Wednesday.
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut celebration = Celebration::default();
        let mut streak = Streak::default();

        celebration.observe(&snapshot(&[task("a", true)]), &mut streak, today);
        assert!(streak.days[2]);
        assert_eq!(streak.completed_days(), 1);
    }
}
