#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tudu::libs::task::Task;
    use tudu::libs::undo::UndoBuffer;

    fn task(id: i64) -> Task {
        let mut t = Task::new(&format!("task {}", id));
        t.id = id;
        t
    }

    fn at(seconds: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(12, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    #[test]
    fn undo_inside_window_returns_the_task() {
        let mut buffer = UndoBuffer::new();
        buffer.stage(task(1), at(0), Duration::seconds(5));

        let restored = buffer.undo(1, at(3));
        assert_eq!(restored.map(|t| t.id), Some(1));
        assert!(buffer.is_empty());
    }

    #[test]
    fn undo_after_deadline_is_refused() {
        let mut buffer = UndoBuffer::new();
        buffer.stage(task(1), at(0), Duration::seconds(5));

        assert!(buffer.undo(1, at(5)).is_none());
        // The entry stays staged for the next commit pass.
        assert!(buffer.contains(1));
    }

    #[test]
    fn restaging_replaces_the_earlier_snapshot() {
        let mut buffer = UndoBuffer::new();
        buffer.stage(task(1), at(0), Duration::seconds(5));
        buffer.stage(task(1), at(10), Duration::seconds(5));

        assert_eq!(buffer.len(), 1);
        // The countdown restarted, so an undo at t=12 still succeeds.
        assert!(buffer.undo(1, at(12)).is_some());
    }

    #[test]
    fn expired_drains_only_past_deadline_entries() {
        let mut buffer = UndoBuffer::new();
        buffer.stage(task(1), at(0), Duration::seconds(5));
        buffer.stage(task(2), at(0), Duration::seconds(60));

        let expired = buffer.expired(at(10));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, 1);
        assert!(buffer.contains(2));
    }

    #[test]
    fn undo_last_takes_the_most_recent_staging() {
        let mut buffer = UndoBuffer::new();
        buffer.stage(task(1), at(0), Duration::seconds(60));
        buffer.stage(task(2), at(1), Duration::seconds(60));

        assert_eq!(buffer.undo_last(at(2)).map(|t| t.id), Some(2));
        assert_eq!(buffer.undo_last(at(2)).map(|t| t.id), Some(1));
        assert!(buffer.undo_last(at(2)).is_none());
    }

    #[test]
    fn cancel_drops_without_restoring() {
        let mut buffer = UndoBuffer::new();
        buffer.stage(task(1), at(0), Duration::seconds(5));

        assert!(buffer.cancel(1));
        assert!(!buffer.cancel(1));
        assert!(buffer.expired(at(100)).is_empty());
    }
}
