//! Pending-deletion buffer with a per-task grace window.
//!
//! Basic semantics:
//! - A delete intent removes the task from the collection immediately and
//!   stages a snapshot here with its own deadline
//! - An undo intent before the deadline returns the snapshot for
//!   reinsertion; the store is never contacted
//! - Entries past their deadline are drained by the host and committed to
//!   the store exactly once
//! - The buffer is keyed by task id, so a second delete never drops an
//!   earlier pending one

use crate::libs::task::Task;
use chrono::{Duration, NaiveDateTime};

/// One staged deletion: the task snapshot and when it commits.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub task: Task,
    pub deadline: NaiveDateTime,
}

/// All deletions currently inside their grace window, oldest first.
#[derive(Debug, Default)]
pub struct UndoBuffer {
    pending: Vec<PendingDelete>,
}

impl UndoBuffer {
    pub fn new() -> Self {
        UndoBuffer::default()
    }

    /// Stages a deleted task. Restaging the same id replaces the earlier
    /// snapshot and restarts its countdown.
    pub fn stage(&mut self, task: Task, now: NaiveDateTime, grace: Duration) {
        self.pending.retain(|p| p.task.id != task.id);
        self.pending.push(PendingDelete {
            task,
            deadline: now + grace,
        });
    }

    /// Takes back a staged task if its grace window is still open.
    pub fn undo(&mut self, id: i64, now: NaiveDateTime) -> Option<Task> {
        let index = self
            .pending
            .iter()
            .position(|p| p.task.id == id && now < p.deadline)?;
        Some(self.pending.remove(index).task)
    }

    /// Takes back the most recently staged task still inside its window.
    pub fn undo_last(&mut self, now: NaiveDateTime) -> Option<Task> {
        let index = self.pending.iter().rposition(|p| now < p.deadline)?;
        Some(self.pending.remove(index).task)
    }

    /// Drains every entry whose deadline has passed, for commit.
    pub fn expired(&mut self, now: NaiveDateTime) -> Vec<Task> {
        let (expired, pending): (Vec<PendingDelete>, Vec<PendingDelete>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = pending;
        expired.into_iter().map(|p| p.task).collect()
    }

    /// Drops a staged entry without restoring or committing it.
    pub fn cancel(&mut self, id: i64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.task.id != id);
        self.pending.len() != before
    }

    pub fn contains(&self, id: i64) -> bool {
        self.pending.iter().any(|p| p.task.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
