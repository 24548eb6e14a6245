//! One-shot due-date reminders.
//!
//! A reminder fires at the start of the task's due day and delivers the
//! task's text over a channel; the shell decides how to surface it. Each
//! task holds at most one scheduled timer: rescheduling replaces the old
//! timer and cancellation aborts it, so a deleted or re-dated task never
//! produces a stale notification.

use crate::libs::task::Task;
use chrono::{NaiveDateTime, NaiveTime};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReminderError {
    #[error("task with ID {0} not found")]
    UnknownTask(i64),
    #[error("task has no due date")]
    NoDueDate,
    #[error("due date is not in the future")]
    PastDue,
}

/// Payload delivered when a reminder fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub task_id: i64,
    pub text: String,
    pub due: NaiveDateTime,
}

#[derive(Debug)]
struct ScheduledReminder {
    due: NaiveDateTime,
    timer: JoinHandle<()>,
}

/// Tracks one pending timer per task id.
#[derive(Debug)]
pub struct ReminderScheduler {
    tx: UnboundedSender<Reminder>,
    scheduled: HashMap<i64, ScheduledReminder>,
}

impl ReminderScheduler {
    /// Creates a scheduler and the receiving end for fired reminders.
    pub fn new() -> (Self, UnboundedReceiver<Reminder>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            ReminderScheduler {
                tx,
                scheduled: HashMap::new(),
            },
            rx,
        )
    }

    /// Schedules a one-shot reminder for the task's due day.
    ///
    /// Fails with [`ReminderError::NoDueDate`] when the task has no due
    /// date and [`ReminderError::PastDue`] when the due instant is not in
    /// the future relative to `now`. On success any previously scheduled
    /// timer for the same task is replaced.
    pub fn schedule(&mut self, task: &Task, now: NaiveDateTime) -> Result<NaiveDateTime, ReminderError> {
        let due_date = task.due_date.ok_or(ReminderError::NoDueDate)?;
        let due = due_date.and_time(NaiveTime::MIN);
        let delay = (due - now).to_std().map_err(|_| ReminderError::PastDue)?;
        if delay.is_zero() {
            return Err(ReminderError::PastDue);
        }

        let reminder = Reminder {
            task_id: task.id,
            text: task.text.clone(),
            due,
        };
        let tx = self.tx.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session is shutting down.
            let _ = tx.send(reminder);
        });

        if let Some(stale) = self.scheduled.insert(task.id, ScheduledReminder { due, timer }) {
            stale.timer.abort();
        }
        Ok(due)
    }

    /// Aborts the pending timer for a task, if any. Used when the task is
    /// deleted or its due date changes before firing.
    pub fn cancel(&mut self, task_id: i64) -> bool {
        match self.scheduled.remove(&task_id) {
            Some(entry) => {
                entry.timer.abort();
                true
            }
            None => false,
        }
    }

    /// Due instant of the task's pending reminder, if one is scheduled
    /// and has not fired yet.
    pub fn scheduled_for(&self, task_id: i64) -> Option<NaiveDateTime> {
        self.scheduled
            .get(&task_id)
            .filter(|entry| !entry.timer.is_finished())
            .map(|entry| entry.due)
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        for entry in self.scheduled.values() {
            entry.timer.abort();
        }
    }
}
