//! View-model host: the in-memory task collection and its intents.
//!
//! One session per signed-in user. All intents mutate the local
//! collection optimistically, then round-trip through the gateway:
//!
//! - on success the server's copy of the task replaces the local one
//! - on `NotFound` the task vanished elsewhere, so the stale local entry
//!   is dropped
//! - on any other failure the pre-mutation snapshot is restored and the
//!   error is surfaced for a retry affordance
//!
//! Deletion is the exception: it never contacts the gateway up front.
//! The task moves into the undo buffer and is only committed to the
//! store when its grace window expires without an undo intent
//! ([`Session::reap_expired`] drives that, called from the host loop).
//!
//! Intents for a single task reach the store in the order they were
//! issued here; intents for different tasks target disjoint records and
//! may complete in any order.

use crate::api::{Gateway, GatewayError, Result, TaskPatch};
use crate::libs::progress::{self, Celebration, ProgressSnapshot, Streak};
use crate::libs::reminder::{Reminder, ReminderError, ReminderScheduler};
use crate::libs::selection::Selection;
use crate::libs::task::Task;
use crate::libs::undo::UndoBuffer;
use crate::libs::viewmodel::{DerivedCache, ViewOutput};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

pub struct Session<G: Gateway> {
    gateway: G,
    tasks: Vec<Task>,
    revision: u64,
    undo: UndoBuffer,
    grace: Duration,
    reminders: ReminderScheduler,
    cache: DerivedCache,
    celebration: Celebration,
    streak: Streak,
    next_provisional: i64,
}

impl<G: Gateway> Session<G> {
    /// Builds a session and the channel on which reminders fire.
    pub fn new(gateway: G, grace_seconds: u64) -> (Self, UnboundedReceiver<Reminder>) {
        let (reminders, fired) = ReminderScheduler::new();
        let session = Session {
            gateway,
            tasks: Vec::new(),
            revision: 0,
            undo: UndoBuffer::new(),
            grace: Duration::seconds(grace_seconds as i64),
            reminders,
            cache: DerivedCache::new(),
            celebration: Celebration::default(),
            streak: Streak::default(),
            next_provisional: -1,
        };
        (session, fired)
    }

    /// Replaces the local collection with the gateway's current state.
    pub async fn load(&mut self) -> Result<()> {
        self.tasks = self.gateway.list_tasks().await?;
        self.bump();
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Derived output for the given selection, memoized on the
    /// (revision, today, selection) triple.
    pub fn view(&mut self, selection: &Selection, today: NaiveDate) -> &ViewOutput {
        self.cache.derive(&self.tasks, self.revision, selection, today)
    }

    /// Progress aggregates over the raw collection.
    pub fn progress(&self) -> ProgressSnapshot {
        progress::snapshot(&self.tasks)
    }

    pub fn streak(&self) -> &Streak {
        &self.streak
    }

    /// Checks the celebration latch; `true` exactly once per transition
    /// to full completion.
    pub fn celebrate(&mut self, today: NaiveDate) -> bool {
        let snap = self.progress();
        self.celebration.observe(&snap, &mut self.streak, today)
    }

    /// Adds a task. The provisional entry appears at the head of the
    /// collection immediately and is swapped for the server's copy once
    /// the round trip confirms.
    pub async fn add(&mut self, text: &str) -> Result<Task> {
        let text = crate::api::validate_text(text)?;

        let mut provisional = Task::new(&text);
        provisional.id = self.next_provisional;
        self.next_provisional -= 1;
        let provisional_id = provisional.id;
        self.tasks.insert(0, provisional);
        self.bump();

        match self.gateway.create_task(&text).await {
            Ok(created) => {
                debug!(id = created.id, "task created");
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == provisional_id) {
                    *slot = created.clone();
                }
                self.bump();
                Ok(created)
            }
            Err(err) => {
                self.tasks.retain(|t| t.id != provisional_id);
                self.bump();
                Err(err)
            }
        }
    }

    pub async fn toggle_completed(&mut self, id: i64) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| t.completed = !t.completed)?;
        let result = self.gateway.toggle_completed(id).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn toggle_important(&mut self, id: i64) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| t.important = !t.important)?;
        let result = self.gateway.toggle_important(id).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn toggle_my_day(&mut self, id: i64) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| t.my_day = !t.my_day)?;
        let result = self.gateway.toggle_my_day(id).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn toggle_archived(&mut self, id: i64) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| t.archived = !t.archived)?;
        let result = self.gateway.toggle_archived(id).await;
        self.reconcile(id, snapshot, result)
    }

    /// Sets or clears the due date. Any pending reminder is stale after
    /// this, so it is cancelled.
    pub async fn set_due_date(&mut self, id: i64, due: Option<NaiveDate>) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| t.due_date = due)?;
        self.reminders.cancel(id);
        let result = self.gateway.set_due_date(id, due).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn update(&mut self, id: i64, patch: TaskPatch) -> Result<Task> {
        if let Some(text) = &patch.text {
            crate::api::validate_text(text)?;
        }
        let snapshot = self.mutate_local(id, |t| {
            if let Some(text) = &patch.text {
                t.text = text.trim().to_string();
            }
            if let Some(notes) = &patch.notes {
                t.notes = Some(notes.clone());
            }
            if let Some(category) = patch.category {
                t.category = Some(category);
            }
            if let Some(priority) = patch.priority {
                t.priority = Some(priority);
            }
        })?;
        let result = self.gateway.update_task(id, &patch).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn add_subtask(&mut self, id: i64, text: &str) -> Result<Task> {
        let trimmed = crate::api::validate_text(text)?;
        let snapshot = self.mutate_local(id, |t| {
            t.subtasks.push(crate::libs::task::Subtask {
                id: 0,
                text: trimmed.clone(),
                completed: false,
            });
        })?;
        let result = self.gateway.add_subtask(id, &trimmed).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn toggle_subtask(&mut self, id: i64, subtask_id: i64) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| {
            if let Some(sub) = t.subtasks.iter_mut().find(|s| s.id == subtask_id) {
                sub.completed = !sub.completed;
            }
        })?;
        let result = self.gateway.toggle_subtask(id, subtask_id).await;
        self.reconcile(id, snapshot, result)
    }

    pub async fn delete_subtask(&mut self, id: i64, subtask_id: i64) -> Result<Task> {
        let snapshot = self.mutate_local(id, |t| t.subtasks.retain(|s| s.id != subtask_id))?;
        let result = self.gateway.delete_subtask(id, subtask_id).await;
        self.reconcile(id, snapshot, result)
    }

    /// Stages a deletion: the task leaves the collection now and commits
    /// to the store only when its grace window expires.
    pub fn delete(&mut self, id: i64, now: NaiveDateTime) -> Result<()> {
        let index = self.tasks.iter().position(|t| t.id == id).ok_or(GatewayError::NotFound(id))?;
        let task = self.tasks.remove(index);
        debug!(id, grace = self.grace.num_seconds(), "delete staged");
        self.reminders.cancel(id);
        self.undo.stage(task, now, self.grace);
        self.bump();
        Ok(())
    }

    /// Restores a staged deletion at the head of the collection, if its
    /// window is still open. The store is never contacted.
    pub fn undo_delete(&mut self, id: i64, now: NaiveDateTime) -> Option<Task> {
        let task = self.undo.undo(id, now)?;
        self.tasks.insert(0, task.clone());
        self.bump();
        Some(task)
    }

    /// Restores the most recent staged deletion still inside its window.
    pub fn undo_last(&mut self, now: NaiveDateTime) -> Option<Task> {
        let task = self.undo.undo_last(now)?;
        self.tasks.insert(0, task.clone());
        self.bump();
        Some(task)
    }

    pub fn pending_deletes(&self) -> usize {
        self.undo.len()
    }

    /// Grace window applied to staged deletions, in seconds.
    pub fn grace_seconds(&self) -> u64 {
        self.grace.num_seconds() as u64
    }

    /// Commits every staged deletion whose grace window has expired.
    ///
    /// A task already gone from the store counts as committed. A
    /// transient failure puts the entry back with an immediate deadline
    /// so the next reap retries it. Returns the number committed.
    pub async fn reap_expired(&mut self, now: NaiveDateTime) -> Result<usize> {
        let mut committed = 0;
        let mut first_error = None;

        for task in self.undo.expired(now) {
            match self.gateway.delete_task(task.id).await {
                Ok(()) => committed += 1,
                Err(err) if err.is_not_found() => {
                    debug!(id = task.id, "already deleted on server");
                    committed += 1;
                }
                Err(err) => {
                    warn!(id = task.id, error = %err, "delete commit failed, will retry");
                    self.undo.stage(task, now, Duration::zero());
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(committed),
        }
    }

    /// Moves a task directly before another one (or to the end). Order
    /// is a local presentation concern and never round-trips.
    pub fn reorder(&mut self, id: i64, before: Option<i64>) -> Result<()> {
        let from = self.tasks.iter().position(|t| t.id == id).ok_or(GatewayError::NotFound(id))?;
        let task = self.tasks.remove(from);
        let to = match before {
            Some(target) => self
                .tasks
                .iter()
                .position(|t| t.id == target)
                .ok_or(GatewayError::NotFound(target))
                .inspect_err(|_| self.tasks.insert(from, task.clone()))?,
            None => self.tasks.len(),
        };
        self.tasks.insert(to, task);
        self.bump();
        Ok(())
    }

    /// Schedules a reminder for the task's due date.
    pub fn schedule_reminder(&mut self, id: i64, now: NaiveDateTime) -> std::result::Result<NaiveDateTime, ReminderError> {
        let task = self.task(id).ok_or(ReminderError::UnknownTask(id))?.clone();
        self.reminders.schedule(&task, now)
    }

    pub fn reminder_for(&self, id: i64) -> Option<NaiveDateTime> {
        self.reminders.scheduled_for(id)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// Applies an optimistic mutation and returns the pre-mutation
    /// snapshot for rollback. Fails without touching anything when the
    /// task is not present locally.
    fn mutate_local(&mut self, id: i64, apply: impl FnOnce(&mut Task)) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(GatewayError::NotFound(id))?;
        let snapshot = task.clone();
        apply(task);
        self.bump();
        Ok(snapshot)
    }

    /// Folds the gateway's answer back into the local collection.
    fn reconcile(&mut self, id: i64, snapshot: Task, result: Result<Task>) -> Result<Task> {
        match result {
            Ok(updated) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = updated.clone();
                    self.bump();
                }
                Ok(updated)
            }
            Err(err) if err.is_not_found() => {
                // The task vanished elsewhere; drop the stale entry.
                warn!(id, "task gone from store, removing local copy");
                self.tasks.retain(|t| t.id != id);
                self.reminders.cancel(id);
                self.bump();
                Err(err)
            }
            Err(err) => {
                // Roll the optimistic mutation back.
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = snapshot;
                    self.bump();
                }
                Err(err)
            }
        }
    }
}
