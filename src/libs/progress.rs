//! Progress aggregates and the completion streak.
//!
//! All counters here are recomputed from the raw collection (not the
//! filtered view) and ignore archived tasks entirely.
//!
//! ## Completion Formula
//!
//! ```text
//! Completion = 100 * completed / total     (over non-archived tasks)
//! Completion = 0                           (when total == 0)
//! ```
//!
//! The celebration latch fires exactly once per transition from below
//! 100% to 100% with at least one non-archived task present, and re-arms
//! as soon as completion drops below 100% again. Rendering the same
//! fully-completed collection twice therefore never celebrates twice.

use crate::libs::task::{Priority, Task};
use chrono::{Datelike, NaiveDate};

/// Counting aggregates over the non-archived portion of the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressSnapshot {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
    pub percent: u8,
}

/// Completion percentage over non-archived tasks, 0 for an empty set.
pub fn completion_percentage(tasks: &[Task]) -> u8 {
    let mut total = 0usize;
    let mut completed = 0usize;
    for task in tasks.iter().filter(|t| !t.archived) {
        total += 1;
        if task.completed {
            completed += 1;
        }
    }

    if total == 0 {
        return 0;
    }
    (100 * completed / total) as u8
}

/// Recomputes the full snapshot from the raw collection.
pub fn snapshot(tasks: &[Task]) -> ProgressSnapshot {
    let mut snap = ProgressSnapshot::default();
    for task in tasks.iter().filter(|t| !t.archived) {
        snap.total += 1;
        if task.completed {
            snap.completed += 1;
        } else {
            snap.pending += 1;
        }
        if task.priority == Some(Priority::High) {
            snap.high_priority += 1;
        }
    }
    if snap.total > 0 {
        snap.percent = (100 * snap.completed / snap.total) as u8;
    }
    snap
}

/// Weekly streak record: one slot per weekday, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Streak {
    pub days: [bool; 7],
}

impl Streak {
    /// Marks the weekday of `date` as a completed day.
    pub fn mark(&mut self, date: NaiveDate) {
        self.days[date.weekday().num_days_from_monday() as usize] = true;
    }

    pub fn completed_days(&self) -> usize {
        self.days.iter().filter(|d| **d).count()
    }
}

/// One-shot latch for the "everything done" celebration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Celebration {
    celebrated: bool,
}

impl Celebration {
    /// Feeds the current snapshot into the latch. Returns `true` exactly
    /// once per transition to 100% completion; also records the day in
    /// the streak when it fires.
    pub fn observe(&mut self, snap: &ProgressSnapshot, streak: &mut Streak, today: NaiveDate) -> bool {
        let complete = snap.total > 0 && snap.percent == 100;
        if !complete {
            self.celebrated = false;
            return false;
        }
        if self.celebrated {
            return false;
        }
        self.celebrated = true;
        streak.mark(today);
        true
    }
}
