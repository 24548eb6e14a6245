//! Pure derivation of what the user sees from the raw task collection.
//!
//! This module is the core of the application: given the task collection
//! and the current [`Selection`], it computes the visible, sorted and
//! grouped output without performing any I/O. The pipeline applies its
//! rules in a fixed order:
//!
//! ```text
//! 1. Archive gate      (Archive view shows only archived tasks and
//!                       skips every other narrowing rule)
//! 2. View narrowing    (My Day / Important / Planned predicates)
//! 3. Text search       (case-insensitive substring match)
//! 4. Category filter   (exact match unless "All")
//! 5. Sort              (stable, one mode at a time)
//! 6. Group / bucket    (Planned view buckets by day, otherwise the
//!                       active group mode partitions the list)
//! ```
//!
//! Each filter rule only narrows the previous result and never reorders,
//! so output order is the raw collection's order unless a sort mode says
//! otherwise. [`DerivedCache`] memoizes the final output on the
//! (collection revision, today, selection) triple so the derivation runs
//! only when one of its inputs actually changed.

use crate::libs::selection::{CategoryFilter, GroupMode, Selection, SortMode, View};
use crate::libs::task::{Priority, Task};
use chrono::{Days, NaiveDate};
use std::cmp::Reverse;
use std::fmt;

/// Applies the filter rules of the pipeline (steps 1-4) and returns the
/// surviving tasks in their original order.
pub fn visible_tasks<'a>(tasks: &'a [Task], selection: &Selection) -> Vec<&'a Task> {
    let search = selection.search.trim().to_lowercase();

    tasks
        .iter()
        .filter(|t| match selection.view {
            // The archive gate replaces all other view narrowing.
            View::Archive => t.archived,
            View::Important => !t.archived && t.important,
            View::MyDay => !t.archived && t.my_day,
            View::Planned => !t.archived && t.due_date.is_some(),
            View::Tasks => !t.archived,
        })
        .filter(|t| search.is_empty() || t.text.to_lowercase().contains(&search))
        .filter(|t| match selection.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => t.category == Some(category),
        })
        .collect()
}

/// Sorts the filtered tasks in place. Every mode uses a stable sort so
/// ties keep their prior relative order.
pub fn sort_tasks(tasks: &mut [&Task], mode: SortMode) {
    match mode {
        SortMode::Created => tasks.sort_by_key(|t| Reverse((t.created_at, t.id))),
        SortMode::Alpha => tasks.sort_by_key(|t| t.text.to_lowercase()),
        SortMode::Due => tasks.sort_by_key(|t| match t.due_date {
            // Tasks without a due date sort after every dated task.
            Some(date) => (0, date),
            None => (1, NaiveDate::MAX),
        }),
        SortMode::Important => tasks.sort_by_key(|t| !t.important),
        SortMode::Priority => tasks.sort_by_key(|t| Reverse(Priority::weight(t.priority))),
    }
}

/// Label of one rendered section of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    All,
    Completed,
    Pending,
    Important,
    Others,
    Planned,
    NoDate,
    Earlier,
    Today,
    Tomorrow,
    Future,
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionLabel::All => "Tasks",
            SectionLabel::Completed => "Completed",
            SectionLabel::Pending => "Pending",
            SectionLabel::Important => "Important",
            SectionLabel::Others => "Others",
            SectionLabel::Planned => "Planned",
            SectionLabel::NoDate => "No date",
            SectionLabel::Earlier => "Earlier",
            SectionLabel::Today => "Today",
            SectionLabel::Tomorrow => "Tomorrow",
            SectionLabel::Future => "Future",
        };
        f.write_str(name)
    }
}

/// One labelled run of tasks in the derived output.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub label: SectionLabel,
    pub tasks: Vec<Task>,
}

/// Day-granularity buckets for the Planned view. Tasks without a due
/// date never enter a bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannedBuckets {
    pub earlier: Vec<Task>,
    pub today: Vec<Task>,
    pub tomorrow: Vec<Task>,
    pub future: Vec<Task>,
}

/// Classifies tasks into Planned-view buckets relative to `today`.
///
/// Due dates are already day-granular, so "normalizing" is a plain date
/// comparison: `Earlier` before today, `Today`, `Tomorrow`, `Future`
/// everything past tomorrow.
pub fn planned_buckets(tasks: &[&Task], today: NaiveDate) -> PlannedBuckets {
    let tomorrow = today + Days::new(1);
    let mut buckets = PlannedBuckets::default();

    for task in tasks {
        let Some(due) = task.due_date else {
            continue;
        };
        let slot = if due < today {
            &mut buckets.earlier
        } else if due == today {
            &mut buckets.today
        } else if due == tomorrow {
            &mut buckets.tomorrow
        } else {
            &mut buckets.future
        };
        slot.push((*task).clone());
    }

    buckets
}

/// Partitions the visible tasks according to the group mode. Membership
/// is total over the input; empty groups are dropped from the output.
pub fn group_tasks(tasks: &[&Task], mode: GroupMode) -> Vec<Section> {
    let partition = |predicate: fn(&Task) -> bool, yes: SectionLabel, no: SectionLabel| {
        let (hits, misses): (Vec<&&Task>, Vec<&&Task>) = tasks.iter().partition(|t| predicate(t));
        [(yes, hits), (no, misses)]
            .into_iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(label, members)| Section {
                label,
                tasks: members.into_iter().map(|t| (**t).clone()).collect(),
            })
            .collect()
    };

    match mode {
        GroupMode::None => vec![Section {
            label: SectionLabel::All,
            tasks: tasks.iter().map(|t| (*t).clone()).collect(),
        }],
        GroupMode::Completed => partition(|t| t.completed, SectionLabel::Completed, SectionLabel::Pending),
        GroupMode::Important => partition(|t| t.important, SectionLabel::Important, SectionLabel::Others),
        GroupMode::Planned => partition(|t| t.due_date.is_some(), SectionLabel::Planned, SectionLabel::NoDate),
    }
}

/// The fully derived view: what the shell renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOutput {
    pub sections: Vec<Section>,
}

impl ViewOutput {
    /// Total number of tasks across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the full pipeline once. The Planned view always renders its four
/// date buckets (even empty ones, matching the sidebar layout); every
/// other view renders the active group mode's sections.
pub fn derive_view(tasks: &[Task], selection: &Selection, today: NaiveDate) -> ViewOutput {
    let mut visible = visible_tasks(tasks, selection);
    sort_tasks(&mut visible, selection.sort);

    if selection.view == View::Planned {
        let buckets = planned_buckets(&visible, today);
        return ViewOutput {
            sections: vec![
                Section { label: SectionLabel::Earlier, tasks: buckets.earlier },
                Section { label: SectionLabel::Today, tasks: buckets.today },
                Section { label: SectionLabel::Tomorrow, tasks: buckets.tomorrow },
                Section { label: SectionLabel::Future, tasks: buckets.future },
            ],
        };
    }

    ViewOutput {
        sections: group_tasks(&visible, selection.group),
    }
}

/// Memoizing wrapper around [`derive_view`].
///
/// The session bumps a revision counter on every mutation of the raw
/// collection; as long as the (revision, today, selection) triple is
/// unchanged the cached output is returned untouched.
#[derive(Debug, Default)]
pub struct DerivedCache {
    key: Option<(u64, NaiveDate, Selection)>,
    output: ViewOutput,
    recomputes: u64,
}

impl DerivedCache {
    pub fn new() -> Self {
        DerivedCache::default()
    }

    pub fn derive(&mut self, tasks: &[Task], revision: u64, selection: &Selection, today: NaiveDate) -> &ViewOutput {
        let key = (revision, today, selection.clone());
        if self.key.as_ref() != Some(&key) {
            self.output = derive_view(tasks, selection, today);
            self.key = Some(key);
            self.recomputes += 1;
        }
        &self.output
    }

    /// Number of times the pipeline actually ran.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}
