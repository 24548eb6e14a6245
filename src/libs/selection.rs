//! Ephemeral view selection state.
//!
//! Everything the user can tweak without touching task data lives here:
//! the active view, the search text, the category filter and the
//! sort/group modes. The shell owns and mutates a `Selection`; the
//! view-model only ever reads it, which also makes it usable as a
//! memoization key for derived output.

use crate::libs::task::Category;
use std::fmt;
use std::str::FromStr;

/// A named predicate bucket selecting which tasks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    MyDay,
    Important,
    Planned,
    #[default]
    Tasks,
    Archive,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::MyDay => "My Day",
            View::Important => "Important",
            View::Planned => "Planned",
            View::Tasks => "Tasks",
            View::Archive => "Archive",
        };
        f.write_str(name)
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "myday" => Ok(View::MyDay),
            "important" => Ok(View::Important),
            "planned" => Ok(View::Planned),
            "tasks" => Ok(View::Tasks),
            "archive" => Ok(View::Archive),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Exactly one sort mode is active at a time; sorting runs after
/// filtering and every comparator is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    Created,
    Alpha,
    Due,
    Important,
    Priority,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(SortMode::Created),
            "alpha" => Ok(SortMode::Alpha),
            "due" => Ok(SortMode::Due),
            "important" => Ok(SortMode::Important),
            "priority" => Ok(SortMode::Priority),
            other => Err(format!("unknown sort mode: {}", other)),
        }
    }
}

/// Group modes are mutually exclusive with each other but compose with
/// any sort mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupMode {
    #[default]
    None,
    Completed,
    Important,
    Planned,
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(GroupMode::None),
            "completed" => Ok(GroupMode::Completed),
            "important" => Ok(GroupMode::Important),
            "planned" => Ok(GroupMode::Planned),
            other => Err(format!("unknown group mode: {}", other)),
        }
    }
}

/// The full selection the view-model derives from. `PartialEq`/`Hash`
/// let the derivation cache compare selections cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub view: View,
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
    pub group: GroupMode,
}

impl Selection {
    pub fn for_view(view: View) -> Self {
        Selection {
            view,
            ..Selection::default()
        }
    }
}
