//! Core library modules for the tudu application.
//!
//! Serves as the main entry point for all tudu library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **View Derivation**: Selection state, the filter/sort/group pipeline, memoization
//! - **Task Lifecycle**: Session state, undoable deletion, due-date reminders
//! - **Productivity Signals**: Progress aggregates, streaks, urgency scoring
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::libs::task::Task;
//! use tudu::db::tasks::Tasks;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let task = Task::new("Water the plants");
//! let mut store = Tasks::new()?;
//! store.insert("me", &task)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod progress;
pub mod reminder;
pub mod selection;
pub mod session;
pub mod task;
pub mod undo;
pub mod urgency;
pub mod view;
pub mod viewmodel;
