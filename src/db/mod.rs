//! Database layer for the tudu application.
//!
//! A small persistence layer on SQLite: one connection struct, a
//! versioned migration system and the owner-scoped task store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::db::tasks::Tasks;
//! use tudu::libs::task::Task;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! tasks.insert("me", &Task::new("Review PR"))?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Owner-scoped task and subtask store.
pub mod tasks;
