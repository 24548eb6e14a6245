//! # Tudu - Terminal To-Do
//!
//! A command-line to-do manager with views, due dates, reminders and a
//! delete-undo grace window.
//!
//! ## Features
//!
//! - **Views**: My Day, Important, Planned, Tasks and Archive
//! - **Filtering**: text search, category filter, five sort modes, grouping
//! - **Planned Buckets**: Earlier, Today, Tomorrow and Future date sections
//! - **Optimistic Updates**: every intent applies locally first, then syncs
//! - **Delete Undo**: deletions stay reversible for a grace window
//! - **Reminders**: due-date timers delivered over a channel
//! - **Dual Storage**: embedded SQLite store or a remote REST backend
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
