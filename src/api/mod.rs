//! Task gateway: the contract between the view-model host and storage.
//!
//! The session layer is written against the [`Gateway`] trait and never
//! cares where tasks actually live. Two implementations ship here:
//!
//! - **Remote**: the REST backend over HTTP with a bearer credential
//! - **Local**: the embedded SQLite store, used offline and in tests
//!
//! Every mutation returns the updated task so the caller can reconcile
//! its optimistic local copy with what the store actually persisted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::api::{Gateway, local::LocalGateway};
//!
//! # async fn demo() -> tudu::api::Result<()> {
//! let mut gateway = LocalGateway::open("me")?;
//! let task = gateway.create_task("Water the plants").await?;
//! assert!(!task.completed);
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Category, Priority, Task};
use chrono::NaiveDate;
use serde::Serialize;

pub mod error;
pub mod local;
pub mod remote;

pub use error::{GatewayError, Result};
pub use local::LocalGateway;
pub use remote::RemoteGateway;

/// Partial field set for a task update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.notes.is_none() && self.category.is_none() && self.priority.is_none()
    }
}

/// Operations the task store exposes, scoped to the authenticated user.
///
/// Validation failures are rejected before any I/O happens; `NotFound`
/// surfaces stale ids so callers can drop the local copy.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// All tasks of the owning user, newest first.
    async fn list_tasks(&mut self) -> Result<Vec<Task>>;

    /// Creates a task from trimmed, non-empty text.
    async fn create_task(&mut self, text: &str) -> Result<Task>;

    /// Applies a partial field update.
    async fn update_task(&mut self, id: i64, patch: &TaskPatch) -> Result<Task>;

    /// Permanently removes a task and its subtasks.
    async fn delete_task(&mut self, id: i64) -> Result<()>;

    async fn toggle_completed(&mut self, id: i64) -> Result<Task>;

    async fn toggle_important(&mut self, id: i64) -> Result<Task>;

    async fn toggle_my_day(&mut self, id: i64) -> Result<Task>;

    async fn toggle_archived(&mut self, id: i64) -> Result<Task>;

    /// Sets or clears the day-granularity due date.
    async fn set_due_date(&mut self, id: i64, due: Option<NaiveDate>) -> Result<Task>;

    async fn add_subtask(&mut self, task_id: i64, text: &str) -> Result<Task>;

    async fn toggle_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task>;

    async fn delete_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task>;
}

/// Gateway picked at startup from the configuration: remote when a
/// server is configured, otherwise the embedded store.
pub enum AnyGateway {
    Local(LocalGateway),
    Remote(RemoteGateway),
}

impl AnyGateway {
    pub fn from_config(config: &crate::libs::config::Config) -> Result<Self> {
        match &config.server {
            Some(server) => Ok(AnyGateway::Remote(RemoteGateway::new(server))),
            None => Ok(AnyGateway::Local(LocalGateway::open(&config.owner())?)),
        }
    }
}

impl Gateway for AnyGateway {
    async fn list_tasks(&mut self) -> Result<Vec<Task>> {
        match self {
            AnyGateway::Local(g) => g.list_tasks().await,
            AnyGateway::Remote(g) => g.list_tasks().await,
        }
    }

    async fn create_task(&mut self, text: &str) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.create_task(text).await,
            AnyGateway::Remote(g) => g.create_task(text).await,
        }
    }

    async fn update_task(&mut self, id: i64, patch: &TaskPatch) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.update_task(id, patch).await,
            AnyGateway::Remote(g) => g.update_task(id, patch).await,
        }
    }

    async fn delete_task(&mut self, id: i64) -> Result<()> {
        match self {
            AnyGateway::Local(g) => g.delete_task(id).await,
            AnyGateway::Remote(g) => g.delete_task(id).await,
        }
    }

    async fn toggle_completed(&mut self, id: i64) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.toggle_completed(id).await,
            AnyGateway::Remote(g) => g.toggle_completed(id).await,
        }
    }

    async fn toggle_important(&mut self, id: i64) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.toggle_important(id).await,
            AnyGateway::Remote(g) => g.toggle_important(id).await,
        }
    }

    async fn toggle_my_day(&mut self, id: i64) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.toggle_my_day(id).await,
            AnyGateway::Remote(g) => g.toggle_my_day(id).await,
        }
    }

    async fn toggle_archived(&mut self, id: i64) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.toggle_archived(id).await,
            AnyGateway::Remote(g) => g.toggle_archived(id).await,
        }
    }

    async fn set_due_date(&mut self, id: i64, due: Option<NaiveDate>) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.set_due_date(id, due).await,
            AnyGateway::Remote(g) => g.set_due_date(id, due).await,
        }
    }

    async fn add_subtask(&mut self, task_id: i64, text: &str) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.add_subtask(task_id, text).await,
            AnyGateway::Remote(g) => g.add_subtask(task_id, text).await,
        }
    }

    async fn toggle_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.toggle_subtask(task_id, subtask_id).await,
            AnyGateway::Remote(g) => g.toggle_subtask(task_id, subtask_id).await,
        }
    }

    async fn delete_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task> {
        match self {
            AnyGateway::Local(g) => g.delete_subtask(task_id, subtask_id).await,
            AnyGateway::Remote(g) => g.delete_subtask(task_id, subtask_id).await,
        }
    }
}

/// Shared validation for task and subtask text: trimmed and non-empty.
pub(crate) fn validate_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::Validation("task text must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}
