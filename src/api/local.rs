//! Store-backed gateway for offline use and tests.
//!
//! Wraps the embedded SQLite store behind the same [`Gateway`] contract
//! the remote client implements, including the validate-before-I/O rule,
//! so the session layer cannot tell the two apart.

use crate::api::{validate_text, Gateway, GatewayError, Result, TaskPatch};
use crate::db::tasks::Tasks;
use crate::libs::task::Task;
use chrono::NaiveDate;

pub struct LocalGateway {
    owner: String,
    store: Tasks,
}

impl LocalGateway {
    pub fn open(owner: &str) -> Result<Self> {
        let store = Tasks::new().map_err(|e| GatewayError::Transient(e.to_string()))?;
        Ok(LocalGateway {
            owner: owner.to_string(),
            store,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    fn fetch_required(&mut self, id: i64) -> Result<Task> {
        self.store
            .fetch_one(&self.owner, id)
            .map_err(|e| GatewayError::Transient(e.to_string()))?
            .ok_or(GatewayError::NotFound(id))
    }

    fn store_update(&mut self, task: &Task) -> Result<()> {
        let updated = self
            .store
            .update(&self.owner, task)
            .map_err(|e| GatewayError::Transient(e.to_string()))?;
        if !updated {
            return Err(GatewayError::NotFound(task.id));
        }
        Ok(())
    }
}

impl Gateway for LocalGateway {
    async fn list_tasks(&mut self) -> Result<Vec<Task>> {
        self.store
            .fetch_all(&self.owner)
            .map_err(|e| GatewayError::Transient(e.to_string()))
    }

    async fn create_task(&mut self, text: &str) -> Result<Task> {
        let text = validate_text(text)?;
        let task = Task::new(&text);
        let id = self
            .store
            .insert(&self.owner, &task)
            .map_err(|e| GatewayError::Transient(e.to_string()))?;
        self.fetch_required(id)
    }

    async fn update_task(&mut self, id: i64, patch: &TaskPatch) -> Result<Task> {
        let mut task = self.fetch_required(id)?;
        if let Some(text) = &patch.text {
            task.text = validate_text(text)?;
        }
        if let Some(notes) = &patch.notes {
            task.notes = Some(notes.clone());
        }
        if let Some(category) = patch.category {
            task.category = Some(category);
        }
        if let Some(priority) = patch.priority {
            task.priority = Some(priority);
        }
        self.store_update(&task)?;
        Ok(task)
    }

    async fn delete_task(&mut self, id: i64) -> Result<()> {
        let deleted = self
            .store
            .delete(&self.owner, id)
            .map_err(|e| GatewayError::Transient(e.to_string()))?;
        if !deleted {
            return Err(GatewayError::NotFound(id));
        }
        Ok(())
    }

    async fn toggle_completed(&mut self, id: i64) -> Result<Task> {
        let mut task = self.fetch_required(id)?;
        task.completed = !task.completed;
        self.store_update(&task)?;
        Ok(task)
    }

    async fn toggle_important(&mut self, id: i64) -> Result<Task> {
        let mut task = self.fetch_required(id)?;
        task.important = !task.important;
        self.store_update(&task)?;
        Ok(task)
    }

    async fn toggle_my_day(&mut self, id: i64) -> Result<Task> {
        let mut task = self.fetch_required(id)?;
        task.my_day = !task.my_day;
        self.store_update(&task)?;
        Ok(task)
    }

    async fn toggle_archived(&mut self, id: i64) -> Result<Task> {
        let mut task = self.fetch_required(id)?;
        task.archived = !task.archived;
        self.store_update(&task)?;
        Ok(task)
    }

    async fn set_due_date(&mut self, id: i64, due: Option<NaiveDate>) -> Result<Task> {
        let mut task = self.fetch_required(id)?;
        task.due_date = due;
        self.store_update(&task)?;
        Ok(task)
    }

    async fn add_subtask(&mut self, task_id: i64, text: &str) -> Result<Task> {
        let text = validate_text(text)?;
        let added = self
            .store
            .add_subtask(&self.owner, task_id, &text)
            .map_err(|e| GatewayError::Transient(e.to_string()))?;
        if !added {
            return Err(GatewayError::NotFound(task_id));
        }
        self.fetch_required(task_id)
    }

    async fn toggle_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task> {
        let toggled = self
            .store
            .toggle_subtask(&self.owner, task_id, subtask_id)
            .map_err(|e| GatewayError::Transient(e.to_string()))?;
        if !toggled {
            return Err(GatewayError::NotFound(task_id));
        }
        self.fetch_required(task_id)
    }

    async fn delete_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task> {
        let deleted = self
            .store
            .delete_subtask(&self.owner, task_id, subtask_id)
            .map_err(|e| GatewayError::Transient(e.to_string()))?;
        if !deleted {
            return Err(GatewayError::NotFound(task_id));
        }
        self.fetch_required(task_id)
    }
}
