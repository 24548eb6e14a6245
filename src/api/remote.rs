//! HTTP client for the hosted task backend.
//!
//! Talks to the REST gateway wrapping the remote task store. Every
//! request carries the configured bearer credential; responses are plain
//! JSON task documents. HTTP status codes map onto the gateway error
//! taxonomy: 400 is a validation rejection, 401/403 force
//! re-authentication, 404 is a stale id and everything else (including
//! network failures) is transient.
//!
//! ## Endpoints
//!
//! ```text
//! GET    /api/tasks
//! POST   /api/tasks                         { "text": ... }
//! PATCH  /api/tasks/:id                     partial field set
//! DELETE /api/tasks/:id
//! PATCH  /api/tasks/:id/toggle
//! PATCH  /api/tasks/:id/important
//! PATCH  /api/tasks/:id/myday
//! PATCH  /api/tasks/:id/archive
//! PATCH  /api/tasks/:id/duedate             { "dueDate": ... }
//! POST   /api/tasks/:id/subtasks            { "text": ... }
//! PATCH  /api/tasks/:id/subtasks/:sub
//! DELETE /api/tasks/:id/subtasks/:sub
//! ```

use crate::api::{validate_text, Gateway, GatewayError, Result, TaskPatch};
use crate::libs::config::ServerConfig;
use crate::libs::task::{Subtask, Task};
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// Gateway client for the remote task service.
#[derive(Debug)]
pub struct RemoteGateway {
    /// HTTP client with connection pooling
    client: Client,
    /// API endpoint and bearer credential
    config: ServerConfig,
}

/// Task document as the backend serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskDto {
    id: i64,
    text: String,
    completed: bool,
    important: bool,
    my_day: bool,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    subtasks: Vec<SubtaskDto>,
    created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubtaskDto {
    id: i64,
    text: String,
    completed: bool,
}

impl From<TaskDto> for Task {
    fn from(dto: TaskDto) -> Self {
        Task {
            id: dto.id,
            text: dto.text,
            completed: dto.completed,
            important: dto.important,
            my_day: dto.my_day,
            archived: dto.archived,
            category: dto.category.and_then(|c| c.parse().ok()),
            priority: dto.priority.and_then(|p| p.parse().ok()),
            due_date: dto.due_date,
            notes: dto.notes,
            subtasks: dto
                .subtasks
                .into_iter()
                .map(|s| Subtask {
                    id: s.id,
                    text: s.text,
                    completed: s.completed,
                })
                .collect(),
            created_at: dto.created_at,
        }
    }
}

impl RemoteGateway {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api/tasks{}", self.config.api_url.trim_end_matches('/'), path);
        self.client.request(method, url).bearer_auth(&self.config.auth_token)
    }

    /// Maps a non-success status onto the gateway error taxonomy.
    fn check(response: Response, id: i64) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::BAD_REQUEST => Err(GatewayError::Validation("request rejected by server".to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GatewayError::Auth),
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound(id)),
            status => Err(GatewayError::Transient(format!("server returned {}", status))),
        }
    }

    async fn fetch_task(&self, builder: RequestBuilder, id: i64) -> Result<Task> {
        let response = Self::check(builder.send().await?, id)?;
        let dto: TaskDto = response.json().await?;
        Ok(dto.into())
    }
}

impl Gateway for RemoteGateway {
    async fn list_tasks(&mut self) -> Result<Vec<Task>> {
        let response = Self::check(self.request(Method::GET, "").send().await?, 0)?;
        let dtos: Vec<TaskDto> = response.json().await?;
        Ok(dtos.into_iter().map(Task::from).collect())
    }

    async fn create_task(&mut self, text: &str) -> Result<Task> {
        let text = validate_text(text)?;
        let builder = self.request(Method::POST, "").json(&json!({ "text": text }));
        self.fetch_task(builder, 0).await
    }

    async fn update_task(&mut self, id: i64, patch: &TaskPatch) -> Result<Task> {
        if let Some(text) = &patch.text {
            validate_text(text)?;
        }
        let builder = self.request(Method::PATCH, &format!("/{}", id)).json(patch);
        self.fetch_task(builder, id).await
    }

    async fn delete_task(&mut self, id: i64) -> Result<()> {
        let response = self.request(Method::DELETE, &format!("/{}", id)).send().await?;
        Self::check(response, id)?;
        Ok(())
    }

    async fn toggle_completed(&mut self, id: i64) -> Result<Task> {
        self.fetch_task(self.request(Method::PATCH, &format!("/{}/toggle", id)), id).await
    }

    async fn toggle_important(&mut self, id: i64) -> Result<Task> {
        self.fetch_task(self.request(Method::PATCH, &format!("/{}/important", id)), id).await
    }

    async fn toggle_my_day(&mut self, id: i64) -> Result<Task> {
        self.fetch_task(self.request(Method::PATCH, &format!("/{}/myday", id)), id).await
    }

    async fn toggle_archived(&mut self, id: i64) -> Result<Task> {
        self.fetch_task(self.request(Method::PATCH, &format!("/{}/archive", id)), id).await
    }

    async fn set_due_date(&mut self, id: i64, due: Option<NaiveDate>) -> Result<Task> {
        let builder = self
            .request(Method::PATCH, &format!("/{}/duedate", id))
            .json(&json!({ "dueDate": due }));
        self.fetch_task(builder, id).await
    }

    async fn add_subtask(&mut self, task_id: i64, text: &str) -> Result<Task> {
        let text = validate_text(text)?;
        let builder = self
            .request(Method::POST, &format!("/{}/subtasks", task_id))
            .json(&json!({ "text": text }));
        self.fetch_task(builder, task_id).await
    }

    async fn toggle_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task> {
        let path = format!("/{}/subtasks/{}", task_id, subtask_id);
        self.fetch_task(self.request(Method::PATCH, &path), task_id).await
    }

    async fn delete_subtask(&mut self, task_id: i64, subtask_id: i64) -> Result<Task> {
        let path = format!("/{}/subtasks/{}", task_id, subtask_id);
        self.fetch_task(self.request(Method::DELETE, &path), task_id).await
    }
}
