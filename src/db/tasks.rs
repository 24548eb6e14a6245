//! Task and subtask store, scoped to an owning user.
//!
//! Every query carries the owner so one user can never read or mutate
//! another user's records. Mutations report whether a row was actually
//! touched; the gateway layer turns a missed row into `NotFound`.

use super::db::Db;
use crate::libs::task::{Subtask, Task};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_TASKS: &str = "SELECT id, text, completed, important, my_day, archived, category, priority, due_date, notes, created_at
    FROM tasks WHERE owner = ?1";
const INSERT_TASK: &str = "INSERT INTO tasks (owner, text, created_at) VALUES (?1, ?2, ?3)";
const UPDATE_TASK: &str = "UPDATE tasks SET text = ?3, completed = ?4, important = ?5, my_day = ?6, archived = ?7,
    category = ?8, priority = ?9, due_date = ?10, notes = ?11 WHERE owner = ?1 AND id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE owner = ?1 AND id = ?2";
const SELECT_SUBTASKS: &str = "SELECT id, text, completed FROM subtasks WHERE task_id = ?1 ORDER BY position, id";
const INSERT_SUBTASK: &str = "INSERT INTO subtasks (task_id, text, completed, position)
    SELECT ?1, ?2, FALSE, COALESCE(MAX(position), 0) + 1 FROM subtasks WHERE task_id = ?1";
const TOGGLE_SUBTASK: &str = "UPDATE subtasks SET completed = NOT completed WHERE id = ?2
    AND task_id IN (SELECT id FROM tasks WHERE owner = ?3 AND id = ?1)";
const DELETE_SUBTASK: &str = "DELETE FROM subtasks WHERE id = ?2
    AND task_id IN (SELECT id FROM tasks WHERE owner = ?3 AND id = ?1)";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task and returns its assigned id.
    pub fn insert(&mut self, owner: &str, task: &Task) -> Result<i64> {
        self.conn.execute(INSERT_TASK, params![owner, task.text, task.created_at])?;
        let id = self.conn.last_insert_rowid();

        // Optional fields go through the regular update so the insert
        // path and the patch path share one column list.
        let mut stored = task.clone();
        stored.id = id;
        self.update(owner, &stored)?;
        Ok(id)
    }

    /// All of the owner's tasks, newest first, subtasks attached.
    pub fn fetch_all(&mut self, owner: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY created_at DESC, id DESC", SELECT_TASKS))?;
        let rows = stmt.query_map(params![owner], map_task)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        drop(stmt);

        for task in &mut tasks {
            task.subtasks = self.fetch_subtasks(task.id)?;
        }
        Ok(tasks)
    }

    pub fn fetch_one(&mut self, owner: &str, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} AND id = ?2", SELECT_TASKS), params![owner, id], map_task)
            .optional()?;

        match task {
            Some(mut task) => {
                task.subtasks = self.fetch_subtasks(task.id)?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Full-row update. Returns `false` when the id is unknown or owned
    /// by someone else.
    pub fn update(&mut self, owner: &str, task: &Task) -> Result<bool> {
        let changed = self.conn.execute(
            UPDATE_TASK,
            params![
                owner,
                task.id,
                task.text,
                task.completed,
                task.important,
                task.my_day,
                task.archived,
                task.category.map(|c| c.as_str()),
                task.priority.map(|p| p.as_str()),
                task.due_date,
                task.notes,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Deletes a task; subtasks follow via the cascade.
    pub fn delete(&mut self, owner: &str, id: i64) -> Result<bool> {
        let changed = self.conn.execute(DELETE_TASK, params![owner, id])?;
        Ok(changed > 0)
    }

    /// Appends a subtask to an owned task. Returns `false` when the
    /// parent task is missing.
    pub fn add_subtask(&mut self, owner: &str, task_id: i64, text: &str) -> Result<bool> {
        if self.fetch_one(owner, task_id)?.is_none() {
            return Ok(false);
        }
        self.conn.execute(INSERT_SUBTASK, params![task_id, text])?;
        Ok(true)
    }

    pub fn toggle_subtask(&mut self, owner: &str, task_id: i64, subtask_id: i64) -> Result<bool> {
        let changed = self.conn.execute(TOGGLE_SUBTASK, params![task_id, subtask_id, owner])?;
        Ok(changed > 0)
    }

    pub fn delete_subtask(&mut self, owner: &str, task_id: i64, subtask_id: i64) -> Result<bool> {
        let changed = self.conn.execute(DELETE_SUBTASK, params![task_id, subtask_id, owner])?;
        Ok(changed > 0)
    }

    fn fetch_subtasks(&self, task_id: i64) -> Result<Vec<Subtask>> {
        let mut stmt = self.conn.prepare(SELECT_SUBTASKS)?;
        let rows = stmt.query_map(params![task_id], |row| {
            Ok(Subtask {
                id: row.get(0)?,
                text: row.get(1)?,
                completed: row.get(2)?,
            })
        })?;

        let mut subtasks = Vec::new();
        for row in rows {
            subtasks.push(row?);
        }
        Ok(subtasks)
    }
}

fn map_task(row: &Row) -> rusqlite::Result<Task> {
    let category: Option<String> = row.get(6)?;
    let priority: Option<String> = row.get(7)?;

    Ok(Task {
        id: row.get(0)?,
        text: row.get(1)?,
        completed: row.get(2)?,
        important: row.get(3)?,
        my_day: row.get(4)?,
        archived: row.get(5)?,
        category: category.and_then(|c| c.parse().ok()),
        priority: priority.and_then(|p| p.parse().ok()),
        due_date: row.get(8)?,
        notes: row.get(9)?,
        subtasks: Vec::new(),
        created_at: row.get(10)?,
    })
}
