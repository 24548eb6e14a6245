//! Database schema migration management and versioning.
//!
//! Maintains a `migrations` tracking table and applies pending versioned
//! migrations transactionally whenever the database is opened.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change applied within a transaction.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: per-user tasks and their subtasks
        self.add_migration(1, "create_tasks_and_subtasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER NOT NULL PRIMARY KEY,
                    owner TEXT NOT NULL,
                    text TEXT NOT NULL,
                    completed BOOLEAN NOT NULL DEFAULT FALSE,
                    important BOOLEAN NOT NULL DEFAULT FALSE,
                    my_day BOOLEAN NOT NULL DEFAULT FALSE,
                    category TEXT,
                    priority TEXT,
                    due_date DATE,
                    created_at TIMESTAMP NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS subtasks (
                    id INTEGER NOT NULL PRIMARY KEY,
                    task_id INTEGER NOT NULL,
                    text TEXT NOT NULL,
                    completed BOOLEAN NOT NULL DEFAULT FALSE,
                    position INTEGER NOT NULL,
                    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // Listing is always owner-scoped; due dates drive the Planned view
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_owner ON tasks(owner)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_subtasks_task_id ON subtasks(task_id)", [])?;

            Ok(())
        });

        // Version 2: archiving and free-text notes
        self.add_migration(2, "add_archived_and_notes", |tx| {
            tx.execute("ALTER TABLE tasks ADD COLUMN archived BOOLEAN NOT NULL DEFAULT FALSE", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN notes TEXT", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version. All
    /// pending migrations commit together or not at all.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(format!("Applying {} pending migration(s)", pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))?;
        Ok(version)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}
