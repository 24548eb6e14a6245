use crate::db::migrations::MigrationManager;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "tudu.db";

/// Database handle. Opening applies pending migrations and enables
/// foreign keys, which subtask cascade deletion relies on.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        Self::prepare(&mut conn)?;

        Ok(Db { conn })
    }

    fn prepare(conn: &mut Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", true)?;
        MigrationManager::new().run_migrations(conn)?;
        Ok(())
    }
}
