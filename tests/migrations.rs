#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::db::Db;

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn opening_creates_the_full_schema(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        let count: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('tasks', 'subtasks', 'migrations')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);

        // The archive migration added its columns.
        let archived: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name IN ('archived', 'notes')", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(archived, 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn reopening_is_idempotent(_ctx: &mut MigrationTestContext) {
        drop(Db::new().unwrap());
        let db = Db::new().unwrap();

        let version: u32 = db
            .conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 2);

        let applied: i64 = db.conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn cascade_removes_subtasks_with_their_task(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        db.conn
            .execute("INSERT INTO tasks (owner, text, created_at) VALUES ('judy', 'parent', '2024-01-10 12:00:00')", [])
            .unwrap();
        let task_id = db.conn.last_insert_rowid();
        db.conn
            .execute(
                "INSERT INTO subtasks (task_id, text, position) VALUES (?1, 'child', 1)",
                [task_id],
            )
            .unwrap();

        db.conn.execute("DELETE FROM tasks WHERE id = ?1", [task_id]).unwrap();
        let orphans: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM subtasks WHERE task_id = ?1", [task_id], |row| row.get(0))
            .unwrap();
        assert_eq!(orphans, 0);
    }
}
