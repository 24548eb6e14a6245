#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::config::{Config, ServerConfig, StoreConfig, UndoConfig, DEFAULT_UNDO_GRACE_SECONDS};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn missing_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.server.is_none());
        assert_eq!(config.undo_grace_seconds(), DEFAULT_UNDO_GRACE_SECONDS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: "https://todo.example.com".to_string(),
                auth_token: "secret".to_string(),
            }),
            store: Some(StoreConfig {
                owner: "ivan".to_string(),
            }),
            undo: Some(UndoConfig { grace_seconds: 9 }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.server.as_ref().unwrap().api_url, "https://todo.example.com");
        assert_eq!(loaded.owner(), "ivan");
        assert_eq!(loaded.undo_grace_seconds(), 9);
    }

    #[test]
    fn owner_falls_back_when_store_is_unset() {
        let config = Config::default();
        assert!(!config.owner().is_empty());
    }
}
