#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskapp::libs::config::{Config, ListConfig, StorageConfig, CONFIG_FILE_NAME};
    use taskapp::libs::data_storage::DataStorage;
    use taskapp::libs::view::RowAnimation;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.database, None);
        assert_eq!(config.list.animation, RowAnimation::Fade);
        assert!(config.list.log_pending_on_delete);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: StorageConfig {
                database: Some(ctx.temp_dir.path().join("elsewhere.db")),
            },
            list: ListConfig {
                animation: RowAnimation::None,
                log_pending_on_delete: false,
            },
        };

        config.save_to(ctx.config_path()).unwrap();
        let loaded = Config::read_from(ctx.config_path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{ "list": { "animation": "none" } }"#).unwrap();

        let config = Config::read_from(ctx.config_path()).unwrap();

        assert_eq!(config.list.animation, RowAnimation::None);
        assert!(config.list.log_pending_on_delete);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_database_is_not_written(ctx: &mut ConfigTestContext) {
        Config::default().save_to(ctx.config_path()).unwrap();

        let written = fs::read_to_string(ctx.config_path()).unwrap();
        assert!(!written.contains("database"));
        assert!(written.contains("\"fade\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.temp_dir.path().join("taskapp").join("taskapp");
        let storage = DataStorage::at(&base);

        let path = storage.get_path(CONFIG_FILE_NAME).unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("config.json"));
    }
}
