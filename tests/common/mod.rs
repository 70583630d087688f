/// Common test utilities and helpers for tagwatch tests
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory holding a config file for one test
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.json");
        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write raw config content to the environment's config path
    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }
}
