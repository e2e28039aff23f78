//! Common test utilities for cellrepair integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Isolated home directory so tests never read a real config or key
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let data_dir = temp_dir.path().join(".cellrepair");

        Ok(Self { temp_dir, data_dir })
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Command with HOME pointed at the temp dir and no key in the environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cellrepair"));
        cmd.env("HOME", self.temp_dir.path());
        cmd.env_remove("CELLREPAIR_API_KEY");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Write a config file with the given collaborate section
    pub fn write_config(&self, collaborate: serde_json::Value) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        let config = serde_json::json!({ "collaborate": collaborate });
        std::fs::write(self.config_file(), serde_json::to_string_pretty(&config)?)?;
        Ok(())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new().expect("Failed to create test environment")
    }
}
