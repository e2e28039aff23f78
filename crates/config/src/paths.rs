//! Path utilities

use std::path::PathBuf;

/// Local data directory (~/.cellrepair)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cellrepair")
}

/// Config file location
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}
