use std::path::PathBuf;
use thiserror::Error;

/// upim統一エラー型
#[derive(Debug, Error)]
pub enum UpimError {
    #[error("Import queue is empty")]
    EmptyQueue,

    #[error("An import run is already in progress")]
    RunInProgress,

    #[error("Package file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to import {}: {}", .path.display(), .message)]
    ImportFailed { path: PathBuf, message: String },

    #[error("Unity editor binary not found: {}", .0.display())]
    EditorNotFound(PathBuf),

    #[error("Not a Unity project (no Assets directory): {}", .0.display())]
    InvalidProject(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, UpimError>;
