//! upim設定
//!
//! 設定の優先順位: CLIフラグ > 環境変数 > 設定ファイル > デフォルト。
//! 設定ファイルは `~/.upim/config.toml`（存在しない場合はデフォルト）。

use crate::env::EnvVar;
use crate::error::{Result, UpimError};
use serde::Deserialize;
use std::path::PathBuf;

/// ダイアログポーリングのデフォルト間隔（ミリ秒）
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// upim設定
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpimConfig {
    /// Unityエディタ実行ファイルのパス
    pub editor_path: Option<PathBuf>,
    /// Unityプロジェクトのパス（未指定時はカレントディレクトリ）
    pub project_path: Option<PathBuf>,
    /// インポートダイアログのポーリング間隔（ミリ秒）
    pub poll_interval_ms: u64,
}

impl Default for UpimConfig {
    fn default() -> Self {
        Self {
            editor_path: None,
            project_path: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl UpimConfig {
    /// デフォルトパス（~/.upim/config.toml）から読み込み、環境変数を適用
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// 指定パスから読み込み（テスト用にも使用）
    ///
    /// ファイルが存在しない場合はデフォルト設定を返す。
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(UpimError::Io(e)),
        }
    }

    /// 環境変数による上書きを適用
    ///
    /// - `UPIM_EDITOR`: エディタパス
    /// - `UPIM_PROJECT`: プロジェクトパス
    /// - `UPIM_POLL_INTERVAL_MS`: ポーリング間隔
    pub fn apply_env(&mut self) {
        if let Some(editor) = EnvVar::get("UPIM_EDITOR") {
            self.editor_path = Some(PathBuf::from(editor));
        }
        if let Some(project) = EnvVar::get("UPIM_PROJECT") {
            self.project_path = Some(PathBuf::from(project));
        }
        if let Some(ms) = EnvVar::get_parsed("UPIM_POLL_INTERVAL_MS") {
            self.poll_interval_ms = ms;
        }
    }

    /// プロジェクトパスを解決（未指定時はカレントディレクトリ）
    pub fn resolve_project(&self) -> PathBuf {
        self.project_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// エディタパスを解決
    pub fn resolve_editor(&self) -> Result<PathBuf> {
        self.editor_path.clone().ok_or_else(|| {
            UpimError::Config(
                "Unity editor path not set. Use --editor, UPIM_EDITOR, or editor_path in ~/.upim/config.toml"
                    .to_string(),
            )
        })
    }

    fn default_path() -> Option<PathBuf> {
        let home = EnvVar::get("HOME")?;
        Some(PathBuf::from(home).join(".upim").join("config.toml"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
