//! Unityエディタホスト
//!
//! Unityエディタをコマンドラインから起動してインポートを実行する。
//!
//! - unattended: `-batchmode -nographics -quit -importPackage` で同期実行
//! - interactive: `-batchmode` なしで起動し、インポートダイアログ付きの
//!   エディタプロセスを開く。プロセスが生きている間は「ダイアログが開いて
//!   いる」とみなす。

use super::EditorHost;
use crate::error::{Result, UpimError};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// 本番用エディタホスト
#[derive(Debug)]
pub struct UnityHost {
    editor: PathBuf,
    project: PathBuf,
    /// interactive インポートで起動中のエディタプロセス
    child: Option<Child>,
}

impl UnityHost {
    /// エディタパスとプロジェクトパスを検証して作成
    pub fn new(editor: PathBuf, project: PathBuf) -> Result<Self> {
        if !editor.is_file() {
            return Err(UpimError::EditorNotFound(editor));
        }
        if !project.join("Assets").is_dir() {
            return Err(UpimError::InvalidProject(project));
        }
        Ok(Self {
            editor,
            project,
            child: None,
        })
    }

    fn import_failed(&self, path: &Path, message: impl Into<String>) -> UpimError {
        UpimError::ImportFailed {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl EditorHost for UnityHost {
    fn package_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn import_package(&mut self, path: &Path, interactive: bool) -> Result<()> {
        if interactive {
            let child = Command::new(&self.editor)
                .arg("-projectPath")
                .arg(&self.project)
                .arg("-importPackage")
                .arg(path)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|e| self.import_failed(path, e.to_string()))?;
            self.child = Some(child);
            Ok(())
        } else {
            let status = Command::new(&self.editor)
                .arg("-batchmode")
                .arg("-nographics")
                .arg("-quit")
                .arg("-projectPath")
                .arg(&self.project)
                .arg("-importPackage")
                .arg(path)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(|e| self.import_failed(path, e.to_string()))?;

            if status.success() {
                Ok(())
            } else {
                Err(self.import_failed(path, format!("editor exited with {status}")))
            }
        }
    }

    fn import_dialog_open(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                Ok(Some(_)) | Err(_) => {
                    self.child = None;
                    false
                }
            },
            None => false,
        }
    }

    fn refresh_assets(&mut self) {
        // batchmode 実行はエディタ終了時にアセットデータベースを保存するため
        // 追加の更新呼び出しは不要
    }
}
