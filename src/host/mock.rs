//! テスト用モックエディタホスト

use super::EditorHost;
use crate::error::{Result, UpimError};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// テスト用モックエディタホスト
///
/// パッケージの存在・インポート結果・ダイアログ観測列をスクリプトし、
/// 呼び出しを記録する。
#[derive(Default)]
pub struct MockHost {
    existing: HashSet<PathBuf>,
    failures: HashMap<PathBuf, String>,
    dialog_observations: VecDeque<bool>,
    /// 記録されたインポート呼び出し（パスと interactive フラグ）
    pub imports: Vec<(PathBuf, bool)>,
    /// refresh_assets の呼び出し回数
    pub refresh_count: usize,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 存在するパッケージを登録
    pub fn add_package(&mut self, path: &str) {
        self.existing.insert(PathBuf::from(path));
    }

    /// 指定パスのインポートを失敗させる
    pub fn fail_import(&mut self, path: &str, message: &str) {
        self.existing.insert(PathBuf::from(path));
        self.failures.insert(PathBuf::from(path), message.to_string());
    }

    /// ダイアログ開閉の観測列をスクリプト
    ///
    /// `import_dialog_open` の呼び出しごとに先頭から消費する。
    /// 使い切った後は「閉じている」を返す。
    pub fn script_dialog(&mut self, observations: &[bool]) {
        self.dialog_observations.extend(observations.iter().copied());
    }
}

impl EditorHost for MockHost {
    fn package_exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    fn import_package(&mut self, path: &Path, interactive: bool) -> Result<()> {
        self.imports.push((path.to_path_buf(), interactive));
        match self.failures.get(path) {
            Some(message) => Err(UpimError::ImportFailed {
                path: path.to_path_buf(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn import_dialog_open(&mut self) -> bool {
        self.dialog_observations.pop_front().unwrap_or(false)
    }

    fn refresh_assets(&mut self) {
        self.refresh_count += 1;
    }
}
