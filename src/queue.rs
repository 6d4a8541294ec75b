//! インポートキュー
//!
//! `.unitypackage` ファイルパスの順序付きリスト。重複は追加時に抑止する
//! （大文字小文字を区別した完全一致）。ラン実行中の編集ガードはキューの
//! 責務ではなく、`driver` 側で行う。

use std::path::{Path, PathBuf};

/// インポート対象パッケージのキュー
#[derive(Debug, Clone, Default)]
pub struct ImportQueue {
    paths: Vec<PathBuf>,
}

impl ImportQueue {
    /// 空のキューを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// パスを末尾に追加
    ///
    /// 同一パスが既に存在する場合は追加せず false を返す。
    pub fn push(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.paths.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// 指定インデックスの要素を削除
    ///
    /// 範囲外のインデックスは無視する。
    pub fn remove_at(&mut self, index: usize) {
        if index < self.paths.len() {
            self.paths.remove(index);
        }
    }

    /// 全要素を削除
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod tests;

#[cfg(test)]
#[path = "queue_proptests.rs"]
mod proptests;
