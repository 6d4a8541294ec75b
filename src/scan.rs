//! パッケージ探索
//!
//! フォルダ配下の `.unitypackage` ファイルを再帰的に列挙する。

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// パッケージファイルの拡張子
pub const PACKAGE_EXTENSION: &str = "unitypackage";

/// フォルダ配下のパッケージファイルを再帰的に列挙する
///
/// - 拡張子 `.unitypackage`（ASCII大文字小文字を無視）のファイルのみ
/// - 読み取れないエントリはスキップ
/// - 結果はパスの昇順でソート（探索順に依存しない）
pub fn find_packages(root: &Path) -> Vec<PathBuf> {
    let mut packages: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(PACKAGE_EXTENSION))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    packages.sort();
    packages
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
