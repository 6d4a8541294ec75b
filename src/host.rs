//! エディタホスト抽象化
//!
//! ドライバとUnityエディタの間の境界。インポート呼び出し・ダイアログ検出・
//! アセットデータベース更新をtraitに切り出し、テスト時は MockHost を注入する。
//! 本番コードでは UnityHost を使用する。

pub mod unity;

pub use unity::UnityHost;

#[cfg(test)]
pub mod mock;

use crate::error::Result;
use std::path::Path;

/// エディタホスト操作を抽象化するトレイト
pub trait EditorHost {
    /// パッケージファイルが存在するかどうか
    fn package_exists(&self, path: &Path) -> bool;

    /// パッケージをインポート
    ///
    /// - unattended（interactive = false）: インポート完了まで戻らない。
    ///   エラーは Err で返す。
    /// - interactive（interactive = true）: インポートダイアログを開いて
    ///   すぐに戻る。完了検出は `import_dialog_open` のポーリングで行う。
    fn import_package(&mut self, path: &Path, interactive: bool) -> Result<()>;

    /// インポートダイアログが現在開いているかどうか
    fn import_dialog_open(&mut self) -> bool;

    /// ホストのアセットビューを更新
    fn refresh_assets(&mut self);
}
