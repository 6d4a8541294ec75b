use std::str::FromStr;

/// 環境変数ユーティリティ
///
/// upim は `UPIM_EDITOR` / `UPIM_PROJECT` / `UPIM_POLL_INTERVAL_MS` を
/// 設定ファイルの上書きとして読む。
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 環境変数を取得してパースする
    ///
    /// 未設定・空・パース不能はすべて None（設定値を上書きしない）。
    pub fn get_parsed<T: FromStr>(key: &str) -> Option<T> {
        Self::get(key)?.parse().ok()
    }
}
