//! upim batch コマンド
//!
//! バッチインポータウィンドウ（TUI）を開く。引数のパスでキューを事前に
//! 埋められる（ファイルはそのまま、フォルダは再帰探索して追加）。

use crate::config::UpimConfig;
use crate::driver::ImportDriver;
use crate::host::{EditorHost, UnityHost};
use crate::scan;
use crate::tui;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Package files or folders to preload into the queue
    pub paths: Vec<PathBuf>,

    /// Start with interactive import mode enabled
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Unity editor binary (overrides UPIM_EDITOR and config file)
    #[arg(long)]
    pub editor: Option<PathBuf>,

    /// Unity project path (overrides UPIM_PROJECT and config file)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Import dialog poll interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. 設定を読み込み、フラグで上書き
    let mut config = UpimConfig::load().map_err(|e| e.to_string())?;
    if let Some(editor) = args.editor {
        config.editor_path = Some(editor);
    }
    if let Some(project) = args.project {
        config.project_path = Some(project);
    }
    if let Some(ms) = args.poll_interval_ms {
        config.poll_interval_ms = ms;
    }

    // 2. ホストとドライバを構築
    let editor = config.resolve_editor().map_err(|e| e.to_string())?;
    let host =
        UnityHost::new(editor, config.resolve_project()).map_err(|e| e.to_string())?;
    let mut driver = ImportDriver::new(host);

    // 3. 引数のパスでキューを事前に埋める
    preload(&mut driver, &args.paths);

    // 4. TUIを起動
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    tui::window::run(driver, args.interactive, poll_interval).map_err(|e| e.to_string())
}

/// 引数のパスをキューへ展開する
///
/// フォルダは再帰探索、重複は黙ってスキップ。追加された件数を返す。
fn preload<H: EditorHost>(driver: &mut ImportDriver<H>, paths: &[PathBuf]) -> usize {
    let mut added = 0;
    for path in paths {
        if path.is_dir() {
            for package in scan::find_packages(path) {
                if driver.enqueue(package) {
                    added += 1;
                }
            }
        } else if driver.enqueue(path.clone()) {
            added += 1;
        }
    }
    added
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
