//! バッチインポータウィンドウの状態管理

use crate::driver::{DriverEvent, ImportDriver, RunSummary};
use crate::host::EditorHost;
use ratatui::widgets::ListState;
use std::path::Path;

/// モーダルオーバーレイ
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Overlay {
    None,
    /// パッケージファイルのパス入力
    AddPath(String),
    /// フォルダのパス入力（再帰探索して追加）
    AddFolder(String),
    /// ラン開始の確認
    ConfirmStart,
    /// 通知（任意のキーで閉じる）
    Notice(String),
    /// ラン完了サマリ（任意のキーで閉じる）
    Summary(RunSummary),
}

/// バッチインポータウィンドウのアプリケーション状態
pub(super) struct BatchApp<H: EditorHost> {
    pub driver: ImportDriver<H>,
    /// interactive インポートモードのトグル
    pub interactive: bool,
    pub list_state: ListState,
    /// 画面下部に表示するログ行
    pub log: Vec<String>,
    pub overlay: Overlay,
    pub should_quit: bool,
}

impl<H: EditorHost> BatchApp<H> {
    pub fn new(driver: ImportDriver<H>, interactive: bool) -> Self {
        let mut list_state = ListState::default();
        if !driver.queue().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            driver,
            interactive,
            list_state,
            log: Vec::new(),
            overlay: Overlay::None,
            should_quit: false,
        }
    }

    /// ドライバを1 tick 駆動し、イベントをログとオーバーレイに反映する
    pub fn pump_driver(&mut self) {
        if !self.driver.is_running() {
            return;
        }
        let events = self.driver.tick();
        self.apply_events(events);
    }

    /// ドライバのイベント列を状態に反映する
    pub fn apply_events(&mut self, events: Vec<DriverEvent>) {
        let total = self.driver.queue().len();
        for event in events {
            match event {
                DriverEvent::ItemStarted { index, path } => {
                    self.log.push(format!(
                        "Importing {}/{}: {}",
                        index + 1,
                        total,
                        display_name(&path)
                    ));
                }
                DriverEvent::ItemImported { path, .. } => {
                    self.log.push(format!("Imported: {}", display_name(&path)));
                }
                DriverEvent::ItemFailed { path, reason, .. } => {
                    self.log
                        .push(format!("Failed: {}: {}", display_name(&path), reason));
                }
                DriverEvent::RunFinished(summary) => {
                    self.log.push(format!(
                        "Run finished. Imported: {}, Failed: {}",
                        summary.success, summary.failed
                    ));
                    self.overlay = Overlay::Summary(summary);
                }
            }
        }
    }

    /// 選択位置をキューの範囲内に収める
    pub fn clamp_selection(&mut self) {
        let len = self.driver.queue().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(selected.min(len - 1)));
        }
    }
}

pub(super) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
