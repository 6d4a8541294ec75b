//! インポートキュードライバ（状態マシン）
//!
//! キューのパッケージを1件ずつエディタホストへ渡し、完了を検出して次へ進む。
//!
//! ## 状態遷移図
//!
//! ```text
//!                ┌──────────┐
//!        ┌──────▶│   Idle   │
//!        │       └────┬─────┘
//!        │            │ start(mode)
//!        │            ▼
//!        │       ┌──────────┐  interactive 送出
//!        │       │ Running  │─────────────────┐
//!        │       └────┬─────┘                 ▼
//!        │            │ ▲           ┌──────────────────┐
//!        │  unattended│ │ 次アイテム │ WaitingForDialog │
//!        │      完了  │ │ (deferred) └────────┬─────────┘
//!        │            ▼ │                     │ open→close エッジ
//!        │       ┌──────────┐                 │
//!        │       │ Deferred │◀────────────────┘
//!        │       └────┬─────┘
//!        │            │ index == len
//!        └────────────┘ (summary + refresh)
//! ```
//!
//! ホストのフレーム更新・遅延呼び出しに相当するものは明示的な `tick()` で、
//! 呼び出し側がポーリング間隔ごとに1回駆動する。「次のアイテムを処理する」
//! ステップは必ず次の tick に遅延され、インライン再帰はしない。アイテム間で
//! 制御が呼び出し側へ戻ることを保証するためである。

use crate::error::{Result, UpimError};
use crate::host::EditorHost;
use crate::queue::ImportQueue;
use std::path::{Path, PathBuf};

/// ラン実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// 全パッケージを自動でインポート
    Unattended,
    /// パッケージごとにインポートダイアログを開く
    Interactive,
}

/// ラン完了サマリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub failed: usize,
}

/// ドライバが発行するイベント
///
/// UI層はこれを進捗表示・ログ行として描画する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// アイテムのインポートを開始した
    ItemStarted { index: usize, path: PathBuf },
    /// アイテムのインポートが完了した
    ///
    /// interactive モードではダイアログが閉じたことしか観測できないため、
    /// ユーザーがキャンセルした場合も完了として扱われる。
    ItemImported { index: usize, path: PathBuf },
    /// アイテムのインポートに失敗した（ランは継続する）
    ItemFailed {
        index: usize,
        path: PathBuf,
        reason: String,
    },
    /// ランが完了し Idle に戻った
    RunFinished(RunSummary),
}

/// アイテム処理のフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// 次の tick で現在インデックスのアイテムを処理する（遅延呼び出し相当）
    Deferred,
    /// インポートダイアログの open→close エッジを待つ（interactive のみ）
    WaitingForDialog { dialog_seen: bool },
}

/// 実行中ランのセッション状態
///
/// ラン開始時に生成され、完了時に破棄される。不変条件:
/// `0 <= index <= queue.len()` かつ `success + failed == index`。
#[derive(Debug)]
struct Session {
    mode: RunMode,
    index: usize,
    success: usize,
    failed: usize,
    phase: Phase,
}

/// ランの進捗（UI表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunProgress {
    pub index: usize,
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

/// インポートキュードライバ
pub struct ImportDriver<H: EditorHost> {
    host: H,
    queue: ImportQueue,
    session: Option<Session>,
}

impl<H: EditorHost> ImportDriver<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            queue: ImportQueue::new(),
            session: None,
        }
    }

    /// パッケージをキューに追加
    ///
    /// 重複パス、またはラン実行中は何もせず false を返す。
    pub fn enqueue(&mut self, path: impl Into<PathBuf>) -> bool {
        if self.is_running() {
            return false;
        }
        self.queue.push(path)
    }

    /// キューから削除（ラン実行中は何もしない）
    pub fn remove_at(&mut self, index: usize) {
        if self.is_running() {
            return;
        }
        self.queue.remove_at(index);
    }

    /// キューを空にする（ラン実行中は何もしない）
    pub fn clear(&mut self) {
        if self.is_running() {
            return;
        }
        self.queue.clear();
    }

    pub fn queue(&self) -> &ImportQueue {
        &self.queue
    }

    /// ホストへの参照を取得（テスト用）
    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// 実行中ランの進捗を取得
    pub fn progress(&self) -> Option<RunProgress> {
        self.session.as_ref().map(|s| RunProgress {
            index: s.index,
            total: self.queue.len(),
            success: s.success,
            failed: s.failed,
        })
    }

    /// 現在処理中のパッケージのパス
    pub fn current_path(&self) -> Option<&Path> {
        let session = self.session.as_ref()?;
        self.queue.get(session.index)
    }

    /// ランを開始し、最初のアイテムを即座に処理する
    ///
    /// ユーザー確認はUI層が呼び出し前に済ませる。
    pub fn start(&mut self, mode: RunMode) -> Result<Vec<DriverEvent>> {
        if self.is_running() {
            return Err(UpimError::RunInProgress);
        }
        if self.queue.is_empty() {
            return Err(UpimError::EmptyQueue);
        }

        self.session = Some(Session {
            mode,
            index: 0,
            success: 0,
            failed: 0,
            phase: Phase::Deferred,
        });

        let mut events = Vec::new();
        self.process_current(&mut events);
        Ok(events)
    }

    /// 状態マシンを1ステップ進める
    ///
    /// ポーリング間隔ごとに1回呼び出す。Idle 状態では何もしない。
    pub fn tick(&mut self) -> Vec<DriverEvent> {
        let mut events = Vec::new();
        match self.session.as_ref().map(|s| s.phase) {
            Some(Phase::Deferred) => self.process_current(&mut events),
            Some(Phase::WaitingForDialog { dialog_seen }) => {
                self.poll_dialog(dialog_seen, &mut events)
            }
            None => {}
        }
        events
    }

    /// 現在インデックスのアイテムを処理する
    fn process_current(&mut self, events: &mut Vec<DriverEvent>) {
        let (index, mode) = match self.session.as_ref() {
            Some(s) => (s.index, s.mode),
            None => return,
        };

        if index >= self.queue.len() {
            self.finish(events);
            return;
        }

        // キューはラン中に変更されないため必ず存在する
        let path = match self.queue.get(index) {
            Some(p) => p.to_path_buf(),
            None => {
                self.finish(events);
                return;
            }
        };

        if !self.host.package_exists(&path) {
            events.push(DriverEvent::ItemFailed {
                index,
                path: path.clone(),
                reason: UpimError::FileNotFound(path).to_string(),
            });
            let session = self.session.as_mut().unwrap();
            session.failed += 1;
            session.index += 1;
            session.phase = Phase::Deferred;
            return;
        }

        events.push(DriverEvent::ItemStarted {
            index,
            path: path.clone(),
        });

        let interactive = mode == RunMode::Interactive;
        match self.host.import_package(&path, interactive) {
            Ok(()) if interactive => {
                // ダイアログが開いた。open→close エッジの観測待ちに入る。
                let session = self.session.as_mut().unwrap();
                session.phase = Phase::WaitingForDialog { dialog_seen: false };
            }
            Ok(()) => {
                events.push(DriverEvent::ItemImported { index, path });
                let session = self.session.as_mut().unwrap();
                session.success += 1;
                session.index += 1;
                session.phase = Phase::Deferred;
            }
            Err(e) => {
                events.push(DriverEvent::ItemFailed {
                    index,
                    path,
                    reason: e.to_string(),
                });
                let session = self.session.as_mut().unwrap();
                session.failed += 1;
                session.index += 1;
                session.phase = Phase::Deferred;
            }
        }
    }

    /// ダイアログの開閉をポーリングする
    ///
    /// 完了を通知するのは立ち下がりエッジ（前回開いていて今回閉じている）
    /// のみ。ダイアログが一度も「開いている」と観測されないままインポートが
    /// 終わった場合、閉じるエッジは永遠に発生せずランは進まない。これは
    /// プレゼンス検出に固有の競合で、ポーリング間隔を短くすることでしか
    /// 緩和できない（`poll_interval_ms` 設定）。
    fn poll_dialog(&mut self, dialog_seen: bool, events: &mut Vec<DriverEvent>) {
        let open = self.host.import_dialog_open();

        if dialog_seen && !open {
            // ダイアログが閉じた（インポート完了またはキャンセル）
            let session = self.session.as_mut().unwrap();
            let index = session.index;
            session.success += 1;
            session.index += 1;
            session.phase = Phase::Deferred;

            let path = self
                .queue
                .get(index)
                .map(Path::to_path_buf)
                .unwrap_or_default();
            events.push(DriverEvent::ItemImported { index, path });
        } else if let Some(session) = self.session.as_mut() {
            session.phase = Phase::WaitingForDialog { dialog_seen: open };
        }
    }

    /// ランを完了して Idle に戻る
    fn finish(&mut self, events: &mut Vec<DriverEvent>) {
        if let Some(session) = self.session.take() {
            self.host.refresh_assets();
            events.push(DriverEvent::RunFinished(RunSummary {
                success: session.success,
                failed: session.failed,
            }));
        }
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
