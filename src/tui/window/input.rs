//! バッチインポータウィンドウの入力処理

use super::state::{BatchApp, Overlay};
use crate::driver::RunMode;
use crate::host::EditorHost;
use crate::scan;
use crossterm::event::KeyCode;
use std::path::{Path, PathBuf};

impl<H: EditorHost> BatchApp<H> {
    /// キー入力を処理する
    pub fn handle_key(&mut self, code: KeyCode) {
        let overlay = std::mem::replace(&mut self.overlay, Overlay::None);
        match overlay {
            Overlay::AddPath(input) => self.handle_input_key(code, input, false),
            Overlay::AddFolder(input) => self.handle_input_key(code, input, true),
            Overlay::ConfirmStart => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.start_run(),
                // n / Esc / その他はキャンセル
                _ => {}
            },
            // 通知とサマリは任意のキーで閉じる
            Overlay::Notice(_) | Overlay::Summary(_) => {}
            Overlay::None => self.handle_main_key(code),
        }
    }

    /// パス入力オーバーレイのキー処理
    fn handle_input_key(&mut self, code: KeyCode, mut input: String, folder: bool) {
        let restore = |input: String| {
            if folder {
                Overlay::AddFolder(input)
            } else {
                Overlay::AddPath(input)
            }
        };
        match code {
            KeyCode::Enter => {
                if folder {
                    self.commit_add_folder(&input);
                } else {
                    self.commit_add_path(&input);
                }
            }
            KeyCode::Esc => {}
            KeyCode::Char(c) => {
                input.push(c);
                self.overlay = restore(input);
            }
            KeyCode::Backspace => {
                input.pop();
                self.overlay = restore(input);
            }
            _ => self.overlay = restore(input),
        }
    }

    /// メイン画面のキー処理
    fn handle_main_key(&mut self, code: KeyCode) {
        // ラン実行中は編集も終了も受け付けない
        if self.driver.is_running() {
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.overlay = Overlay::AddPath(String::new()),
            KeyCode::Char('f') => self.overlay = Overlay::AddFolder(String::new()),
            KeyCode::Char('i') => self.interactive = !self.interactive,
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(index) = self.list_state.selected() {
                    self.driver.remove_at(index);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('c') => {
                self.driver.clear();
                self.clamp_selection();
            }
            KeyCode::Char('s') | KeyCode::Enter => self.request_start(),
            KeyCode::Up | KeyCode::Char('k') => {
                let current = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(current.saturating_sub(1)));
                self.clamp_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let current = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(current + 1));
                self.clamp_selection();
            }
            _ => {}
        }
    }

    /// Import All の確認を要求する
    fn request_start(&mut self) {
        if self.driver.queue().is_empty() {
            self.overlay = Overlay::Notice("Package list is empty".to_string());
        } else {
            self.overlay = Overlay::ConfirmStart;
        }
    }

    /// 確認済みランを開始する
    fn start_run(&mut self) {
        let mode = if self.interactive {
            RunMode::Interactive
        } else {
            RunMode::Unattended
        };
        match self.driver.start(mode) {
            Ok(events) => self.apply_events(events),
            Err(e) => self.overlay = Overlay::Notice(e.to_string()),
        }
    }

    /// パス入力を確定してキューへ追加する
    fn commit_add_path(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        if !self.driver.enqueue(PathBuf::from(trimmed)) {
            // 重複は黙ってスキップ
            return;
        }
        self.ensure_selection();
    }

    /// フォルダ入力を確定して配下のパッケージを追加する
    fn commit_add_folder(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        let packages = scan::find_packages(Path::new(trimmed));
        if packages.is_empty() {
            self.overlay = Overlay::Notice(format!(
                "No .unitypackage files found in {trimmed}"
            ));
            return;
        }
        for package in packages {
            self.driver.enqueue(package);
        }
        self.ensure_selection();
    }

    fn ensure_selection(&mut self) {
        if self.list_state.selected().is_none() && !self.driver.queue().is_empty() {
            self.list_state.select(Some(0));
        }
    }
}
