//! バッチインポータウィンドウ
//!
//! キューの編集・モード切り替え・Import All を行うメイン画面。
//!
//! ## モジュール構成
//!
//! - `state`: アプリケーション状態（BatchApp, Overlay）
//! - `input`: キー入力処理
//! - `render`: 画面描画
//!
//! イベントループはポーリング間隔をタイムアウトにした `event::poll` で回り、
//! 1周ごとにドライバの `tick()` を1回駆動する。ラン実行中のダイアログ監視は
//! この周期で行われる。

mod input;
mod render;
mod state;

use crate::driver::ImportDriver;
use crate::host::EditorHost;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use state::BatchApp;
use std::io::{self, stdout};
use std::time::Duration;

/// TUI を実行
pub fn run<H: EditorHost>(
    driver: ImportDriver<H>,
    interactive: bool,
    poll_interval: Duration,
) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = BatchApp::new(driver, interactive);

    // メインループ
    while !app.should_quit {
        terminal.draw(|f| render::draw(f, &mut app))?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        app.pump_driver();
    }

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
