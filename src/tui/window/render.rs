//! バッチインポータウィンドウの描画処理

use super::state::{display_name, BatchApp, Overlay};
use crate::host::EditorHost;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

/// 中央寄せのダイアログ領域を計算
fn dialog_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// UI をレンダリング
pub(super) fn draw<H: EditorHost>(f: &mut Frame, app: &mut BatchApp<H>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // タイトル
            Constraint::Length(2), // モード表示
            Constraint::Min(4),    // キュー一覧
            Constraint::Length(6), // ログ
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    // タイトル
    let title = Paragraph::new("Batch Unity Package Importer")
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    render_mode_line(f, app, chunks[1]);
    render_queue(f, app, chunks[2]);
    render_log(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
    render_overlay(f, app);
}

/// モード表示と実行状態
fn render_mode_line<H: EditorHost>(f: &mut Frame, app: &BatchApp<H>, area: Rect) {
    let text = if let Some(progress) = app.driver.progress() {
        let current = app
            .driver
            .current_path()
            .map(display_name)
            .unwrap_or_default();
        let hint = if app.interactive {
            " · choose items in the import dialog"
        } else {
            ""
        };
        format!(
            "Importing... ({}/{}) {}{}",
            (progress.index + 1).min(progress.total),
            progress.total,
            current,
            hint
        )
    } else if app.interactive {
        "Mode: interactive · each package opens an import dialog".to_string()
    } else {
        "Mode: unattended · all packages are imported automatically".to_string()
    };

    let style = if app.driver.is_running() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Paragraph::new(text).style(style).wrap(Wrap { trim: true });
    f.render_widget(line, area);
}

/// キュー一覧
fn render_queue<H: EditorHost>(f: &mut Frame, app: &mut BatchApp<H>, area: Rect) {
    let items: Vec<ListItem> = app
        .driver
        .queue()
        .iter()
        .enumerate()
        .map(|(i, path)| ListItem::new(format!("{:>3}  {}", i + 1, path.display())))
        .collect();

    let title = format!("Package List ({})", app.driver.queue().len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// ログ表示（末尾数行）
fn render_log<H: EditorHost>(f: &mut Frame, app: &BatchApp<H>, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let text = app.log[start..].join("\n");

    let log = Paragraph::new(text)
        .block(Block::default().title("Log").borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(log, area);
}

/// ヘルプ表示
fn render_help<H: EditorHost>(f: &mut Frame, app: &BatchApp<H>, area: Rect) {
    let text = if app.driver.is_running() {
        " importing... input is disabled until the run finishes"
    } else {
        " a: add file · f: add folder · x: remove · c: clear · i: mode · s: import all · q: quit"
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// モーダルオーバーレイ
fn render_overlay<H: EditorHost>(f: &mut Frame, app: &BatchApp<H>) {
    let (title, body) = match &app.overlay {
        Overlay::None => return,
        Overlay::AddPath(input) => (
            "Add Package",
            format!("Path to .unitypackage:\n{input}_\n\nenter: add · esc: cancel"),
        ),
        Overlay::AddFolder(input) => (
            "Add Folder",
            format!("Folder to scan:\n{input}_\n\nenter: add · esc: cancel"),
        ),
        Overlay::ConfirmStart => {
            let count = app.driver.queue().len();
            let note = if app.interactive {
                "\nImport dialogs will open one at a time."
            } else {
                ""
            };
            (
                "Confirm Import",
                format!("Import {count} package(s)?{note}\n\ny: import · n: cancel"),
            )
        }
        Overlay::Notice(message) => ("Notice", format!("{message}\n\nany key: close")),
        Overlay::Summary(summary) => (
            "Import Complete",
            format!(
                "Imported: {}\nFailed: {}\n\nany key: close",
                summary.success, summary.failed
            ),
        ),
    };

    let area = dialog_rect(52, 8, f.area());
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(body)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(dialog, area);
}
