//! upim quick コマンド
//!
//! フォルダ配下の `.unitypackage` を再帰的に探索し、すべて unattended で
//! インポートする。インポート自体はバッチウィンドウと同じキュードライバを
//! 通すため、アイテム単位の失敗はカウントされランは継続する。

use crate::config::UpimConfig;
use crate::driver::{DriverEvent, ImportDriver, RunMode, RunSummary};
use crate::host::{EditorHost, UnityHost};
use crate::output::{self, JsonReport, SummaryLine};
use crate::scan;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// Folder to scan recursively for .unitypackage files
    pub folder: PathBuf,

    /// Unity editor binary (overrides UPIM_EDITOR and config file)
    #[arg(long)]
    pub editor: Option<PathBuf>,

    /// Unity project path (overrides UPIM_PROJECT and config file)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Output the run summary in JSON format
    #[arg(long)]
    pub json: bool,
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

    // 2. パッケージ探索
    let packages = scan::find_packages(&args.folder);
    if packages.is_empty() {
        println!(
            "{} No .unitypackage files found in {}",
            "•".yellow(),
            args.folder.display()
        );
        return Ok(());
    }

    // 3. 確認
    if !args.yes {
        let prompt = format!(
            "Found {} package(s) in {}. Import all?",
            packages.len(),
            args.folder.display()
        );
        if !output::confirm(&prompt).map_err(|e| e.to_string())? {
            println!("Aborted");
            return Ok(());
        }
    }

    // 4. ホストとドライバを構築
    let editor = config.resolve_editor().map_err(|e| e.to_string())?;
    let host =
        UnityHost::new(editor, config.resolve_project()).map_err(|e| e.to_string())?;
    let mut driver = ImportDriver::new(host);

    // 5. プログレスバー付きで順次インポート
    let pb = ProgressBar::new(packages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let summary = import_all(&mut driver, &packages, |event| match event {
        DriverEvent::ItemStarted { path, .. } => {
            pb.set_message(file_name(path));
        }
        DriverEvent::ItemImported { .. } => {
            pb.inc(1);
        }
        DriverEvent::ItemFailed { path, reason, .. } => {
            pb.println(format!("{} {}: {}", "✗".red(), file_name(path), reason));
            pb.inc(1);
        }
        DriverEvent::RunFinished(_) => {}
    })
    .map_err(|e| e.to_string())?;
    pb.finish_and_clear();

    // 6. サマリ出力
    if args.json {
        JsonReport::new(packages.len(), summary).print()?;
    } else {
        SummaryLine::format(summary).print();
    }
    Ok(())
}

/// 全パッケージをキュードライバ経由で unattended インポートする
///
/// 発行されたイベントを `on_event` に順に渡す。
fn import_all<H, F>(
    driver: &mut ImportDriver<H>,
    packages: &[PathBuf],
    mut on_event: F,
) -> crate::error::Result<RunSummary>
where
    H: EditorHost,
    F: FnMut(&DriverEvent),
{
    for package in packages {
        driver.enqueue(package.clone());
    }

    let mut pending = driver.start(RunMode::Unattended)?;
    loop {
        let mut finished = None;
        for event in &pending {
            if let DriverEvent::RunFinished(summary) = event {
                finished = Some(*summary);
            }
            on_event(event);
        }
        if let Some(summary) = finished {
            return Ok(summary);
        }
        pending = driver.tick();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "quick_test.rs"]
mod tests;
