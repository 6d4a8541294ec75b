//! コマンド出力ユーティリティ

use crate::driver::RunSummary;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// ラン結果のサマリ表示
pub struct SummaryLine {
    pub prefix: String,
    pub message: String,
}

impl SummaryLine {
    pub fn format(summary: RunSummary) -> Self {
        match (summary.success, summary.failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!(
                    "{} imported, {} failed",
                    summary.success.green(),
                    f.red()
                ),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} package(s) imported", s.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No packages imported".to_string(),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}

/// `--json` 用のラン結果レポート
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

impl JsonReport {
    pub fn new(total: usize, summary: RunSummary) -> Self {
        Self {
            total,
            success: summary.success,
            failed: summary.failed,
        }
    }

    pub fn print(&self) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        println!("{json}");
        Ok(())
    }
}

/// y/N 確認プロンプト
///
/// 空入力・y/yes 以外はすべて拒否として扱う。
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
