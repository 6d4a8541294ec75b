use clap::{Parser, Subcommand};

use crate::commands::{batch, quick};

#[derive(Debug, Parser)]
#[command(name = "upim")]
#[command(about = "Batch Unity package importer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// バッチインポータウィンドウ（TUI）を開く
    Batch(batch::Args),

    /// フォルダ内の全パッケージを即時インポート
    Quick(quick::Args),
}
