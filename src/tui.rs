//! バッチインポータウィンドウ（TUI）

pub mod window;
