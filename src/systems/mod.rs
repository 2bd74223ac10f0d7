// src/systems/mod.rs
//! World を書き換える処理たち。どれも1回の呼び出しで最後までやりきるよ。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod undo_system;
pub mod win_condition_system;

pub use stock_system::DrawOutcome;
pub use undo_system::UndoHistory;
