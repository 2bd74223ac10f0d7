// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の進行状態だよ！🏆
///
/// `Dealing` は配っている一瞬だけ。配り終わったらすぐ `Playing` になる。
/// `Won` は終端状態で、新しいゲームを始めるまでそのまま。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Dealing,
    Playing,
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        matches!(self, GameStatus::Won)
    }
}
