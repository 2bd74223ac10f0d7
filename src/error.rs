// src/error.rs

use thiserror::Error;

use crate::components::pile::PileId;

/// 境界（JS 側との受け渡しや設定の読み込み）で起きるエラーだよ。
///
/// ゲームのルール違反はここには来ない。不正な移動は「何も起きない」で表すからね。
#[derive(Debug, Error)]
pub enum GameError {
    #[error("pile {0:?} does not exist")]
    InvalidPile(PileId),

    #[error("card {index} of {pile:?} cannot be picked up")]
    InvalidSelection { pile: PileId, index: usize },

    #[error("a deal needs exactly 52 distinct cards, got {0}")]
    InvalidDeck(usize),

    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("malformed message: {0}")]
    Protocol(#[source] serde_json::Error),
}
