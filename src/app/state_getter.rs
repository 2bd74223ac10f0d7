// src/app/state_getter.rs
//! Gets the current game state and converts it to JSON.

use log::{debug, error};

use crate::error::GameError;
use crate::game::Game;
use crate::protocol::GameStateData;

/// ゲームの状態を JSON 文字列にして返します。
pub fn get_state_json(game: &Game) -> Result<String, GameError> {
    let data = GameStateData::from(game);
    debug!(
        "Collected {} piles at move {}.",
        data.piles.len(),
        data.move_count
    );
    serde_json::to_string(&data).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        GameError::Protocol(e)
    })
}
