// src/protocol.rs

// このファイルは、Rust (WASM) と JS の表示側でやり取りするデータの形を定義するよ！💌
// 表示側はこれを受け取って描き直すだけで、ゲームの状態を直接いじることはない。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardColor, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::pile::{Pile, PileId};
use crate::game::{Game, MoveResult};
use crate::logic::rules::MoveRejection;

/// カード1枚の状態。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub color: CardColor,
    /// "A♥" みたいな表示用の文字列。
    pub label: String,
    pub is_face_up: bool,
    /// そのスタックの中で何番目に積まれているか (0が一番下)。
    pub position_in_pile: u8,
}

impl CardData {
    fn from_card(card: &Card, position_in_pile: usize) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            color: card.color(),
            label: card.to_string(),
            is_face_up: card.is_face_up,
            position_in_pile: position_in_pile as u8,
        }
    }
}

/// スタック1つ分。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileData {
    pub id: PileId,
    pub cards: Vec<CardData>,
}

impl From<&Pile> for PileData {
    fn from(pile: &Pile) -> Self {
        Self {
            id: pile.id(),
            cards: pile
                .cards()
                .iter()
                .enumerate()
                .map(|(i, c)| CardData::from_card(c, i))
                .collect(),
        }
    }
}

/// ゲームの状態全体。操作のたびに表示側へ渡す。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub piles: Vec<PileData>,
    pub move_count: u32,
    pub status: GameStatus,
    pub can_undo: bool,
}

impl From<&Game> for GameStateData {
    fn from(game: &Game) -> Self {
        Self {
            piles: game.world().piles().map(PileData::from).collect(),
            move_count: game.move_count(),
            status: game.status(),
            can_undo: game.can_undo(),
        }
    }
}

/// ドロップの結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcomeData {
    pub accepted: bool,
    pub revealed: bool,
    pub won: bool,
    pub reason: Option<MoveRejection>,
    pub move_count: u32,
}

impl MoveOutcomeData {
    pub fn new(result: MoveResult, move_count: u32) -> Self {
        match result {
            MoveResult::Moved { revealed, won } => Self {
                accepted: true,
                revealed,
                won,
                reason: None,
                move_count,
            },
            MoveResult::Rejected(reason) => Self {
                accepted: false,
                revealed: false,
                won: false,
                reason: Some(reason),
                move_count,
            },
        }
    }
}
