// src/components/selection.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::pile::PileId;

/// 掴んだカードの束（ドラッグ中の情報）だよ！🖱️➡️🃏
///
/// `start_index` から上のカードを `cards` に順番通りに持っている。
/// ドロップを処理したら、成功でも失敗でも捨てる。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub source: PileId,
    pub start_index: usize,
    pub cards: Vec<Card>,
}

impl Selection {
    /// 先頭のカード（ルール判定に使うやつ）。
    pub fn lead(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// `begin_selection` が返す引換券。`resolve_drop` に渡す。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionHandle(pub u32);
