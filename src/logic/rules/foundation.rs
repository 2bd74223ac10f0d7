// src/logic/rules/foundation.rs
//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;

use super::common::MoveRejection;

/// `card` を先頭にした `run_len` 枚の束を組札 `foundation` に置けるかチェックする。
///
/// - 一度に置けるのは1枚だけ。
/// - 空なら A だけ。
/// - それ以外は一番上と同じスートで、ランクがちょうど1つ上。
pub fn check_move_to_foundation(
    card: &Card,
    foundation: &Pile,
    run_len: usize,
) -> Result<(), MoveRejection> {
    if run_len > 1 {
        return Err(MoveRejection::MultipleCardsToFoundation);
    }
    match foundation.top_card() {
        None if card.rank == Rank::Ace => Ok(()),
        None => Err(MoveRejection::NeedsAce),
        Some(top) if top.suit != card.suit => Err(MoveRejection::WrongSuit),
        Some(top) if card.rank.value() != top.rank.value() + 1 => Err(MoveRejection::WrongRank),
        Some(_) => Ok(()),
    }
}

/// 組札の中身が「同じスートの A, 2, ..., k」になっているか（空も OK）。
pub fn is_well_formed_foundation(foundation: &Pile) -> bool {
    let cards = foundation.cards();
    let Some(first) = cards.first() else {
        return true;
    };
    cards
        .iter()
        .enumerate()
        .all(|(i, c)| c.suit == first.suit && usize::from(c.rank.value()) == i + 1)
}
