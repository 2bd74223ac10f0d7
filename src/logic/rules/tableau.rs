// src/logic/rules/tableau.rs
//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;

use super::common::MoveRejection;

/// `card` (束の先頭) を場札 `tableau` の一番上に置けるかチェックする。
///
/// 空の列には K だけ。そうでなければ色違いでランクがちょうど1つ下。
pub fn check_move_to_tableau(card: &Card, tableau: &Pile) -> Result<(), MoveRejection> {
    match tableau.top_card() {
        None if card.rank == Rank::King => Ok(()),
        None => Err(MoveRejection::NeedsKing),
        Some(top) if top.color() == card.color() => Err(MoveRejection::SameColor),
        Some(top) if card.rank.value() + 1 != top.rank.value() => Err(MoveRejection::WrongRank),
        Some(_) => Ok(()),
    }
}

/// 場札の形が正しいか。裏向きは下にだけあって、表向きの部分は
/// ランクが1ずつ下がりながら色が交互になっていること。
pub fn is_well_formed_tableau(tableau: &Pile) -> bool {
    let run_start = tableau.face_up_run_start();
    let cards = tableau.cards();
    cards[..run_start].iter().all(|c| !c.is_face_up)
        && cards[run_start..]
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| {
                lower.color() != upper.color() && upper.rank.value() + 1 == lower.rank.value()
            })
}
