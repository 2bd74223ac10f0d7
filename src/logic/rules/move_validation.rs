// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::pile::{Pile, PileKind};

use super::common::MoveRejection;
use super::{foundation, tableau};

/// `card` を先頭にした `run_len` 枚を `source` から `target` へ動かせるか検証する。
///
/// 副作用なしの純粋な判定。どんな入力でもパニックせず、合法か不正かに分ける。
/// 掴める束の形 (場札なら表向きの連なり、他は一番上の1枚) は呼び出し側が保証する。
pub fn check_move(
    card: &Card,
    source: &Pile,
    target: &Pile,
    run_len: usize,
) -> Result<(), MoveRejection> {
    if source.id() == target.id() {
        return Err(MoveRejection::SamePile);
    }

    let result = match target.kind() {
        PileKind::Foundation => foundation::check_move_to_foundation(card, target, run_len),
        PileKind::Tableau => tableau::check_move_to_tableau(card, target),
        PileKind::Stock | PileKind::Waste => Err(MoveRejection::TargetNotPlayable),
    };
    debug!(
        "[Rule Check] {} x{} from {:?} to {:?}: {:?}",
        card,
        run_len,
        source.id(),
        target.id(),
        result
    );
    result
}

pub fn can_move(card: &Card, source: &Pile, target: &Pile, run_len: usize) -> bool {
    check_move(card, source, target, run_len).is_ok()
}
