// src/logic/rules/win_condition.rs
//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::ALL_RANKS;
use crate::components::pile::{Pile, FOUNDATION_COUNT};

/// 4つの組札が全部13枚ずつになっていればクリア！🏆
pub fn check_win_condition(foundations: &[Pile]) -> bool {
    foundations.len() == FOUNDATION_COUNT
        && foundations.iter().all(|f| f.len() == ALL_RANKS.len())
}
