// src/logic/rules/common.rs
//! ルール判定で共通して使う型を置くよ。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 移動が認められなかった理由。
///
/// 不正な移動はエラーじゃなくて「何も起きない」扱いだけど、
/// どうして弾かれたのかはログや UI のために残しておく。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("source and target are the same pile")]
    SamePile,
    #[error("only one card at a time may go to a foundation")]
    MultipleCardsToFoundation,
    #[error("an empty foundation only accepts an Ace")]
    NeedsAce,
    #[error("an empty tableau column only accepts a King")]
    NeedsKing,
    #[error("foundation cards must share one suit")]
    WrongSuit,
    #[error("rank does not continue the pile")]
    WrongRank,
    #[error("tableau cards must alternate colour")]
    SameColor,
    #[error("cards cannot be dropped on this pile")]
    TargetNotPlayable,
    #[error("selection no longer matches the table")]
    StaleSelection,
    #[error("nothing is selected")]
    NoSelection,
}
