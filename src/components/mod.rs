// src/components/mod.rs

// ゲームの「データ部品」たち。ルールはここには書かないよ！
pub mod card;
pub mod game_state;
pub mod pile;
pub mod selection;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use pile::{Pile, PileId, PileKind, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use selection::{Selection, SelectionHandle};
