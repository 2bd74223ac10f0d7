// src/logic/deck.rs

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// 1デッキの枚数。
pub const DECK_SIZE: usize = 52;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 並びは固定で、スートが外側 (Heart → Diamond → Club → Spade)、
/// ランクが内側 (A → K)。全部裏向き (`is_face_up: false`)。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates なので、乱数源が一様なら
/// 52! 通りの並びがどれも同じ確率で出る。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
