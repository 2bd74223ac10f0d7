// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を JS 側に JSON で渡すときに使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順がそのままデッキの生成順（Heart → Diamond → Club → Spade）になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord があるのでランクの大小比較 (`<`, `>`) もできる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// カードの色（赤か黒か）。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// 全スート。デッキ生成のループで使う。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランク (Ace..King)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// スートからカードの色を取得する関数。
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    /// 表示用の記号だよ。
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    }
}

impl Rank {
    /// 1 (Ace) 〜 13 (King) の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクに戻す。1..=13 以外は None！
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// 表示用のラベル (A, 2..10, J, Q, K)。
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[usize::from(self.value()) - 1]
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `suit` と `rank` は作ったら変わらない（カードの「正体」）。
/// - `is_face_up` だけがゲーム中に変わる。
///
/// 52枚の中で (suit, rank) の組は一意なので、カードの同一性はこの組で判定するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
        }
    }

    /// 表向きのカードを作る（テストや状態復元で便利）。
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: true,
        }
    }

    /// 表裏をひっくり返す。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn symbol(&self) -> &'static str {
        self.suit.symbol()
    }

    pub fn rank_label(&self) -> &'static str {
        self.rank.label()
    }

    /// 向きを無視して同じカードかどうか。
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.symbol())
    }
}
