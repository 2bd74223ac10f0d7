// src/components/pile.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// 場札の列数。
pub const TABLEAU_COUNT: usize = 7;
/// 組札の数。
pub const FOUNDATION_COUNT: usize = 4;
/// 場の全スタック数 (7 + 4 + 1 + 1)。
pub const PILE_COUNT: usize = TABLEAU_COUNT + FOUNDATION_COUNT + 2;

/// カードを置く場所の種類だよ。積み方のルールはこれで決まる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Tableau,
    Foundation,
    Stock,
    Waste,
}

/// どのスタックかを特定する ID だよ。
///
/// JSON では `{"Tableau":3}` や `"Waste"` みたいな形になる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// 場札 (Tableau)。列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。番号 (0-3) を持つ。スートは最初に置かれた A で決まる。
    Foundation(u8),
    /// 山札 (Stock)。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl PileId {
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Tableau(_) => PileKind::Tableau,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
        }
    }

    /// 範囲外のインデックスを持っていないか。
    pub fn is_valid(self) -> bool {
        match self {
            PileId::Tableau(i) => usize::from(i) < TABLEAU_COUNT,
            PileId::Foundation(i) => usize::from(i) < FOUNDATION_COUNT,
            PileId::Stock | PileId::Waste => true,
        }
    }

    /// 全13スタックの ID を固定の順番で返すよ (Stock, Waste, Foundation 0-3, Tableau 0-6)。
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(PileId::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(PileId::Tableau))
    }
}

/// カードの山そのもの。index 0 が一番下、最後の要素が一番上だよ。
///
/// ここではルールのチェックは一切しない！ただの入れ物。
/// 置けるかどうかの判断は `logic::rules` の仕事だよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 向きをセットしてから一番上に積む。カードの持ち主はこのスタックになる。
    pub fn add_card(&mut self, mut card: Card, face_up: bool) {
        card.is_face_up = face_up;
        self.cards.push(card);
    }

    /// 同じカード (suit, rank) を探して取り除く。無ければ何もしないで None。
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.same_identity(card))?;
        Some(self.cards.remove(index))
    }

    /// 並び順を保ったまま、全部表向きで積む。
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.add_card(card, true);
        }
    }

    /// 順番に `remove_card` する。取り除けたカードだけ返すよ。
    pub fn remove_cards(&mut self, cards: &[Card]) -> Vec<Card> {
        cards.iter().filter_map(|c| self.remove_card(c)).collect()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 一番上のカードを取り出す。
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 一番上から続く表向きカードの連なりが始まる位置。
    /// 表向きが一枚も無ければ `len()` を返す。
    pub fn face_up_run_start(&self) -> usize {
        self.cards
            .iter()
            .rposition(|c| !c.is_face_up)
            .map_or(0, |i| i + 1)
    }

    /// 一番上が裏向きなら表にする。めくったら true。
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up => {
                top.flip();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
