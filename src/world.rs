// src/world.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::pile::{Pile, PileId, FOUNDATION_COUNT, TABLEAU_COUNT};

/// World（ワールド）は、場にある13個のスタックと手数をまとめたものだよ！🌍
///
/// 取り消し (undo) のスナップショットはこの World を丸ごと `clone()` したもの。
/// Card は値なので、clone すれば完全に独立したコピーになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    tableau: [Pile; TABLEAU_COUNT],
    foundations: [Pile; FOUNDATION_COUNT],
    stock: Pile,
    waste: Pile,
    move_count: u32,
}

impl World {
    /// 全部空っぽの World を作る。
    pub fn new() -> Self {
        World {
            tableau: std::array::from_fn(|i| Pile::new(PileId::Tableau(i as u8))),
            foundations: std::array::from_fn(|i| Pile::new(PileId::Foundation(i as u8))),
            stock: Pile::new(PileId::Stock),
            waste: Pile::new(PileId::Waste),
            move_count: 0,
        }
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Tableau(i) => self.tableau.get(usize::from(i)),
            PileId::Foundation(i) => self.foundations.get(usize::from(i)),
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Tableau(i) => self.tableau.get_mut(usize::from(i)),
            PileId::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
        }
    }

    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    /// 13個のスタックを `PileId::all()` の順で回す。
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    /// 場にある全カード。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.piles().flat_map(|p| p.cards().iter())
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn increment_move_count(&mut self) {
        self.move_count += 1;
    }

    /// 全スタックを空にして手数も 0 に戻す。
    pub(crate) fn reset(&mut self) {
        *self = World::new();
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::pile::PILE_COUNT;

    #[test]
    fn new_world_is_empty() {
        let world = World::new();
        assert_eq!(world.piles().count(), PILE_COUNT);
        assert_eq!(world.cards().count(), 0);
        assert_eq!(world.move_count(), 0);
    }

    #[test]
    fn piles_are_addressed_by_id() {
        let world = World::new();
        for id in PileId::all() {
            assert_eq!(world.pile(id).map(|p| p.id()), Some(id));
        }
        assert!(world.pile(PileId::Tableau(7)).is_none());
        assert!(world.pile(PileId::Foundation(9)).is_none());
    }

    #[test]
    fn clone_is_independent() {
        let mut world = World::new();
        world
            .pile_mut(PileId::Tableau(3))
            .unwrap()
            .add_card(Card::new(Suit::Club, Rank::Five), false);
        let snapshot = world.clone();

        world.pile_mut(PileId::Tableau(3)).unwrap().reveal_top();
        world.increment_move_count();

        assert!(!snapshot.tableau()[3].cards()[0].is_face_up, "スナップショットは元のまま");
        assert_eq!(snapshot.move_count(), 0);
        assert_ne!(snapshot, world);
    }
}
