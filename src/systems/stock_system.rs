// src/systems/stock_system.rs
//! 山札をクリックしたときの処理（1枚めくる／捨て札を山札に戻す）。

use log::{debug, info};

use crate::components::card::Card;
use crate::logic::rules::stock_waste;
use crate::world::World;

/// 山札クリックの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// 1枚めくって捨て札に置いた（1手）。
    Drew(Card),
    /// 捨て札を全部山札に戻した（手数には数えない）。
    Recycled(usize),
    /// 山札も捨て札も空なので何もしなかった。
    Nothing,
}

/// 次のクリックで何かが起きるか（スナップショットを取るかどうかの判断用）。
pub fn can_draw_or_recycle(world: &World) -> bool {
    let stock_is_empty = world.stock().is_empty();
    stock_waste::can_deal_from_stock(stock_is_empty)
        || stock_waste::can_recycle_waste(stock_is_empty, world.waste().is_empty())
}

/// 山札の一番上を表にして捨て札へ。山札が空なら捨て札を山札へ戻す。
///
/// 戻すときは捨て札の一番上から順に裏返して積むので、
/// 山札は最初にめくったときと同じ順番に戻る。
pub fn draw_from_stock(world: &mut World) -> DrawOutcome {
    let stock_is_empty = world.stock().is_empty();

    if stock_waste::can_deal_from_stock(stock_is_empty) {
        let Some(mut card) = world.stock_mut().pop() else {
            return DrawOutcome::Nothing;
        };
        card.flip();
        world.waste_mut().add_card(card, true);
        world.increment_move_count();
        debug!("Drew {} from stock.", card);
        return DrawOutcome::Drew(card);
    }

    if stock_waste::can_recycle_waste(stock_is_empty, world.waste().is_empty()) {
        let mut recycled = 0;
        while let Some(mut card) = world.waste_mut().pop() {
            card.flip();
            world.stock_mut().add_card(card, false);
            recycled += 1;
        }
        info!("Recycled {} cards from waste back to stock.", recycled);
        return DrawOutcome::Recycled(recycled);
    }

    debug!("Stock and waste are both empty. Nothing to draw.");
    DrawOutcome::Nothing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::pile::PileId;

    fn world_with_stock(cards: &[(Suit, Rank)]) -> World {
        let mut world = World::new();
        for &(suit, rank) in cards {
            world
                .pile_mut(PileId::Stock)
                .unwrap()
                .add_card(Card::new(suit, rank), false);
        }
        world
    }

    #[test]
    fn draw_moves_top_card_face_up() {
        let mut world = world_with_stock(&[(Suit::Club, Rank::Two), (Suit::Heart, Rank::Nine)]);
        let outcome = draw_from_stock(&mut world);

        assert!(matches!(outcome, DrawOutcome::Drew(c) if c.rank == Rank::Nine));
        assert_eq!(world.stock().len(), 1);
        let top = world.waste().top_card().unwrap();
        assert_eq!((top.suit, top.rank, top.is_face_up), (Suit::Heart, Rank::Nine, true));
        assert_eq!(world.move_count(), 1);
    }

    #[test]
    fn recycle_restores_original_order_without_counting() {
        let cards = [(Suit::Club, Rank::Two), (Suit::Heart, Rank::Nine), (Suit::Spade, Rank::Queen)];
        let mut world = world_with_stock(&cards);
        let original_stock = world.stock().clone();

        for _ in 0..cards.len() {
            draw_from_stock(&mut world);
        }
        assert!(world.stock().is_empty());
        let count_before = world.move_count();

        assert_eq!(draw_from_stock(&mut world), DrawOutcome::Recycled(3));
        assert!(world.waste().is_empty());
        assert_eq!(world.move_count(), count_before, "戻しは手数に数えない");
        assert_eq!(world.stock(), &original_stock, "山札は元の順番・裏向きに戻る");
    }

    #[test]
    fn nothing_when_both_empty() {
        let mut world = World::new();
        assert!(!can_draw_or_recycle(&world));
        assert_eq!(draw_from_stock(&mut world), DrawOutcome::Nothing);
        assert_eq!(world, World::new());
    }
}
