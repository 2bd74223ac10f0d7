// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::world::World;

/// 勝利条件をチェックして、初めて満たしたときだけ `Won` に切り替えるよ！🏆
///
/// 切り替えた瞬間だけ true を返す。もう `Won` なら何度呼んでも false。
pub fn evaluate(world: &World, status: &mut GameStatus) -> bool {
    if *status != GameStatus::Playing {
        return false;
    }
    if check_win_condition(world.foundations()) {
        info!("All foundations complete after {} moves. Game won!", world.move_count());
        *status = GameStatus::Won;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
    use crate::components::pile::PileId;

    fn won_world() -> World {
        let mut world = World::new();
        for (i, suit) in ALL_SUITS.iter().enumerate() {
            let foundation = world.pile_mut(PileId::Foundation(i as u8)).unwrap();
            for rank in ALL_RANKS {
                foundation.add_card(Card::new(*suit, rank), true);
            }
        }
        world
    }

    #[test]
    fn switches_to_won_exactly_once() {
        let world = won_world();
        let mut status = GameStatus::Playing;
        assert!(evaluate(&world, &mut status));
        assert_eq!(status, GameStatus::Won);
        assert!(!evaluate(&world, &mut status), "二回目は知らせない");
    }

    #[test]
    fn partial_fill_is_not_a_win() {
        let mut world = won_world();
        world.pile_mut(PileId::Foundation(2)).unwrap().pop();
        let mut status = GameStatus::Playing;
        assert!(!evaluate(&world, &mut status));
        assert_eq!(status, GameStatus::Playing);
    }
}
