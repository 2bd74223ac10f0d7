// src/systems/move_card_system.rs
//! カードを掴む・置く処理。ルール判定は logic::rules、ここは World の更新担当だよ。

use log::{debug, warn};

use crate::components::pile::{PileId, PileKind};
use crate::components::selection::Selection;
use crate::error::GameError;
use crate::logic::rules::{check_move, MoveRejection};
use crate::world::World;

/// 移動が成功したときの付加情報。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    /// 移動元の場札で裏向きのカードがめくれたか。
    pub revealed: bool,
}

/// `pile` の `index` 番目のカードを掴む。
///
/// - 場札: 表向きの連なりの中のカードだけ。そこから一番上までが束になる。
/// - 捨て札・組札: 一番上の1枚だけ。
/// - 山札: 裏向きなので掴めない。
pub fn pick_up(world: &World, pile: PileId, index: usize) -> Result<Selection, GameError> {
    let source = world.pile(pile).ok_or(GameError::InvalidPile(pile))?;
    let invalid = GameError::InvalidSelection { pile, index };

    if index >= source.len() {
        return Err(invalid);
    }
    let eligible = match source.kind() {
        PileKind::Tableau => index >= source.face_up_run_start(),
        PileKind::Waste | PileKind::Foundation => index + 1 == source.len(),
        PileKind::Stock => false,
    };
    if !eligible || !source.cards()[index].is_face_up {
        return Err(invalid);
    }

    Ok(Selection {
        source: pile,
        start_index: index,
        cards: source.cards()[index..].to_vec(),
    })
}

/// 束がまだ掴んだときのまま場に残っていて、`target` に置けるか検証する。
pub fn validate_move(
    world: &World,
    selection: &Selection,
    target: PileId,
) -> Result<(), MoveRejection> {
    let lead = selection.lead().ok_or(MoveRejection::NoSelection)?;
    let source = world.pile(selection.source).ok_or(MoveRejection::StaleSelection)?;
    let target_pile = world.pile(target).ok_or(MoveRejection::TargetNotPlayable)?;

    let still_in_place = source.cards().get(selection.start_index..) == Some(selection.cards.as_slice());
    if !still_in_place {
        warn!("Selection from {:?} no longer matches the table.", selection.source);
        return Err(MoveRejection::StaleSelection);
    }

    check_move(lead, source, target_pile, selection.len())
}

/// 検証済みの束を動かす。移動元 → 移動先 (順番そのまま)、めくり、手数+1。
///
/// `validate_move` が通った後にだけ呼ぶこと。
pub fn apply_move(world: &mut World, selection: &Selection, target: PileId) -> MoveApplied {
    let Some(source) = world.pile_mut(selection.source) else {
        return MoveApplied { revealed: false };
    };
    let moved = source.remove_cards(&selection.cards);
    let revealed = source.kind() == PileKind::Tableau && source.reveal_top();

    if let Some(target_pile) = world.pile_mut(target) {
        target_pile.add_cards(moved);
    }
    world.increment_move_count();

    debug!(
        "Moved {} card(s) from {:?} to {:?} (revealed: {}).",
        selection.len(),
        selection.source,
        target,
        revealed
    );
    MoveApplied { revealed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    /// 場札0: [K♠(裏), Q♥, J♣]、場札1: [5♦(裏), K♦]、捨て札: [3♣, A♥]
    fn sample_world() -> World {
        let mut world = World::new();
        let t0 = world.pile_mut(PileId::Tableau(0)).unwrap();
        t0.add_card(Card::new(Suit::Spade, Rank::King), false);
        t0.add_card(Card::new(Suit::Heart, Rank::Queen), true);
        t0.add_card(Card::new(Suit::Club, Rank::Jack), true);
        let t1 = world.pile_mut(PileId::Tableau(1)).unwrap();
        t1.add_card(Card::new(Suit::Diamond, Rank::Five), false);
        t1.add_card(Card::new(Suit::Diamond, Rank::King), true);
        let waste = world.pile_mut(PileId::Waste).unwrap();
        waste.add_card(Card::new(Suit::Club, Rank::Three), true);
        waste.add_card(Card::new(Suit::Heart, Rank::Ace), true);
        world
    }

    #[test]
    fn pick_up_tableau_run() {
        let world = sample_world();
        let selection = pick_up(&world, PileId::Tableau(0), 1).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.lead().unwrap().rank, Rank::Queen);

        assert!(pick_up(&world, PileId::Tableau(0), 0).is_err(), "裏向きは掴めない");
        assert!(pick_up(&world, PileId::Tableau(0), 3).is_err());
        assert!(pick_up(&world, PileId::Tableau(2), 0).is_err(), "空の列");
    }

    #[test]
    fn pick_up_single_top_elsewhere() {
        let mut world = sample_world();
        assert!(pick_up(&world, PileId::Waste, 1).is_ok());
        assert!(pick_up(&world, PileId::Waste, 0).is_err(), "捨て札は一番上だけ");

        world
            .pile_mut(PileId::Stock)
            .unwrap()
            .add_card(Card::new(Suit::Spade, Rank::Two), false);
        assert!(pick_up(&world, PileId::Stock, 0).is_err(), "山札は掴めない");
        assert!(matches!(
            pick_up(&world, PileId::Foundation(5), 0),
            Err(GameError::InvalidPile(_))
        ));
    }

    #[test]
    fn move_run_and_reveal() {
        let mut world = sample_world();
        // Q♥ J♣ を K♦ の上へ…は同じ赤なので駄目
        let run = pick_up(&world, PileId::Tableau(0), 1).unwrap();
        assert_eq!(
            validate_move(&world, &run, PileId::Tableau(1)),
            Err(MoveRejection::SameColor)
        );

        // K♦ を空の列へ。下の 5♦ がめくれる
        let king = pick_up(&world, PileId::Tableau(1), 1).unwrap();
        assert!(validate_move(&world, &king, PileId::Tableau(2)).is_ok());
        let applied = apply_move(&mut world, &king, PileId::Tableau(2));
        assert!(applied.revealed);
        assert!(world.tableau()[1].top_card().unwrap().is_face_up);
        assert_eq!(world.tableau()[2].len(), 1);
        assert_eq!(world.move_count(), 1);
    }

    #[test]
    fn stale_selection_is_rejected() {
        let mut world = sample_world();
        let ace = pick_up(&world, PileId::Waste, 1).unwrap();
        world.pile_mut(PileId::Waste).unwrap().pop();
        assert_eq!(
            validate_move(&world, &ace, PileId::Foundation(0)),
            Err(MoveRejection::StaleSelection)
        );
    }

    #[test]
    fn waste_to_foundation_keeps_order_and_counts() {
        let mut world = sample_world();
        let ace = pick_up(&world, PileId::Waste, 1).unwrap();
        assert!(validate_move(&world, &ace, PileId::Foundation(0)).is_ok());
        let applied = apply_move(&mut world, &ace, PileId::Foundation(0));
        assert!(!applied.revealed, "捨て札はめくりの対象外");
        assert_eq!(world.foundations()[0].len(), 1);
        assert_eq!(world.waste().top_card().unwrap().rank, Rank::Three);
        assert!(world.waste().top_card().unwrap().is_face_up);
    }
}
