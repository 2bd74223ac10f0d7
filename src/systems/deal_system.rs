// src/systems/deal_system.rs

use std::collections::HashSet;

use log::info;

use crate::components::card::Card;
use crate::components::pile::{PileId, TABLEAU_COUNT};
use crate::error::GameError;
use crate::logic::deck::DECK_SIZE;
use crate::world::World;

/// 初期配置！シャッフル済みのデッキを場に配るよ 🎉
///
/// - 場札 i 列目 (0始まり) には i+1 枚。最後の1枚だけ表向き。
/// - 0列目から順に、デッキの先頭から取っていく（合計28枚）。
/// - 残り24枚はデッキの順番のまま、全部裏向きで山札へ。
/// - 組札と捨て札は空。手数は 0 に戻る。
///
/// 52種類ちょうどが揃っていないデッキは受け付けない。
pub fn deal(world: &mut World, deck: Vec<Card>) -> Result<(), GameError> {
    let distinct: HashSet<_> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    if deck.len() != DECK_SIZE || distinct.len() != DECK_SIZE {
        return Err(GameError::InvalidDeck(distinct.len().min(deck.len())));
    }

    world.reset();
    let mut cards = deck.into_iter();

    for (column, card_count) in (0..TABLEAU_COUNT).map(|i| (i, i + 1)) {
        let pile = world
            .pile_mut(PileId::Tableau(column as u8))
            .ok_or(GameError::InvalidPile(PileId::Tableau(column as u8)))?;
        for (card_in_column, card) in cards.by_ref().take(card_count).enumerate() {
            pile.add_card(card, card_in_column + 1 == card_count);
        }
    }

    let stock = world.stock_mut();
    for card in cards {
        stock.add_card(card, false);
    }

    info!(
        "Dealt a new game: {} cards in tableau, {} in stock.",
        world.tableau().iter().map(|p| p.len()).sum::<usize>(),
        world.stock().len()
    );
    Ok(())
}
