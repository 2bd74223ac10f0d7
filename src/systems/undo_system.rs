// src/systems/undo_system.rs
//! 取り消し (undo) 用のスナップショット履歴。

use std::collections::VecDeque;

use log::debug;

use crate::world::World;

/// World のスナップショットを積んでおくスタックだよ。
///
/// 上限なし (`limit: None`) がデフォルト。上限があるときは古いものから捨てる。
/// やり直し (redo) は無い。
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: VecDeque<World>,
    limit: Option<usize>,
}

impl UndoHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// 変更する「前」の World を積む。
    pub fn push(&mut self, snapshot: World) {
        if self.limit == Some(0) {
            return;
        }
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
                debug!("Undo history over limit {}, dropped oldest snapshot.", limit);
            }
        }
    }

    /// 一番新しいスナップショットを取り出す。
    pub fn pop(&mut self) -> Option<World> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_moves(n: u32) -> World {
        let mut world = World::new();
        for _ in 0..n {
            world.increment_move_count();
        }
        world
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut history = UndoHistory::new(None);
        history.push(world_with_moves(0));
        history.push(world_with_moves(1));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|w| w.move_count()), Some(1));
        assert_eq!(history.pop().map(|w| w.move_count()), Some(0));
        assert!(history.pop().is_none());
    }

    #[test]
    fn unlimited_by_default() {
        let mut history = UndoHistory::default();
        for i in 0..500 {
            history.push(world_with_moves(i % 3));
        }
        assert_eq!(history.len(), 500);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut history = UndoHistory::new(Some(2));
        for i in 0..5 {
            history.push(world_with_moves(i));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|w| w.move_count()), Some(4));
        assert_eq!(history.pop().map(|w| w.move_count()), Some(3));

        let mut disabled = UndoHistory::new(Some(0));
        disabled.push(World::new());
        assert!(disabled.is_empty());
    }
}
