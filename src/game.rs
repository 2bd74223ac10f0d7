// src/game.rs

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::pile::{Pile, PileId};
use crate::components::selection::{Selection, SelectionHandle};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::logic::rules::{check_win_condition, MoveRejection};
use crate::systems::move_card_system;
use crate::systems::stock_system::{self, DrawOutcome};
use crate::systems::undo_system::UndoHistory;
use crate::systems::{deal_system, win_condition_system};
use crate::world::World;

/// 表示側に知らせる出来事。`Game::drain_events` で順番に受け取ってね。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 新しく配り直した。
    NewGame,
    /// どこかのスタックか手数が変わった。描き直しの合図。
    StateChanged { move_count: u32 },
    /// クリア！1ゲームにつき1回だけ。
    Won { move_count: u32 },
}

/// 置こうとした結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    Moved { revealed: bool, won: bool },
    Rejected(MoveRejection),
}

impl MoveResult {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveResult::Moved { .. })
    }
}

/// ゲーム本体だよ！🃏
///
/// 1つの操作（めくる、置く、取り消す、配り直す）は `&mut self` で最後まで
/// 処理されるので、途中の中途半端な状態が外から見えることはない。
/// 変更の前にスナップショット、変更の後にめくり・手数・勝利判定、の順番を守る。
pub struct Game {
    world: World,
    status: GameStatus,
    history: UndoHistory,
    selection: Option<(SelectionHandle, Selection)>,
    next_handle: u32,
    events: VecDeque<GameEvent>,
    rng: StdRng,
    config: GameConfig,
}

impl Game {
    /// 設定を読んで、すぐに1ゲーム目を配る。
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Self::empty(config, rng);
        game.new_game();
        game
    }

    /// シード固定で作るショートカット。
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    /// 既にある World から再開する（保存データの復元やテスト用）。履歴は空。
    pub fn from_world(world: World, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Self::empty(config, rng);
        game.status = if check_win_condition(world.foundations()) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        game.world = world;
        game
    }

    fn empty(config: GameConfig, rng: StdRng) -> Self {
        Self {
            world: World::new(),
            status: GameStatus::Dealing,
            history: UndoHistory::new(config.undo_limit),
            selection: None,
            next_handle: 0,
            events: VecDeque::new(),
            rng,
            config,
        }
    }

    // --- 操作 ---

    /// シャッフルしたデッキで配り直す。どの状態からでも Dealing → Playing に戻る。
    pub fn new_game(&mut self) {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, &mut self.rng);
        if let Err(e) = self.deal(deck) {
            // create_standard_deck は必ず52枚なのでここには来ない
            warn!("Failed to deal a fresh deck: {}", e);
        }
    }

    /// 指定した並びのデッキで配る（リプレイ用）。履歴と手数はクリアされる。
    /// 受け付けないデッキなら Err を返し、状態は何も変わらない。
    pub fn deal(&mut self, deck: Vec<Card>) -> Result<(), GameError> {
        let previous = std::mem::replace(&mut self.status, GameStatus::Dealing);
        if let Err(e) = deal_system::deal(&mut self.world, deck) {
            warn!("Deal rejected: {}", e);
            self.status = previous;
            return Err(e);
        }
        self.history.clear();
        self.selection = None;
        self.status = GameStatus::Playing;
        self.events.push_back(GameEvent::NewGame);
        info!("New game started.");
        Ok(())
    }

    /// 山札をクリックしたときの処理。
    pub fn draw_from_stock(&mut self) -> DrawOutcome {
        if !stock_system::can_draw_or_recycle(&self.world) {
            return DrawOutcome::Nothing;
        }
        self.history.push(self.world.clone());
        let outcome = stock_system::draw_from_stock(&mut self.world);
        self.push_state_changed();
        outcome
    }

    /// ドラッグ開始。掴めるカードなら引換券を返す。前の選択は捨てる。
    pub fn begin_selection(
        &mut self,
        pile: PileId,
        index: usize,
    ) -> Result<SelectionHandle, GameError> {
        self.selection = None;
        let selection = move_card_system::pick_up(&self.world, pile, index)?;
        let handle = SelectionHandle(self.next_handle);
        self.next_handle = next_handle_id(self.next_handle);
        debug!(
            "Selection {:?}: {} card(s) from {:?}.",
            handle,
            selection.len(),
            pile
        );
        self.selection = Some((handle, selection));
        Ok(handle)
    }

    /// いま掴んでいる束。
    pub fn pending_selection(&self) -> Option<&Selection> {
        self.selection.as_ref().map(|(_, s)| s)
    }

    /// ドラッグが取り消されたとき用。
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// ドロップ。成功でも失敗でも、掴んでいた束はここで手放す。
    pub fn resolve_drop(&mut self, handle: SelectionHandle, target: PileId) -> MoveResult {
        match self.selection.take() {
            Some((pending, selection)) if pending == handle => self.attempt_move(&selection, target),
            Some(_) => MoveResult::Rejected(MoveRejection::StaleSelection),
            None => MoveResult::Rejected(MoveRejection::NoSelection),
        }
    }

    /// 束を `target` に動かしてみる。不正なら何も変わらない。
    ///
    /// 検証 → スナップショット → 移動 → めくり → 手数 → 勝利判定。
    pub fn attempt_move(&mut self, selection: &Selection, target: PileId) -> MoveResult {
        if let Err(reason) = move_card_system::validate_move(&self.world, selection, target) {
            debug!("Move to {:?} rejected: {}", target, reason);
            return MoveResult::Rejected(reason);
        }

        self.history.push(self.world.clone());
        let applied = move_card_system::apply_move(&mut self.world, selection, target);
        self.push_state_changed();

        let won = self.check_and_signal_win();
        MoveResult::Moved {
            revealed: applied.revealed,
            won,
        }
    }

    /// 1つ前の状態に戻す。履歴が空なら何もしないで false。
    ///
    /// スナップショットには手数も入っているので、手数も戻る。
    /// `Won` は終端なので、取り消しても状態は `Won` のまま。
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            debug!("Nothing to undo.");
            return false;
        };
        self.world = snapshot;
        self.selection = None;
        self.push_state_changed();
        info!("Undo: back to move {}.", self.world.move_count());
        true
    }

    /// 4つの組札が13枚ずつ揃っているか。
    pub fn check_win(&self) -> bool {
        check_win_condition(self.world.foundations())
    }

    fn check_and_signal_win(&mut self) -> bool {
        let won = win_condition_system::evaluate(&self.world, &mut self.status);
        if won {
            self.events.push_back(GameEvent::Won {
                move_count: self.world.move_count(),
            });
        }
        won
    }

    fn push_state_changed(&mut self) {
        self.events.push_back(GameEvent::StateChanged {
            move_count: self.world.move_count(),
        });
    }

    // --- 観測用 ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.world.pile(id)
    }

    pub fn move_count(&self) -> u32 {
        self.world.move_count()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 溜まっている出来事を全部取り出す。
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}

/// 引換券の番号は JS 側で i32 として読まれるので、0..=i32::MAX の中で回す。
fn next_handle_id(current: u32) -> u32 {
    if current >= i32::MAX as u32 {
        0
    } else {
        current + 1
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}
