// src/app/game_app.rs

use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::pile::PileId;
use crate::components::selection::SelectionHandle;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, GameEvent, MoveResult};
use crate::logger;
use crate::logic::rules::MoveRejection;
use crate::protocol::MoveOutcomeData;
use crate::systems::DrawOutcome;

// --- JS から使うゲームの入り口 ---
//
// ここはコマンドを Game に渡して、結果を JSON で返すだけ。ルールは一切持たないよ。
#[wasm_bindgen]
pub struct GameApp {
    game: Game,
}

#[wasm_bindgen]
impl GameApp {
    /// 設定 JSON は省略可。読めなかったらデフォルト設定で始める。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> GameApp {
        let config = match config_json.as_deref().map(GameConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("GameApp: {}. Falling back to default config.", e);
                GameConfig::default()
            }
            None => GameConfig::default(),
        };
        logger::init(config.log_level_filter());
        info!("GameApp: Initializing...");
        GameApp {
            game: Game::new(config),
        }
    }

    /// 「新しいゲーム」ボタン。
    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    /// 山札クリック。何か変わったら true。
    pub fn click_stock(&mut self) -> bool {
        self.game.draw_from_stock() != DrawOutcome::Nothing
    }

    /// 「取り消し」ボタン。
    pub fn undo(&mut self) -> bool {
        self.game.undo()
    }

    /// ドラッグ開始。掴めたら引換券の番号、掴めなければ -1。
    pub fn begin_selection(&mut self, pile_json: &str, index: u32) -> i32 {
        let result = parse_pile(pile_json)
            .and_then(|pile| self.game.begin_selection(pile, index as usize));
        match result {
            Ok(SelectionHandle(id)) => i32::try_from(id).unwrap_or(-1),
            Err(e) => {
                warn!("GameApp: begin_selection failed: {}", e);
                -1
            }
        }
    }

    /// ドロップ。結果を `MoveOutcomeData` の JSON で返す。
    pub fn drop_on(&mut self, handle: u32, pile_json: &str) -> String {
        let result = match parse_pile(pile_json) {
            Ok(target) => self.game.resolve_drop(SelectionHandle(handle), target),
            Err(e) => {
                warn!("GameApp: drop target could not be read: {}", e);
                self.game.cancel_selection();
                MoveResult::Rejected(MoveRejection::TargetNotPlayable)
            }
        };
        let outcome = MoveOutcomeData::new(result, self.game.move_count());
        serde_json::to_string(&outcome).unwrap_or_else(|e| {
            warn!("GameApp: failed to serialize move outcome: {}", e);
            String::from("{}")
        })
    }

    /// ドラッグが途中でキャンセルされたとき。
    pub fn cancel_selection(&mut self) {
        self.game.cancel_selection();
    }

    /// 描き直し用の状態 JSON。
    pub fn get_state_json(&self) -> String {
        state_getter::get_state_json(&self.game).unwrap_or_else(|_| String::from("{}"))
    }

    /// 溜まった出来事 (`GameEvent` の配列) を JSON で取り出す。
    pub fn poll_events_json(&mut self) -> String {
        let events: Vec<GameEvent> = self.game.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| String::from("[]"))
    }

    pub fn move_count(&self) -> u32 {
        self.game.move_count()
    }

    pub fn is_won(&self) -> bool {
        self.game.status().is_won()
    }
}

fn parse_pile(pile_json: &str) -> Result<PileId, GameError> {
    let pile: PileId = serde_json::from_str(pile_json).map_err(GameError::Protocol)?;
    if !pile.is_valid() {
        return Err(GameError::InvalidPile(pile));
    }
    Ok(pile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::GameStateData;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    fn seeded_app() -> GameApp {
        GameApp::new(Some(r#"{ "seed": 3, "log_level": "warn" }"#.to_string()))
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn new_app_deals_a_game() {
        let mut app = seeded_app();
        let state: GameStateData = serde_json::from_str(&app.get_state_json()).unwrap();
        assert_eq!(state.piles.len(), 13);
        assert_eq!(app.move_count(), 0);

        let events: Vec<GameEvent> = serde_json::from_str(&app.poll_events_json()).unwrap();
        assert_eq!(events, vec![GameEvent::NewGame]);
        assert_eq!(app.poll_events_json(), "[]");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn bad_config_falls_back_to_defaults() {
        let app = GameApp::new(Some("not json".to_string()));
        assert_eq!(app.move_count(), 0);
        assert!(!app.is_won());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn stock_click_and_undo() {
        let mut app = seeded_app();
        assert!(app.click_stock());
        assert_eq!(app.move_count(), 1);
        assert!(app.undo());
        assert_eq!(app.move_count(), 0);
        assert!(!app.undo());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn selection_and_drop_through_json() {
        let mut app = seeded_app();
        assert_eq!(app.begin_selection("{\"Tableau\":9}", 0), -1);
        assert_eq!(app.begin_selection("garbage", 0), -1);
        assert_eq!(app.begin_selection("{\"Tableau\":1}", 0), -1, "裏向きは掴めない");

        let handle = app.begin_selection("{\"Tableau\":1}", 1);
        assert!(handle >= 0);
        // 同じ列に落とすのは必ず駄目
        let outcome: MoveOutcomeData =
            serde_json::from_str(&app.drop_on(handle as u32, "{\"Tableau\":1}")).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.reason, Some(MoveRejection::SamePile));

        // 一度ドロップした引換券はもう使えない
        let again: MoveOutcomeData =
            serde_json::from_str(&app.drop_on(handle as u32, "{\"Tableau\":2}")).unwrap();
        assert_eq!(again.reason, Some(MoveRejection::NoSelection));
        assert_eq!(app.move_count(), 0);
    }
}
