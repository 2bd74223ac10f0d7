// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logger;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod world;


pub use app::GameApp;
pub use components::{Card, CardColor, GameStatus, Pile, PileId, PileKind, Rank, Selection, SelectionHandle, Suit};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameEvent, MoveResult};
pub use logic::rules::{can_move, MoveRejection};
pub use systems::DrawOutcome;
pub use world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook set!");
}
