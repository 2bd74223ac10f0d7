// src/app/mod.rs
//! JS 側との窓口 (GameApp) と、その補助。

pub mod game_app;
pub mod state_getter;

pub use game_app::GameApp;
