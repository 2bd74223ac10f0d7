// src/config/mod.rs
//! ゲームの設定まわり。

pub mod game_config;

pub use game_config::GameConfig;
