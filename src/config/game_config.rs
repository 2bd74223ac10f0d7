// src/config/game_config.rs
//! ゲーム全体の設定値を定義するよ！⚙️

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// JS 側から JSON で渡される設定。書かなかった項目はデフォルト値になるよ。
///
/// ```json
/// { "seed": 42, "undo_limit": null, "log_level": "debug" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 指定すると毎回同じ配り方になる（リプレイやテスト用）。
    pub seed: Option<u64>,
    /// 取り消し履歴の上限。None なら無制限で、古いものから捨てる。
    pub undo_limit: Option<usize>,
    /// `log` クレートのレベル名 ("error" .. "trace", "off")。
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            undo_limit: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(GameError::Config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = Some(limit);
        self
    }

    /// 読めないレベル名なら Info にしておく。
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unlimited_and_unseeded() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.undo_limit, None);
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 9 }"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.undo_limit, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn full_json_and_level_parsing() {
        let config =
            GameConfig::from_json(r#"{ "seed": 1, "undo_limit": 20, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.undo_limit, Some(20));
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);

        let noisy = GameConfig {
            log_level: "chatty".to_string(),
            ..GameConfig::default()
        };
        assert_eq!(noisy.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = GameConfig::from_json("{ seed: }").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
