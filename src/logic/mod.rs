// src/logic/mod.rs
//! World に依存しない純粋なゲームロジック（デッキ生成とルール判定）だよ。

pub mod deck;
pub mod rules;
