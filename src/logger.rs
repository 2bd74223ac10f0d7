// src/logger.rs
//! `log` クレートの出力先。wasm ではブラウザの console、ネイティブでは標準出力に出すよ。

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{} {}] {}", record.level(), record.target(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
    match level {
        Level::Error | Level::Warn => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

/// ロガーを登録してレベルを設定する。二回目以降はレベルだけ変わる。
pub fn init(level: LevelFilter) {
    // 既に登録済みなら Err が返るけど、それで問題ない
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
