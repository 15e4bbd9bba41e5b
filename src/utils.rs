use simplelog::{CombinedLogger, Config, LevelFilter, SimpleLogger, WriteLogger};
use std::fs::File;

/// Host-optional logger setup. Console at warn level by default; set
/// WISHLIST_LOG_TO_FILE=1 to get a debug-level engine.log instead.
pub fn init() {
    init_with_level(LevelFilter::Warn);
}

pub fn init_with_level(console_level: LevelFilter) {
    let log_to_file = std::env::var("WISHLIST_LOG_TO_FILE").ok().as_deref() == Some("1");

    if log_to_file {
        match File::create("engine.log") {
            Ok(log_file) => {
                let _ = CombinedLogger::init(vec![WriteLogger::new(
                    LevelFilter::Debug,
                    Config::default(),
                    log_file,
                )]);
            }
            Err(_) => {
                let _ = SimpleLogger::init(console_level, Config::default());
            }
        }
    } else {
        let _ = SimpleLogger::init(console_level, Config::default());
    }
}
