//! # Micro-text CLI
//!
//! Library half of the `microtext` binary: where messages come from and how
//! their tokens are printed.

pub mod input;
pub mod render;

pub use input::{InputError, InputSource};
pub use render::OutputFormat;

use microtext_tokenizer::config::runtime::LogLevel;

/// `log` filter matching a tokenizer log level
pub fn level_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warning => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(LogLevel::Warning), log::LevelFilter::Warn);
        assert_eq!(level_filter(LogLevel::Debug), log::LevelFilter::Debug);
    }
}
