//! Micro-text lexical analysis
//!
//! A character-level state machine splits short informal messages into
//! typed tokens. Pattern recognizers for emoticons, e-mail addresses, URLs
//! and filenames claim whole spans when a token boundary is reached, and a
//! few repairs (abbreviations, hyphens) run as tokens are emitted.
//!

pub mod analyzer;
pub mod assembler;
pub mod emoticon;
pub mod networks;
pub mod state;
pub mod symbol;

use crate::config::compile_time::lexical::*;
use crate::config::runtime::TokenizerPreferences;
use crate::tokens::{TokenSequence, TokenType};

pub use analyzer::{Tokenizer, TokenizerError, TokenizerMetrics};
pub use assembler::{Repair, RepairKind};

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize `text` in one call
pub fn tokenize(text: Option<&str>) -> TokenSequence {
    let mut tokenizer = Tokenizer::new(text);
    tokenizer.tokenize();
    tokenizer.tokens().cloned().unwrap_or_default()
}

/// Create a tokenizer with default preferences
pub fn create_tokenizer(text: Option<&str>) -> Tokenizer {
    Tokenizer::new(text)
}

/// Create a tokenizer with custom runtime preferences
pub fn create_tokenizer_with_preferences(
    text: Option<&str>,
    preferences: TokenizerPreferences,
) -> Tokenizer {
    Tokenizer::with_preferences(text, preferences)
}

// ============================================================================
// MODULE VALIDATION
// ============================================================================

/// Startup self-check: every code the tokenizer logs is registered, the
/// compile-time limits are usable and the pattern networks compile.
pub fn validate_tokenization() -> Result<(), String> {
    let tokenizer_codes = [
        crate::logging::codes::usage::NOT_TOKENIZED,
        crate::logging::codes::usage::INDEX_OUT_OF_RANGE,
        crate::logging::codes::usage::TOKENIZER_REUSED,
        crate::logging::codes::input::LONG_INPUT,
        crate::logging::codes::input::EMPTY_INPUT,
        crate::logging::codes::success::TOKENIZATION_COMPLETED,
    ];

    for code in &tokenizer_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Tokenizer code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if LONG_INPUT_WARNING_CHARS == 0 {
        return Err("LONG_INPUT_WARNING_CHARS cannot be zero".to_string());
    }
    if METRICS_BUFFER_SIZE == 0 {
        return Err("METRICS_BUFFER_SIZE cannot be zero".to_string());
    }

    networks::warm_up();

    crate::log_debug!("Tokenizer limits validated",
        "long_input_warning_chars" => LONG_INPUT_WARNING_CHARS,
        "metrics_buffer_size" => METRICS_BUFFER_SIZE
    );

    Ok(())
}

// ============================================================================
// ANALYSIS HELPERS
// ============================================================================

/// Distribution of token types in a sequence
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenCounts {
    pub total: usize,
    pub words: usize,
    pub punctuation: usize,
    pub numbers: usize,
    pub social: usize,
    pub emoticons: usize,
    pub patterns: usize,
    pub hyphens: usize,
}

impl TokenCounts {
    /// Tokens that carry content rather than punctuation
    pub fn content_tokens(&self) -> usize {
        self.total - self.punctuation - self.hyphens
    }

    pub fn has_social_markers(&self) -> bool {
        self.social > 0 || self.emoticons > 0
    }
}

/// Count the token types in `tokens`
pub fn get_token_counts(tokens: &TokenSequence) -> TokenCounts {
    let mut counts = TokenCounts::default();

    for token in tokens {
        counts.total += 1;
        match token.token_type() {
            TokenType::Alpha => counts.words += 1,
            TokenType::Punct | TokenType::Bracket => counts.punctuation += 1,
            TokenType::Numeric => counts.numbers += 1,
            TokenType::AtName | TokenType::HashTag => counts.social += 1,
            TokenType::Emoticon => counts.emoticons += 1,
            TokenType::Url | TokenType::EmailAddr | TokenType::Filename => counts.patterns += 1,
            TokenType::Hyphen => counts.hyphens += 1,
        }
    }

    counts
}
