//! Tokenizer orchestration and metrics
//!
//! A `Tokenizer` is bound to one message. It scans on the first call to
//! `tokenize` and keeps the resulting sequence for every later query.

use crate::config::compile_time::lexical::LONG_INPUT_WARNING_CHARS;
use crate::config::runtime::TokenizerPreferences;
use crate::lexical::assembler::{Assembler, Repair, ScanCounts};
use crate::logging::codes;
use crate::tokens::{TokenSequence, TokenType};
use crate::{log_debug, log_error, log_success, log_warning};
use std::collections::BTreeMap;
use std::fmt;

/// Errors from querying a tokenizer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    #[error("Text has not been tokenized yet; call tokenize() first")]
    NotTokenized,

    #[error("Token index {index} out of range (sequence has {len} tokens)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TokenizerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TokenizerError::NotTokenized => codes::usage::NOT_TOKENIZED,
            TokenizerError::IndexOutOfRange { .. } => codes::usage::INDEX_OUT_OF_RANGE,
        }
    }
}

/// Counters for one tokenization run
#[derive(Debug, Default, Clone)]
pub struct TokenizerMetrics {
    pub total_tokens: usize,
    pub tokens_by_type: BTreeMap<TokenType, usize>,
    pub chars_scanned: usize,
    pub pattern_hits: usize,
    pub emoticon_hits: usize,
    pub hyphen_splits: usize,
    pub abbreviation_merges: usize,
    pub abbreviation_appends: usize,
    pub recent_repairs: Vec<Repair>,
}

impl TokenizerMetrics {
    pub(crate) fn record_run(&mut self, tokens: &TokenSequence, counts: ScanCounts) {
        for token in tokens {
            self.total_tokens += 1;
            *self.tokens_by_type.entry(token.token_type()).or_insert(0) += 1;
        }
        self.chars_scanned += counts.chars_scanned;
        self.pattern_hits += counts.pattern_hits;
        self.emoticon_hits += counts.emoticon_hits;
        self.hyphen_splits += counts.hyphen_splits;
        self.abbreviation_merges += counts.abbreviation_merges;
        self.abbreviation_appends += counts.abbreviation_appends;
        self.recent_repairs = counts.repairs;
    }

    /// Number of tokens of `token_type` seen so far
    pub fn count(&self, token_type: TokenType) -> usize {
        self.tokens_by_type.get(&token_type).copied().unwrap_or(0)
    }
}

/// Tokenizer for a single micro-text message
pub struct Tokenizer {
    text: Option<String>,
    tokens: Option<TokenSequence>,
    metrics: TokenizerMetrics,
    preferences: TokenizerPreferences,
}

impl Tokenizer {
    /// Bind a tokenizer to `text`. `None` behaves like an empty message.
    pub fn new(text: Option<&str>) -> Self {
        Self::with_preferences(text, TokenizerPreferences::default())
    }

    pub fn with_preferences(text: Option<&str>, preferences: TokenizerPreferences) -> Self {
        Self {
            text: text.map(str::to_string),
            tokens: None,
            metrics: TokenizerMetrics::default(),
            preferences,
        }
    }

    /// Scan the message and return its tokens.
    ///
    /// Scanning happens once. Later calls log a warning and hand back the
    /// sequence from the first run.
    pub fn tokenize(&mut self) -> &TokenSequence {
        let tokens = match self.tokens.take() {
            Some(existing) => {
                log_warning!(code = codes::usage::TOKENIZER_REUSED,
                    "Tokenizer already ran; returning the earlier result",
                    "tokens" => existing.len()
                );
                existing
            }
            None => self.scan(),
        };
        self.tokens.insert(tokens)
    }

    fn scan(&mut self) -> TokenSequence {
        let text = match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => {
                log_warning!(code = codes::input::EMPTY_INPUT, "Empty input; nothing to tokenize");
                return TokenSequence::new();
            }
        };

        let char_count = text.chars().count();
        if char_count > LONG_INPUT_WARNING_CHARS {
            log_warning!(code = codes::input::LONG_INPUT,
                "Input is longer than a typical micro-text message; consider splitting it",
                "chars" => char_count,
                "threshold" => LONG_INPUT_WARNING_CHARS
            );
        }

        log_debug!("Starting tokenization", "chars" => char_count);

        let (tokens, counts) = Assembler::new(text, &self.preferences).run();

        if self.preferences.collect_metrics {
            self.metrics.record_run(&tokens, counts);
        }

        log_success!(
            codes::success::TOKENIZATION_COMPLETED,
            "Tokenization completed",
            "tokens" => tokens.len(),
            "chars" => char_count
        );

        tokens
    }

    /// Tokens from the completed run
    pub fn tokens(&self) -> Result<&TokenSequence, TokenizerError> {
        match &self.tokens {
            Some(tokens) => Ok(tokens),
            None => {
                let error = TokenizerError::NotTokenized;
                log_error!(error.error_code(), "Tokens requested before tokenize()");
                Err(error)
            }
        }
    }

    /// Surface forms in order
    pub fn tokens_as_surface_strings(&self) -> Result<Vec<String>, TokenizerError> {
        Ok(self.tokens()?.surface_strings())
    }

    /// Character offset where the token at 0-based `position` starts
    pub fn token_start_offset(&self, position: usize) -> Result<usize, TokenizerError> {
        let tokens = self.tokens()?;
        match tokens.get(position) {
            Some(token) => Ok(token.start_offset()),
            None => {
                let error = TokenizerError::IndexOutOfRange {
                    index: position,
                    len: tokens.len(),
                };
                log_error!(error.error_code(), "Token position out of range",
                    "index" => position,
                    "len" => tokens.len()
                );
                Err(error)
            }
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_tokenized(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn metrics(&self) -> &TokenizerMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &TokenizerPreferences {
        &self.preferences
    }
}

impl fmt::Display for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tokens {
            Some(tokens) => write!(f, "{}", tokens),
            None => {
                let chars = self.text.as_deref().map_or(0, |t| t.chars().count());
                write!(f, "[untokenized: {} chars]", chars)
            }
        }
    }
}
