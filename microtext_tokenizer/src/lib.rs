//! # Micro-text Tokenizer
//!
//! Finite-state tokenizer for chat messages, tweets and other short informal
//! text. Produces typed tokens (words, numbers, punctuation, @-names,
//! hashtags, emoticons, URLs, e-mail addresses, filenames and hyphens) with
//! surface forms, lowercase lexemes and character offsets.
//!
//! ```no_run
//! use microtext_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new(Some("Hello @kdent :)"));
//! for token in tokenizer.tokenize() {
//!     println!("{} {}", token.token_type(), token.surface_form());
//! }
//! ```

// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{tokenize, Tokenizer, TokenizerError, TokenizerMetrics};
pub use tokens::{Token, TokenSequence, TokenType};
pub use utils::Span;
