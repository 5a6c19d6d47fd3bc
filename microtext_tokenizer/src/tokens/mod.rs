//! Token model for micro-text tokenization
//!
//! A [`Token`] carries the text exactly as it appeared (surface form), a
//! lowercase-folded lexeme, a [`TokenType`], a 1-based sequence index and the
//! character span it covers in the source. Tokens are collected into a
//! [`TokenSequence`], which is end-mutable while the tokenizer runs and
//! read-only once handed to callers.

pub mod token;
pub mod token_sequence;

pub use token::{Token, TokenType};
pub use token_sequence::TokenSequence;
