//! Shared primitive types used by the tokenizer, token model and logging

pub mod span;

pub use span::Span;
