//! Ordered token collection produced by one tokenization run

use super::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens in emission order.
///
/// Only the tail is mutable: the tokenizer pushes new tokens and may pop the
/// most recent ones while repairing abbreviations. Indices are always `1..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token, assigning it the next sequence index
    pub(crate) fn push(&mut self, mut token: Token) {
        token.set_index(self.tokens.len() + 1);
        self.tokens.push(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at 0-based position `position`
    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Surface forms in order
    pub fn surface_strings(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| t.surface_form().to_string())
            .collect()
    }

    /// Lexemes in order
    pub fn lexemes(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.lexeme().to_string()).collect()
    }

    /// Token at `position` from the end (0 = last)
    pub(crate) fn from_end(&self, position: usize) -> Option<&Token> {
        self.tokens
            .len()
            .checked_sub(position + 1)
            .and_then(|i| self.tokens.get(i))
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", token)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenType;

    fn word(text: &str, start: usize) -> Token {
        Token::new(text.into(), text.to_lowercase(), TokenType::Alpha, start)
    }

    #[test]
    fn test_push_assigns_consecutive_indices() {
        let mut seq = TokenSequence::new();
        seq.push(word("a", 0));
        seq.push(word("b", 2));
        seq.push(word("c", 4));

        let indices: Vec<usize> = seq.iter().map(|t| t.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_pop_then_push_reuses_index() {
        let mut seq = TokenSequence::new();
        seq.push(word("x", 0));
        seq.push(word("No", 2));

        let mut tail = seq.pop().unwrap();
        tail.append(".", ".");
        seq.push(tail);

        assert_eq!(seq.last().unwrap().index(), 2);
        assert_eq!(seq.last().unwrap().surface_form(), "No.");
    }

    #[test]
    fn test_from_end() {
        let mut seq = TokenSequence::new();
        seq.push(word("a", 0));
        seq.push(word("b", 2));

        assert_eq!(seq.from_end(0).unwrap().surface_form(), "b");
        assert_eq!(seq.from_end(1).unwrap().surface_form(), "a");
        assert!(seq.from_end(2).is_none());
    }

    #[test]
    fn test_display_and_accessors() {
        let mut seq = TokenSequence::new();
        assert_eq!(seq.to_string(), "[]");

        seq.push(word("Hello", 0));
        seq.push(word("World", 6));
        assert_eq!(seq.to_string(), "[Hello/hello, World/world]");
        assert_eq!(seq.surface_strings(), vec!["Hello", "World"]);
        assert_eq!(seq.lexemes(), vec!["hello", "world"]);
        assert_eq!(seq.get(1).unwrap().start_offset(), 6);
        assert!(seq.get(2).is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut seq = TokenSequence::new();
        seq.push(word("hi", 0));

        let json: serde_json::Value = serde_json::to_value(&seq).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["surface_form"], "hi");
        assert_eq!(json[0]["token_type"], "ALPHA");
        assert_eq!(json[0]["index"], 1);
    }
}
