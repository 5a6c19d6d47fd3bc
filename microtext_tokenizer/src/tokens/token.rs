//! Token record and type vocabulary

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexeme assigned to every @-mention in place of the user name
pub const AT_NAME_LEXEME: &str = "ATNAME";

/// Classification of a token by its use in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Alpha,
    Punct,
    /// Part of the vocabulary, never produced by the current transition table
    Bracket,
    AtName,
    HashTag,
    Emoticon,
    Url,
    EmailAddr,
    Filename,
    Hyphen,
    Numeric,
}

impl TokenType {
    /// Every token type, in declaration order
    pub const ALL: [TokenType; 11] = [
        TokenType::Alpha,
        TokenType::Punct,
        TokenType::Bracket,
        TokenType::AtName,
        TokenType::HashTag,
        TokenType::Emoticon,
        TokenType::Url,
        TokenType::EmailAddr,
        TokenType::Filename,
        TokenType::Hyphen,
        TokenType::Numeric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Alpha => "ALPHA",
            TokenType::Punct => "PUNCT",
            TokenType::Bracket => "BRACKET",
            TokenType::AtName => "AT_NAME",
            TokenType::HashTag => "HASH_TAG",
            TokenType::Emoticon => "EMOTICON",
            TokenType::Url => "URL",
            TokenType::EmailAddr => "EMAIL_ADDR",
            TokenType::Filename => "FILENAME",
            TokenType::Hyphen => "HYPHEN",
            TokenType::Numeric => "NUMERIC",
        }
    }

    /// Types produced by a whole-span pattern match rather than the character automaton
    pub fn is_pattern_match(&self) -> bool {
        matches!(
            self,
            TokenType::Emoticon | TokenType::Url | TokenType::EmailAddr | TokenType::Filename
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token of the output sequence.
///
/// The lexeme is never empty. Offsets count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    surface_form: String,
    lexeme: String,
    token_type: TokenType,
    index: usize,
    span: Span,
}

impl Token {
    /// Build a token covering `surface_form` starting at character `start`.
    /// The index is assigned when the token is pushed onto a sequence.
    pub(crate) fn new(
        surface_form: String,
        lexeme: String,
        token_type: TokenType,
        start: usize,
    ) -> Self {
        let span = Span::with_len(start, surface_form.chars().count());
        Self {
            surface_form,
            lexeme,
            token_type,
            index: 0,
            span,
        }
    }

    pub fn surface_form(&self) -> &str {
        &self.surface_form
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// 1-based position in the sequence
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start_offset(&self) -> usize {
        self.span.start
    }

    pub fn end_offset(&self) -> usize {
        self.span.end
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Extend the token with text that immediately follows it in the source
    pub(crate) fn append(&mut self, surface: &str, lexeme: &str) {
        self.surface_form.push_str(surface);
        self.lexeme.push_str(lexeme);
        self.span.end += surface.chars().count();
    }

    /// Extend the token with a later token; the span reaches to its end
    pub(crate) fn absorb(&mut self, other: &Token) {
        self.surface_form.push_str(&other.surface_form);
        self.lexeme.push_str(&other.lexeme);
        self.span.end = other.span.end;
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface_form, self.lexeme)
    }
}
