//! Token assembly
//!
//! Drives the character state machine over one input, accumulates surface and
//! lexeme buffers, emits tokens on state exits and applies the repairs that
//! run after emission: abbreviation appends, single-letter abbreviation merges
//! and hyphen splits.

use crate::config::compile_time::lexical::METRICS_BUFFER_SIZE;
use crate::config::runtime::TokenizerPreferences;
use crate::lexical::emoticon;
use crate::lexical::networks;
use crate::lexical::state::{transition, State};
use crate::lexical::symbol::{classify, is_apostrophe, is_dash, Symbol};
use crate::log_debug;
use crate::tokens::token::AT_NAME_LEXEME;
use crate::tokens::{Token, TokenSequence, TokenType};
use crate::utils::Span;

/// Lexemes that absorb an immediately following period
const ABBREVIATIONS: [&str; 7] = ["mr", "mrs", "dr", "ms", "st", "rd", "no"];

/// Kind of post-emission repair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairKind {
    /// `Mr` + `.` became `Mr.`
    AbbreviationAppend,
    /// `D` `.` `H` `.` became `D.H.`
    AbbreviationMerge,
    /// A dash inside a word became its own HYPHEN token
    HyphenSplit,
}

/// A repair applied while assembling, with the character range it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repair {
    pub kind: RepairKind,
    pub span: Span,
}

/// Counters collected during one scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanCounts {
    pub chars_scanned: usize,
    pub pattern_hits: usize,
    pub emoticon_hits: usize,
    pub hyphen_splits: usize,
    pub abbreviation_appends: usize,
    pub abbreviation_merges: usize,
    /// Most recent repairs, at most `METRICS_BUFFER_SIZE`
    pub repairs: Vec<Repair>,
}

impl ScanCounts {
    fn record_repair(&mut self, kind: RepairKind, span: Span) {
        match kind {
            RepairKind::AbbreviationAppend => self.abbreviation_appends += 1,
            RepairKind::AbbreviationMerge => self.abbreviation_merges += 1,
            RepairKind::HyphenSplit => self.hyphen_splits += 1,
        }
        if self.repairs.len() >= METRICS_BUFFER_SIZE {
            self.repairs.remove(0);
        }
        self.repairs.push(Repair { kind, span });
    }
}

/// Single-use assembler over one input text
pub(crate) struct Assembler<'a> {
    text: &'a str,
    chars: Vec<char>,
    byte_offsets: Vec<usize>,
    surface: String,
    lexeme: String,
    token_start: usize,
    tokens: TokenSequence,
    counts: ScanCounts,
    preferences: &'a TokenizerPreferences,
}

impl<'a> Assembler<'a> {
    pub(crate) fn new(text: &'a str, preferences: &'a TokenizerPreferences) -> Self {
        let (byte_offsets, chars) = text.char_indices().unzip();
        Self {
            text,
            chars,
            byte_offsets,
            surface: String::new(),
            lexeme: String::new(),
            token_start: 0,
            tokens: TokenSequence::new(),
            counts: ScanCounts::default(),
            preferences,
        }
    }

    /// Scan the whole input and return the finished sequence
    pub(crate) fn run(mut self) -> (TokenSequence, ScanCounts) {
        let mut state = State::Start;
        let mut last: Option<char> = None;
        let mut pos = 0;

        while pos < self.chars.len() {
            let c = self.chars[pos];
            let next = self.chars.get(pos + 1).copied();
            let symbol = classify(c, last, next);

            // A dash between letters always splits the word
            if symbol == Symbol::Alpha && is_dash(c) {
                self.exit_state(state, Some(State::BetweenTokens));
                self.split_hyphen(c, pos);
                state = State::BetweenTokens;
                last = Some(c);
                pos += 1;
                continue;
            }

            let target = transition(state, symbol);
            if target == state {
                if state != State::BetweenTokens {
                    self.append(state, c, next, pos);
                }
            } else {
                self.exit_state(state, Some(target));

                if symbol != Symbol::Space && self.surface.is_empty() {
                    if let Some(len) = self.match_pattern(pos) {
                        pos += len;
                        last = Some(self.chars[pos - 1]);
                        state = State::BetweenTokens;
                        continue;
                    }
                    // A visible character routed straight to between-tokens
                    // still becomes a token
                    if target == State::BetweenTokens {
                        self.append(State::OnPunct, c, next, pos);
                        self.save(TokenType::Alpha);
                    }
                }

                state = self.enter_state(target, c, last, next, pos);
            }

            last = Some(c);
            pos += 1;
        }

        self.exit_state(state, None);
        if last == Some('.') {
            self.resolve_abbreviations();
        }

        self.counts.chars_scanned = self.chars.len();
        (self.tokens, self.counts)
    }

    // ========================================================================
    // State entry and exit
    // ========================================================================

    fn enter_state(
        &mut self,
        target: State,
        c: char,
        last: Option<char>,
        next: Option<char>,
        pos: usize,
    ) -> State {
        match target {
            State::OnDot => {
                if next != Some('.') && self.append_to_abbreviation(c, pos) {
                    return State::OnDot;
                }
                self.append(target, c, next, pos);
                State::OnDot
            }
            State::OnPunct => {
                self.append(target, c, next, pos);
                self.save(TokenType::Punct);
                State::BetweenTokens
            }
            State::BetweenTokens => {
                if last == Some('.') {
                    self.resolve_abbreviations();
                }
                State::BetweenTokens
            }
            State::Error => State::Error,
            _ => {
                self.append(target, c, next, pos);
                target
            }
        }
    }

    /// Emit whatever the state being left has accumulated. `target` is `None`
    /// at end of input.
    fn exit_state(&mut self, state: State, target: Option<State>) {
        match state {
            State::OnEllipsis => self.save(TokenType::Punct),
            State::OnAt => {
                if target != Some(State::InAtName) {
                    self.save(TokenType::Punct);
                }
            }
            State::OnHash => {
                if target != Some(State::InHashTag) {
                    self.save(TokenType::Punct);
                }
            }
            State::OnDot => {
                if !matches!(target, Some(State::OnEllipsis | State::OnDigit)) {
                    self.save(TokenType::Punct);
                }
            }
            State::OnDigit => self.save(TokenType::Numeric),
            State::InAtName => self.save(TokenType::AtName),
            State::InHashTag => self.save(TokenType::HashTag),
            State::Url => self.save(TokenType::Url),
            State::Start | State::BetweenTokens | State::Error => {}
            State::InWord
            | State::OnPunct
            | State::OnAmpersand
            | State::OnEPointOrQMark
            | State::OnUnknown => self.save(TokenType::Alpha),
        }
    }

    // ========================================================================
    // Buffers and emission
    // ========================================================================

    fn append(&mut self, state: State, c: char, next: Option<char>, pos: usize) {
        if self.surface.is_empty() {
            self.token_start = pos;
        }
        self.surface.push(c);

        if state == State::InWord {
            if is_apostrophe(c) && next != Some('s') {
                return;
            }
            if c == '0' {
                self.lexeme.push('o');
                return;
            }
        }
        self.lexeme.extend(c.to_lowercase());
    }

    /// Emit the buffers as one token. An empty lexeme drops the token; the
    /// buffers are cleared either way.
    fn save(&mut self, token_type: TokenType) {
        let surface = std::mem::take(&mut self.surface);
        let lexeme = std::mem::take(&mut self.lexeme);
        if lexeme.is_empty() {
            return;
        }

        let (lexeme, token_type) = match token_type {
            TokenType::AtName => (AT_NAME_LEXEME.to_string(), TokenType::AtName),
            TokenType::Alpha => {
                let token_type = reclassify(&lexeme);
                (lexeme, token_type)
            }
            other => (lexeme, other),
        };
        self.push(Token::new(surface, lexeme, token_type, self.token_start));
    }

    fn push(&mut self, token: Token) {
        if self.preferences.log_token_events {
            log_debug!("Token emitted",
                "surface" => token.surface_form(),
                "type" => token.token_type(),
                "start" => token.start_offset()
            );
        }
        self.tokens.push(token);
    }

    // ========================================================================
    // Pattern recognition
    // ========================================================================

    /// Try the emoticon recognizer and then the pattern networks at `pos`.
    /// On a hit the span is emitted as one token and its length returned.
    fn match_pattern(&mut self, pos: usize) -> Option<usize> {
        if emoticon::is_initial_char(self.chars[pos]) {
            let len = emoticon::recognize(&self.chars[pos..]);
            if len > 0 {
                let surface = Span::with_len(pos, len).slice(&self.chars);
                // Emoticons keep their case: ":D" and ":d" differ
                self.push(Token::new(surface.clone(), surface, TokenType::Emoticon, pos));
                self.counts.emoticon_hits += 1;
                return Some(len);
            }
        }

        let hit = networks::match_at(&self.text[self.byte_offsets[pos]..])?;
        let surface = Span::with_len(pos, hit.char_len).slice(&self.chars);
        let lexeme = surface.to_lowercase();
        self.push(Token::new(surface, lexeme, hit.token_type, pos));
        self.counts.pattern_hits += 1;
        Some(hit.char_len)
    }

    // ========================================================================
    // Repairs
    // ========================================================================

    fn split_hyphen(&mut self, c: char, pos: usize) {
        let dash = c.to_string();
        self.push(Token::new(dash.clone(), dash, TokenType::Hyphen, pos));
        self.record_repair(RepairKind::HyphenSplit, Span::single(pos));
    }

    /// Glue the period at `pos` onto an abbreviation that ends right before it
    fn append_to_abbreviation(&mut self, c: char, pos: usize) -> bool {
        let qualifies = self
            .tokens
            .last()
            .is_some_and(|prev| prev.end_offset() == pos && is_abbreviation(prev.lexeme()));
        if !qualifies {
            return false;
        }
        let Some(mut token) = self.tokens.pop() else {
            return false;
        };

        let period = c.to_string();
        token.append(&period, &period);
        let span = token.span();
        self.tokens.push(token);
        self.record_repair(RepairKind::AbbreviationAppend, span);
        true
    }

    /// Merge a trailing run of one-character token + `.` pairs into one token
    fn resolve_abbreviations(&mut self) {
        // Collected newest first
        let mut group: Vec<Token> = Vec::new();

        loop {
            let (Some(period), Some(letter)) = (self.tokens.from_end(0), self.tokens.from_end(1))
            else {
                break;
            };
            if period.surface_form() != "." || letter.surface_form().chars().count() != 1 {
                break;
            }

            let (Some(period), Some(letter)) = (self.tokens.pop(), self.tokens.pop()) else {
                break;
            };
            group.push(period);
            group.push(letter);
        }

        let mut parts = group.into_iter().rev();
        let Some(first) = parts.next() else {
            return;
        };

        let mut merged = Token::new(
            first.surface_form().to_string(),
            first.lexeme().to_string(),
            TokenType::Alpha,
            first.start_offset(),
        );
        for part in parts {
            merged.absorb(&part);
        }

        let span = merged.span();
        self.push(merged);
        self.record_repair(RepairKind::AbbreviationMerge, span);
    }

    fn record_repair(&mut self, kind: RepairKind, span: Span) {
        if self.preferences.log_repairs {
            log_debug!("Token repair applied",
                "kind" => format!("{:?}", kind),
                "span" => span
            );
        }
        self.counts.record_repair(kind, span);
    }
}

fn is_abbreviation(lexeme: &str) -> bool {
    let lowered = lexeme.to_lowercase();
    ABBREVIATIONS.contains(&lowered.as_str())
}

/// Generic word tokens that turn out to be numbers or pure punctuation
fn reclassify(lexeme: &str) -> TokenType {
    if lexeme
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ',' | '$'))
    {
        TokenType::Numeric
    } else if !lexeme.chars().any(char::is_alphabetic) {
        TokenType::Punct
    } else {
        TokenType::Alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(text: &str) -> (TokenSequence, ScanCounts) {
        let preferences = TokenizerPreferences::default();
        Assembler::new(text, &preferences).run()
    }

    fn surfaces(text: &str) -> Vec<String> {
        assemble(text).0.surface_strings()
    }

    #[test]
    fn test_reclassify() {
        assert_eq!(reclassify("1,000"), TokenType::Numeric);
        assert_eq!(reclassify("$"), TokenType::Numeric);
        assert_eq!(reclassify("!"), TokenType::Punct);
        assert_eq!(reclassify("’"), TokenType::Punct);
        assert_eq!(reclassify("abc"), TokenType::Alpha);
        assert_eq!(reclassify("s4"), TokenType::Alpha);
    }

    #[test]
    fn test_abbreviation_lookup_ignores_case() {
        assert!(is_abbreviation("Mrs"));
        assert!(is_abbreviation("no"));
        assert!(!is_abbreviation("now"));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let (tokens, counts) = assemble("");
        assert!(tokens.is_empty());
        assert_eq!(counts.chars_scanned, 0);
    }

    #[test]
    fn test_words_and_final_period() {
        assert_eq!(surfaces("A string of words."), ["A", "string", "of", "words", "."]);
    }

    #[test]
    fn test_abbreviation_append_counted() {
        let (tokens, counts) = assemble("the No. 1 Artist");
        assert_eq!(tokens.surface_strings(), ["the", "No.", "1", "Artist"]);
        assert_eq!(counts.abbreviation_appends, 1);
        assert_eq!(counts.repairs[0].kind, RepairKind::AbbreviationAppend);
        assert_eq!(counts.repairs[0].span, Span::new(4, 7));
    }

    #[test]
    fn test_abbreviation_append_needs_adjacency() {
        assert_eq!(surfaces("say no . ok"), ["say", "no", ".", "ok"]);
    }

    #[test]
    fn test_single_letter_merge() {
        let (tokens, counts) = assemble("D.H. Lawrence");
        assert_eq!(tokens.surface_strings(), ["D.H.", "Lawrence"]);
        assert_eq!(tokens.get(0).map(|t| t.lexeme()), Some("d.h."));
        assert_eq!(tokens.get(0).map(|t| t.token_type()), Some(TokenType::Alpha));
        assert_eq!(tokens.get(1).map(|t| t.index()), Some(2));
        assert_eq!(counts.abbreviation_merges, 1);
    }

    #[test]
    fn test_single_letter_merge_at_end_of_input() {
        let (tokens, _) = assemble("in the U.S.");
        assert_eq!(tokens.surface_strings(), ["in", "the", "U.S."]);
        assert_eq!(tokens.get(2).map(|t| t.start_offset()), Some(7));
        assert_eq!(tokens.get(2).map(|t| t.index()), Some(3));
    }

    #[test]
    fn test_merge_stops_at_longer_token() {
        assert_eq!(surfaces("a b. c"), ["a", "b.", "c"]);
        assert_eq!(surfaces("I. am"), ["I.", "am"]);
        assert_eq!(surfaces("ok . go"), ["ok", ".", "go"]);
    }

    #[test]
    fn test_merge_across_spaces() {
        let (tokens, counts) = assemble("a . b");
        assert_eq!(tokens.surface_strings(), ["a.", "b"]);
        assert_eq!(tokens.get(0).map(|t| t.span()), Some(Span::new(0, 3)));
        assert_eq!(tokens.get(1).map(|t| t.index()), Some(2));
        assert_eq!(counts.abbreviation_merges, 1);
    }

    #[test]
    fn test_merge_single_digit() {
        let (tokens, _) = assemble("x 5 . y");
        assert_eq!(tokens.surface_strings(), ["x", "5.", "y"]);
        assert_eq!(tokens.get(1).map(|t| t.token_type()), Some(TokenType::Alpha));
        assert_eq!(tokens.get(1).map(|t| t.start_offset()), Some(2));
    }

    #[test]
    fn test_semicolon_after_digit_is_kept() {
        let (tokens, counts) = assemble("5;");
        assert_eq!(tokens.surface_strings(), ["5", ";"]);
        assert_eq!(tokens.get(1).map(|t| t.token_type()), Some(TokenType::Emoticon));
        assert_eq!(counts.emoticon_hits, 1);

        assert_eq!(surfaces("1;2;3"), ["1", ";", "2", ";", "3"]);
        assert_eq!(surfaces("call me at 5;)"), ["call", "me", "at", "5", ";)"]);
    }

    #[test]
    fn test_semicolon_after_digit_without_emoticon() {
        let (tokens, _) = assemble("5;;");
        assert_eq!(tokens.surface_strings(), ["5", ";", ";"]);
        assert_eq!(tokens.get(1).map(|t| t.token_type()), Some(TokenType::Punct));
        assert_eq!(tokens.get(1).map(|t| t.start_offset()), Some(1));
    }

    #[test]
    fn test_hyphen_split() {
        let (tokens, counts) = assemble("grid-energy");
        assert_eq!(tokens.surface_strings(), ["grid", "-", "energy"]);
        assert_eq!(tokens.get(1).map(|t| t.token_type()), Some(TokenType::Hyphen));
        assert_eq!(tokens.get(1).map(|t| t.start_offset()), Some(4));
        assert_eq!(tokens.get(2).map(|t| t.start_offset()), Some(5));
        assert_eq!(counts.hyphen_splits, 1);
    }

    #[test]
    fn test_apostrophe_lexeme_rules() {
        let (tokens, _) = assemble("They're Mary's");
        assert_eq!(tokens.lexemes(), ["theyre", "mary's"]);
        assert_eq!(tokens.surface_strings(), ["They're", "Mary's"]);
    }

    #[test]
    fn test_zero_inside_word_reads_as_letter() {
        let (tokens, _) = assemble("CARE 0F");
        assert_eq!(tokens.lexemes(), ["care", "0f"]);
        let (tokens, _) = assemble("g00d");
        assert_eq!(tokens.lexemes(), ["good"]);
    }

    #[test]
    fn test_emoticon_keeps_case() {
        let (tokens, counts) = assemble("yay :D");
        assert_eq!(tokens.get(1).map(|t| t.lexeme()), Some(":D"));
        assert_eq!(tokens.get(1).map(|t| t.token_type()), Some(TokenType::Emoticon));
        assert_eq!(counts.emoticon_hits, 1);
    }

    #[test]
    fn test_pattern_hit_resumes_after_span() {
        let (tokens, counts) = assemble("see WSJ.com now");
        assert_eq!(tokens.surface_strings(), ["see", "WSJ.com", "now"]);
        assert_eq!(tokens.get(1).map(|t| t.lexeme()), Some("wsj.com"));
        assert_eq!(tokens.get(2).map(|t| t.start_offset()), Some(12));
        assert_eq!(counts.pattern_hits, 1);
    }

    #[test]
    fn test_at_name_lexeme() {
        let (tokens, _) = assemble("@kdent");
        assert_eq!(tokens.get(0).map(|t| t.lexeme()), Some(AT_NAME_LEXEME));
        assert_eq!(tokens.get(0).map(|t| t.surface_form()), Some("@kdent"));
    }

    #[test]
    fn test_lone_at_sign_is_punct() {
        let (tokens, _) = assemble("meet @ noon");
        assert_eq!(tokens.get(1).map(|t| t.token_type()), Some(TokenType::Punct));
    }

    #[test]
    fn test_chars_scanned_counts_characters() {
        let (_, counts) = assemble("héllo wörld");
        assert_eq!(counts.chars_scanned, 11);
    }
}
