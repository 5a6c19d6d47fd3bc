//! Deterministic transition table of the tokenizer automaton

use super::symbol::Symbol;

/// Automaton state; exactly one is current at each scan position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    OnHash,
    OnAt,
    OnAmpersand,
    OnDot,
    OnPunct,
    InWord,
    InAtName,
    InHashTag,
    OnDigit,
    BetweenTokens,
    OnEPointOrQMark,
    OnEllipsis,
    Url,
    OnUnknown,
    Error,
}

impl State {
    pub const ALL: [State; 16] = [
        State::Start,
        State::OnHash,
        State::OnAt,
        State::OnAmpersand,
        State::OnDot,
        State::OnPunct,
        State::InWord,
        State::InAtName,
        State::InHashTag,
        State::OnDigit,
        State::BetweenTokens,
        State::OnEPointOrQMark,
        State::OnEllipsis,
        State::Url,
        State::OnUnknown,
        State::Error,
    ];
}

/// Target reached from any state without a row-specific entry for `symbol`
fn default_target(symbol: Symbol) -> State {
    match symbol {
        Symbol::Alpha => State::InWord,
        Symbol::Digit | Symbol::Decimal => State::OnDigit,
        Symbol::QMark | Symbol::EPoint => State::OnEPointOrQMark,
        Symbol::Period => State::OnDot,
        Symbol::Ampersand => State::OnAmpersand,
        Symbol::AtSign => State::OnAt,
        Symbol::Hash => State::OnHash,
        Symbol::Colon
        | Symbol::Semicolon
        | Symbol::Punct
        | Symbol::OpenParen
        | Symbol::CloseParen
        | Symbol::OpenAngle
        | Symbol::CloseAngle => State::OnPunct,
        Symbol::Space => State::BetweenTokens,
        Symbol::Unknown => State::OnUnknown,
    }
}

/// Next state for `symbol` read in `state`. Total over every pair.
pub fn transition(state: State, symbol: Symbol) -> State {
    use State as S;
    use Symbol as Y;

    match (state, symbol) {
        (S::Start, Y::Decimal) => S::OnDot,

        (S::OnHash, Y::Alpha | Y::Digit) => S::InHashTag,
        (S::OnHash, Y::Period) => S::OnPunct,

        (S::OnAt, Y::Alpha | Y::Digit) => S::InAtName,
        (S::OnAt, Y::Period) => S::OnPunct,

        (S::OnAmpersand, Y::Period) => S::OnPunct,

        (S::OnDot, Y::Decimal | Y::Period) => S::OnEllipsis,

        (S::OnPunct, Y::Period | Y::Space) => S::OnPunct,

        (S::InWord, Y::Alpha | Y::Digit | Y::Ampersand) => S::InWord,

        (S::InAtName, Y::Alpha | Y::Digit) => S::InAtName,

        // The punctuation and at-sign columns are crossed in this row
        (S::InHashTag, Y::Alpha | Y::Digit) => S::InHashTag,
        (S::InHashTag, Y::Punct) => S::OnAt,
        (S::InHashTag, Y::AtSign) => S::OnPunct,

        (S::OnDigit, Y::Alpha | Y::Digit | Y::Decimal | Y::Colon) => S::OnDigit,
        (S::OnDigit, Y::Period) => S::OnPunct,
        (S::OnDigit, Y::Semicolon) => S::BetweenTokens,

        (S::OnEPointOrQMark, Y::Period) => S::OnPunct,

        (S::OnEllipsis, Y::Decimal | Y::Period) => S::OnEllipsis,

        (S::Url, Y::OpenAngle | Y::CloseAngle) => S::OnPunct,
        (S::Url, Y::Space) => S::BetweenTokens,
        (S::Url, Y::Unknown) => S::OnUnknown,
        (S::Url, _) => S::Url,

        (S::Error, Y::Punct) => S::OnPunct,
        (S::Error, Y::Unknown) => S::OnUnknown,
        (S::Error, _) => S::Start,

        (
            S::Start
            | S::OnHash
            | S::OnAt
            | S::OnAmpersand
            | S::OnDot
            | S::OnPunct
            | S::InWord
            | S::InAtName
            | S::InHashTag
            | S::OnDigit
            | S::BetweenTokens
            | S::OnEPointOrQMark
            | S::OnEllipsis
            | S::OnUnknown,
            _,
        ) => default_target(symbol),
    }
}
