//! Character classification with one character of context on each side

/// Symbol class of a character in context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Alpha,
    Digit,
    QMark,
    EPoint,
    /// `.` followed by a digit
    Decimal,
    /// `.` not followed by a digit
    Period,
    Colon,
    Semicolon,
    Ampersand,
    Punct,
    AtSign,
    Hash,
    OpenParen,
    CloseParen,
    OpenAngle,
    CloseAngle,
    Space,
    Unknown,
}

/// Hyphen-minus and the figure/en/em/horizontal-bar dashes
pub fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2012}'..='\u{2015}')
}

/// ASCII apostrophe and its typographic and fullwidth variants
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}'..='\u{201B}' | '\u{FF07}')
}

fn is_double_quote(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201C}'..='\u{201F}' | '\u{301D}'..='\u{301F}' | '\u{FF02}'
    )
}

fn is_letter(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphabetic)
}

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(char::is_numeric)
}

/// Classify `c` given the previous and next characters (`None` at either end).
///
/// Rules apply in priority order; the first match wins.
pub fn classify(c: char, prev: Option<char>, next: Option<char>) -> Symbol {
    if c.is_whitespace() {
        return Symbol::Space;
    }

    if is_dash(c) {
        // Mid-word hyphen candidate
        return if is_letter(prev) && (is_letter(next) || is_digit(next)) {
            Symbol::Alpha
        } else {
            Symbol::Punct
        };
    }

    if c == '=' {
        return Symbol::Punct;
    }
    if c.is_alphabetic() {
        return Symbol::Alpha;
    }
    if c.is_numeric() {
        return Symbol::Digit;
    }
    if is_double_quote(c) {
        return Symbol::Punct;
    }

    if is_apostrophe(c) {
        return if next == Some('s') || (is_letter(prev) && is_letter(next)) {
            Symbol::Alpha
        } else {
            Symbol::Punct
        };
    }

    match c {
        '?' => Symbol::QMark,
        '!' => Symbol::EPoint,
        '.' if is_digit(next) => Symbol::Decimal,
        '.' => Symbol::Period,
        ',' => Symbol::Punct,
        '&' => Symbol::Ampersand,
        ':' => Symbol::Colon,
        ';' => Symbol::Semicolon,
        '\\' | '/' => Symbol::Punct,
        '@' => Symbol::AtSign,
        '#' => Symbol::Hash,
        '(' | '[' => Symbol::OpenParen,
        ')' => Symbol::CloseParen,
        '<' => Symbol::OpenAngle,
        '>' => Symbol::CloseAngle,
        '_' | '*' => Symbol::Alpha,
        '$' => Symbol::Punct,
        _ => Symbol::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        assert_eq!(classify(' ', None, None), Symbol::Space);
        assert_eq!(classify('\t', Some('a'), Some('b')), Symbol::Space);
        assert_eq!(classify('\u{00A0}', None, None), Symbol::Space);
    }

    #[test]
    fn test_hyphen_context() {
        assert_eq!(classify('-', Some('d'), Some('e')), Symbol::Alpha);
        assert_eq!(classify('-', Some('d'), Some('2')), Symbol::Alpha);
        assert_eq!(classify('\u{2014}', Some('a'), Some('b')), Symbol::Alpha);
        assert_eq!(classify('-', Some(' '), Some('_')), Symbol::Punct);
        assert_eq!(classify('-', Some('_'), Some(' ')), Symbol::Punct);
        assert_eq!(classify('-', Some('4'), Some('5')), Symbol::Punct);
        assert_eq!(classify('-', None, Some('a')), Symbol::Punct);
    }

    #[test]
    fn test_apostrophe_context() {
        assert_eq!(classify('\'', Some('y'), Some('s')), Symbol::Alpha);
        assert_eq!(classify('\'', Some('n'), Some('t')), Symbol::Alpha);
        assert_eq!(classify('\u{2019}', Some('n'), Some('t')), Symbol::Alpha);
        assert_eq!(classify('\u{2019}', Some('!'), Some('a')), Symbol::Punct);
        assert_eq!(classify('\'', Some('s'), Some(' ')), Symbol::Punct);
        assert_eq!(classify('\'', None, Some('s')), Symbol::Alpha);
    }

    #[test]
    fn test_period_vs_decimal() {
        assert_eq!(classify('.', Some('4'), Some('5')), Symbol::Decimal);
        assert_eq!(classify('.', Some('e'), Some(' ')), Symbol::Period);
        assert_eq!(classify('.', Some('e'), None), Symbol::Period);
    }

    #[test]
    fn test_letters_digits_and_word_symbols() {
        assert_eq!(classify('a', None, None), Symbol::Alpha);
        assert_eq!(classify('é', None, None), Symbol::Alpha);
        assert_eq!(classify('7', None, None), Symbol::Digit);
        assert_eq!(classify('_', None, None), Symbol::Alpha);
        assert_eq!(classify('*', None, None), Symbol::Alpha);
    }

    #[test]
    fn test_punctuation_table() {
        let cases = [
            ('?', Symbol::QMark),
            ('!', Symbol::EPoint),
            (',', Symbol::Punct),
            ('&', Symbol::Ampersand),
            (':', Symbol::Colon),
            (';', Symbol::Semicolon),
            ('/', Symbol::Punct),
            ('\\', Symbol::Punct),
            ('@', Symbol::AtSign),
            ('#', Symbol::Hash),
            ('(', Symbol::OpenParen),
            ('[', Symbol::OpenParen),
            (')', Symbol::CloseParen),
            (']', Symbol::Unknown),
            ('<', Symbol::OpenAngle),
            ('>', Symbol::CloseAngle),
            ('$', Symbol::Punct),
            ('=', Symbol::Punct),
            ('"', Symbol::Punct),
            ('\u{201C}', Symbol::Punct),
            ('%', Symbol::Unknown),
            ('\u{1F600}', Symbol::Unknown),
        ];
        for (c, expected) in cases {
            assert_eq!(classify(c, None, None), expected, "classifying {:?}", c);
        }
    }
}
