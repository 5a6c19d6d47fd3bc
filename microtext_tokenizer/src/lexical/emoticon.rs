//! Greedy emoticon recognizer
//!
//! A small automaton over its own alphabet: eyes (`:` or `;`), an optional
//! nose (`-`) and a mouth. A nose may be followed by another pair of eyes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Eyes,
    Nose,
    Mouth,
    /// Mapped but never a valid continuation (`|`, `_`, `3`, slashes, ...)
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmoticonState {
    Start,
    OnEyes,
    OnNose,
    OnMouth,
    Fail,
}

/// Map a character into the emoticon alphabet
fn part_of(c: char) -> Option<Part> {
    match c {
        ':' | ';' => Some(Part::Eyes),
        '-' => Some(Part::Nose),
        '(' | ')' | '[' | ']' | 'D' | 'O' | 'o' | 'P' | 'p' => Some(Part::Mouth),
        '|' | '_' | '3' | '8' | '0' | 'B' | '\'' | '\\' | '/' | '<' | '>' | '*' => {
            Some(Part::Other)
        }
        _ => None,
    }
}

fn step(state: EmoticonState, part: Part) -> EmoticonState {
    match (state, part) {
        (EmoticonState::Start, Part::Eyes) => EmoticonState::OnEyes,
        (EmoticonState::OnEyes, Part::Nose) => EmoticonState::OnNose,
        (EmoticonState::OnEyes | EmoticonState::OnNose, Part::Mouth) => EmoticonState::OnMouth,
        (EmoticonState::OnNose, Part::Eyes) => EmoticonState::OnEyes,
        _ => EmoticonState::Fail,
    }
}

/// True for characters that may begin an emoticon
pub fn is_initial_char(c: char) -> bool {
    matches!(c, ':' | ';' | '8' | 'B' | '(' | ')')
}

/// Length in characters of the emoticon at the start of `chars`, or 0.
///
/// Scanning stops at whitespace or at a character outside the emoticon
/// alphabet. There is no length cap.
pub fn recognize(chars: &[char]) -> usize {
    let mut state = EmoticonState::Start;
    let mut length = 0;

    for &c in chars {
        if c.is_whitespace() {
            break;
        }
        let Some(part) = part_of(c) else {
            break;
        };
        state = step(state, part);
        if state == EmoticonState::Fail {
            return 0;
        }
        length += 1;
    }

    match state {
        EmoticonState::OnEyes | EmoticonState::OnMouth => length,
        _ => 0,
    }
}
