//! Locates the range separator in a token where the delimiter also occurs as a minus sign.
//!
//! With `-` as a range delimiter, a token like `-3--1` contains three candidate positions. The
//! scanner walks the token once and classifies each delimiter occurrence by what came before it:
//!
//! * at the start of the token, the delimiter is a sign;
//! * after a digit (possibly followed by whitespace), it is the separator;
//! * anywhere else, it belongs to an operand (e.g. the sign of the range end).
//!
//! The first occurrence classified as a separator wins.

/// What the scanner has seen immediately before the current position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Nothing yet (or only whitespace).
    Start,

    /// A digit.
    Digit,

    /// A digit followed by whitespace.
    DigitSpace,

    /// A sign or any other non-digit text.
    Other,
}

impl State {
    fn after_char(self, c: char) -> Self {
        if c.is_ascii_digit() {
            Self::Digit
        } else if c.is_whitespace() {
            match self {
                Self::Digit | Self::DigitSpace => Self::DigitSpace,
                Self::Start | Self::Other => self,
            }
        } else {
            Self::Other
        }
    }

    fn precedes_separator(self) -> bool {
        matches!(self, Self::Digit | Self::DigitSpace)
    }
}

/// Returns the byte offset of the delimiter occurrence that separates range start from range
/// end, or `None` if no occurrence qualifies.
pub(crate) fn find_separator(token: &str, delimiter: &str) -> Option<usize> {
    if delimiter.is_empty() {
        return None;
    }

    let mut state = State::Start;
    let mut position = 0;

    while let Some(remaining) = token.get(position..) {
        if remaining.starts_with(delimiter) {
            if state.precedes_separator() {
                return Some(position);
            }

            // A sign at the start or part of an operand: step over it as a whole.
            state = State::Other;
            position += delimiter.len();
            continue;
        }

        let c = remaining.chars().next()?;
        state = state.after_char(c);
        position += c.len_utf8();
    }

    None
}
