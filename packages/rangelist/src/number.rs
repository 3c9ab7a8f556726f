use crate::{Error, Item};

/// Parses an optionally negative decimal integer.
///
/// Only ASCII digits with at most one leading `-` are accepted, so inputs that `str::parse`
/// would tolerate (such as a leading `+`) are rejected. Values that do not fit into [`Item`] are
/// rejected as well.
///
/// `token` is the token the text came from and is only used for error reporting.
pub(crate) fn parse_number(token: &str, text: &str) -> crate::Result<Item> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_number(token, text));
    }

    text.parse::<Item>()
        .map_err(|_overflow| Error::invalid_number(token, text))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!(parse_number("5", "5").unwrap(), 5);
        assert_eq!(parse_number("-5", "-5").unwrap(), -5);
        assert_eq!(parse_number("007", "007").unwrap(), 7);
        assert_eq!(parse_number("-0", "-0").unwrap(), 0);
    }

    #[test]
    fn extreme_values() {
        assert_eq!(
            parse_number("x", "9223372036854775807").unwrap(),
            Item::MAX
        );
        assert_eq!(
            parse_number("x", "-9223372036854775808").unwrap(),
            Item::MIN
        );

        parse_number("x", "9223372036854775808").unwrap_err();
    }

    #[test]
    fn garbage_is_error() {
        for text in ["", "-", "+5", "--5", "1.5", "a", "5a", " 5", "1_000", "٣"] {
            let error = parse_number("token", text).unwrap_err();

            assert!(
                matches!(&error, Error::InvalidNumber { token, value } if token == "token" && value == text),
                "unexpected error for {text:?}: {error:?}"
            );
        }
    }
}
