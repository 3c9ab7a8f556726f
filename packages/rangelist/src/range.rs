use std::num::NonZero;

use new_zealand::nz;
use tracing::trace;

use crate::number::parse_number;
use crate::scan::find_separator;
use crate::{Error, Item};

/// Step used when a range does not specify one.
pub(crate) const DEFAULT_STEP: NonZero<Item> = nz!(1);

/// The bounds and step of a single range token, before expansion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ParsedRange {
    pub(crate) start: Item,

    /// Inclusive.
    pub(crate) end: Item,

    pub(crate) step: NonZero<Item>,
}

/// What a single token denotes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Parsed {
    Single(Item),
    Range(ParsedRange),
}

/// Parses one token into either a range or a single number.
///
/// Range delimiters are tried in the given order. The first delimiter that splits the token into
/// two operands decides the outcome: if either operand is not a number, that is an error and no
/// further delimiters are tried.
pub(crate) fn parse_token(
    token: &str,
    delimiters: &[String],
    step_delimiter: &str,
) -> crate::Result<Parsed> {
    let (body, step) = split_step(token, step_delimiter)?;

    match find_bounds(token, body, delimiters)? {
        Some((start, end)) => Ok(Parsed::Range(ParsedRange {
            start,
            end,
            step: step.unwrap_or(DEFAULT_STEP),
        })),
        None if step.is_some() => Err(Error::StepOnSingleNumber {
            token: token.to_string(),
        }),
        None => parse_number(token, body).map(Parsed::Single),
    }
}

/// Separates an optional step suffix from the rest of the token.
///
/// The split happens on the last occurrence of the step delimiter. Both sides must be non-empty
/// and the remaining body must not contain another step delimiter.
fn split_step<'a>(
    token: &'a str,
    step_delimiter: &str,
) -> crate::Result<(&'a str, Option<NonZero<Item>>)> {
    let Some((body, step)) = token.rsplit_once(step_delimiter) else {
        return Ok((token, None));
    };

    let body = body.trim();
    let step = step.trim();

    if body.is_empty() || step.is_empty() || body.contains(step_delimiter) {
        return Err(Error::StepOnSingleNumber {
            token: token.to_string(),
        });
    }

    let step = NonZero::new(parse_number(token, step)?).ok_or_else(|| Error::ZeroStep {
        token: token.to_string(),
    })?;

    Ok((body, Some(step)))
}

/// Finds the start and end of a range in `body`, or `None` if it is not a range.
fn find_bounds(
    token: &str,
    body: &str,
    delimiters: &[String],
) -> crate::Result<Option<(Item, Item)>> {
    for delimiter in delimiters {
        let Some((start, end)) = split_bounds(body, delimiter) else {
            continue;
        };

        let start = start.trim();
        let end = end.trim();

        if start.is_empty() || end.is_empty() {
            continue;
        }

        trace!(token, delimiter = delimiter.as_str(), start, end, "range delimiter matched");

        return Ok(Some((
            parse_number(token, start)?,
            parse_number(token, end)?,
        )));
    }

    Ok(None)
}

fn split_bounds<'a>(body: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    if body.matches(delimiter).nth(1).is_none() {
        // Zero or one occurrence, so there is nothing to disambiguate.
        return body.split_once(delimiter);
    }

    let (start, rest) = body.split_at_checked(find_separator(body, delimiter)?)?;
    Some((start, rest.strip_prefix(delimiter)?))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        ["-", "..", "to", "~"].map(String::from).to_vec()
    }

    fn parse(token: &str) -> crate::Result<Parsed> {
        parse_token(token, &defaults(), ":")
    }

    fn range(start: Item, end: Item, step: Item) -> Parsed {
        Parsed::Range(ParsedRange {
            start,
            end,
            step: NonZero::new(step).unwrap(),
        })
    }

    #[test]
    fn parse_smoke_test() {
        assert_eq!(parse("5").unwrap(), Parsed::Single(5));
        assert_eq!(parse("-5").unwrap(), Parsed::Single(-5));
        assert_eq!(parse("1-3").unwrap(), range(1, 3, 1));
        assert_eq!(parse("4..6").unwrap(), range(4, 6, 1));
        assert_eq!(parse("7to9").unwrap(), range(7, 9, 1));
        assert_eq!(parse("7~9").unwrap(), range(7, 9, 1));
        assert_eq!(parse("1 - 3").unwrap(), range(1, 3, 1));
        assert_eq!(parse("10-1").unwrap(), range(10, 1, 1));
    }

    #[test]
    fn negative_bounds() {
        assert_eq!(parse("-3--1").unwrap(), range(-3, -1, 1));
        assert_eq!(parse("-3-1").unwrap(), range(-3, 1, 1));
        assert_eq!(parse("3--1").unwrap(), range(3, -1, 1));
        assert_eq!(parse("-3..-1").unwrap(), range(-3, -1, 1));
        assert_eq!(parse("-5to5").unwrap(), range(-5, 5, 1));
        assert_eq!(parse("-3 - -1").unwrap(), range(-3, -1, 1));
    }

    #[test]
    fn steps() {
        assert_eq!(parse("1-10:2").unwrap(), range(1, 10, 2));
        assert_eq!(parse("10-1:3").unwrap(), range(10, 1, 3));
        assert_eq!(parse("1-10:-2").unwrap(), range(1, 10, -2));
        assert_eq!(parse("-10--1 : 3").unwrap(), range(-10, -1, 3));
    }

    #[test]
    fn zero_step_is_error() {
        assert!(matches!(parse("1-10:0"), Err(Error::ZeroStep { token }) if token == "1-10:0"));
    }

    #[test]
    fn malformed_step_is_error() {
        for token in ["5:2", "1-10:2:3", ":2", "1-10:", "-5:2"] {
            assert!(
                matches!(parse(token), Err(Error::StepOnSingleNumber { .. })),
                "{token}"
            );
        }
    }

    #[test]
    fn garbage_is_error() {
        for token in ["foo", "a-b", "123-foo", "foo-123", "1-3~5", "1..2..3", "5-", "1--"] {
            assert!(
                matches!(parse(token), Err(Error::InvalidNumber { .. })),
                "{token}"
            );
        }

        assert!(matches!(parse("1-10:x"), Err(Error::InvalidNumber { value, .. }) if value == "x"));
    }

    #[test]
    fn first_matching_delimiter_decides() {
        // The `-` split wins and its failure is reported; `..` is never tried.
        assert!(matches!(
            parse("1-2..3"),
            Err(Error::InvalidNumber { value, .. }) if value == "2..3"
        ));
    }

    #[test]
    fn delimiter_order_is_configurable() {
        let delimiters = ["..", "-"].map(String::from);

        assert_eq!(
            parse_token("-2..-1", &delimiters, ":").unwrap(),
            range(-2, -1, 1)
        );
        assert!(matches!(
            parse_token("1-3", &delimiters[..1], ":"),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn custom_step_delimiter() {
        assert_eq!(
            parse_token("1-9 by 4", &defaults(), "by").unwrap(),
            range(1, 9, 4)
        );
        assert_eq!(
            parse_token("1-10:2", &defaults(), "/").unwrap_err().to_string(),
            "Invalid number: '10:2' in '1-10:2' - must be a valid integer or range"
        );
    }
}
