/// Separates the parts of a range list.
pub(crate) const SEPARATOR: char = ',';

/// Splits a range list into its trimmed, non-empty tokens, in input order.
pub(crate) fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
