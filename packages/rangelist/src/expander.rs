use std::num::NonZero;

use tracing::{debug, trace};

use crate::postprocess::post_process;
use crate::range::{Parsed, parse_token};
use crate::tokens::tokens;
use crate::{Error, Item};

/// Range delimiters recognized by default, in order of precedence.
pub const DEFAULT_DELIMITERS: [&str; 4] = ["-", "..", "to", "~"];

/// Separates a range from its step by default.
pub const DEFAULT_STEP_DELIMITER: &str = ":";

/// Expands range list strings such as `1-3,5,7-9:2` into the integers they denote.
///
/// An expander holds an immutable configuration and no other state, so one instance can be
/// shared between threads and used for any number of expansions. Use [`Expander::default()`] for
/// the default configuration or [`Expander::builder()`] to customize it.
///
/// # Example
///
/// ```
/// use rangelist::Expander;
///
/// let expander = Expander::builder()
///     .allow_deduplicate(true)
///     .allow_merged(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     expander.expand("4-7,1-3,2-5,4-6").unwrap(),
///     vec![1, 2, 3, 4, 5, 6, 7]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Expander {
    delimiters: Vec<String>,
    step_delimiter: String,

    allow_reversed: bool,
    allow_merged: bool,
    allow_deduplicate: bool,

    max_items: Option<NonZero<usize>>,
}

impl Expander {
    /// Starts configuring an expander, beginning from the default configuration.
    #[must_use]
    pub fn builder() -> ExpanderBuilder {
        ExpanderBuilder::new()
    }

    /// Expands the input into the sequence of integers it denotes.
    ///
    /// The input is a comma-separated list of tokens. Each token is a single integer or a range
    /// `<start><delimiter><end>`, optionally followed by `<step delimiter><step>`. Items appear in
    /// token order and, within a range, in the order the range generates them. Deduplication and
    /// merging are applied afterwards if enabled.
    ///
    /// An empty input, or one that consists only of separators and whitespace, expands to an empty
    /// sequence.
    ///
    /// # Errors
    ///
    /// Fails on the first token that cannot be expanded. No partial result is returned.
    ///
    /// # Resource usage
    ///
    /// Without a [`max_items`][ExpanderBuilder::max_items] limit, the size of the result is
    /// limited only by the input. A short token like `1-999999999999` will attempt to allocate
    /// terabytes of memory.
    pub fn expand(&self, input: &str) -> crate::Result<Vec<Item>> {
        let mut items = Vec::new();

        for token in tokens(input) {
            match parse_token(token, &self.delimiters, &self.step_delimiter)? {
                Parsed::Single(item) => {
                    trace!(token, item, "single number");

                    self.ensure_capacity(token, items.len(), 1)?;
                    items.push(item);
                }
                Parsed::Range(range) => {
                    trace!(
                        token,
                        start = range.start,
                        end = range.end,
                        step = range.step.get(),
                        "range"
                    );

                    range.ensure_direction_allowed(token, self.allow_reversed)?;
                    self.ensure_capacity(token, items.len(), range.len())?;
                    items.extend(range.items());
                }
            }
        }

        let expanded_count = items.len();
        let items = post_process(items, self.allow_deduplicate, self.allow_merged);

        debug!(
            expanded_count,
            result_count = items.len(),
            "expanded range list"
        );

        Ok(items)
    }

    fn ensure_capacity(&self, token: &str, current: usize, additional: u64) -> crate::Result<()> {
        let Some(limit) = self.max_items else {
            return Ok(());
        };

        let current = u64::try_from(current).unwrap_or(u64::MAX);
        let limit_u64 = u64::try_from(limit.get()).unwrap_or(u64::MAX);

        if current.saturating_add(additional) > limit_u64 {
            return Err(Error::TooManyItems {
                token: token.to_string(),
                limit: limit.get(),
            });
        }

        Ok(())
    }

    /// The range delimiters, in order of precedence.
    #[must_use]
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// The delimiter that separates a range from its step.
    #[must_use]
    pub fn step_delimiter(&self) -> &str {
        &self.step_delimiter
    }

    /// Whether ranges with a start greater than their end are expanded (in descending order).
    #[must_use]
    pub fn allow_reversed(&self) -> bool {
        self.allow_reversed
    }

    /// Whether the result is sorted in ascending order.
    #[must_use]
    pub fn allow_merged(&self) -> bool {
        self.allow_merged
    }

    /// Whether repeated items are removed from the result, keeping the first occurrence.
    #[must_use]
    pub fn allow_deduplicate(&self) -> bool {
        self.allow_deduplicate
    }

    /// The maximum number of items an expansion may produce before post-processing, if limited.
    #[must_use]
    pub fn max_items(&self) -> Option<NonZero<usize>> {
        self.max_items
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.map(String::from).to_vec(),
            step_delimiter: DEFAULT_STEP_DELIMITER.to_string(),
            allow_reversed: true,
            allow_merged: false,
            allow_deduplicate: false,
            max_items: None,
        }
    }
}

/// Builds an [`Expander`] with a custom configuration.
///
/// Obtain one via [`Expander::builder()`]. Every setting not explicitly changed keeps its default:
///
/// * delimiters `-`, `..`, `to`, `~` (tried in that order)
/// * step delimiter `:`
/// * reversed ranges allowed
/// * no merging, no deduplication
/// * no limit on the number of items
#[derive(Clone, Debug)]
#[must_use]
pub struct ExpanderBuilder {
    expander: Expander,
}

impl ExpanderBuilder {
    fn new() -> Self {
        Self {
            expander: Expander::default(),
        }
    }

    /// Replaces the range delimiters. They are tried in the given order and the first one that
    /// splits a token into two operands is used for that token.
    pub fn delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expander.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the delimiter that separates a range from its step.
    pub fn step_delimiter(mut self, step_delimiter: impl Into<String>) -> Self {
        self.expander.step_delimiter = step_delimiter.into();
        self
    }

    /// Sets whether a range whose start is greater than its end is expanded in descending order
    /// (`true`) or rejected with [`Error::ReversedRangeNotAllowed`] (`false`).
    pub fn allow_reversed(mut self, value: bool) -> Self {
        self.expander.allow_reversed = value;
        self
    }

    /// Sets whether the result is sorted in ascending order.
    pub fn allow_merged(mut self, value: bool) -> Self {
        self.expander.allow_merged = value;
        self
    }

    /// Sets whether repeated items are removed, keeping the first occurrence of each.
    pub fn allow_deduplicate(mut self, value: bool) -> Self {
        self.expander.allow_deduplicate = value;
        self
    }

    /// Limits how many items an expansion may produce before post-processing. An input that would
    /// exceed the limit fails with [`Error::TooManyItems`] before the offending range is expanded.
    pub fn max_items(mut self, limit: NonZero<usize>) -> Self {
        self.expander.max_items = Some(limit);
        self
    }

    /// Validates the configuration and creates the expander.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if there are no range delimiters, if any delimiter
    /// is empty, or if the step delimiter overlaps with a range delimiter (one containing the
    /// other) so that step syntax would be ambiguous.
    pub fn build(self) -> crate::Result<Expander> {
        let expander = self.expander;

        if expander.delimiters.is_empty() {
            return Err(Error::invalid_configuration(
                "at least one range delimiter is required",
            ));
        }

        if expander.delimiters.iter().any(String::is_empty) {
            return Err(Error::invalid_configuration(
                "range delimiters must not be empty",
            ));
        }

        if expander.step_delimiter.is_empty() {
            return Err(Error::invalid_configuration(
                "the step delimiter must not be empty",
            ));
        }

        if let Some(overlapping) = expander.delimiters.iter().find(|delimiter| {
            delimiter.contains(expander.step_delimiter.as_str())
                || expander.step_delimiter.contains(delimiter.as_str())
        }) {
            return Err(Error::invalid_configuration(format!(
                "the step delimiter '{}' overlaps with the range delimiter '{overlapping}'",
                expander.step_delimiter
            )));
        }

        Ok(expander)
    }
}

/// Expands a range list using the default configuration.
///
/// See [`Expander::expand()`] for details.
///
/// # Example
///
/// ```
/// assert_eq!(
///     rangelist::expand("1-3,5,7-9").unwrap(),
///     vec![1, 2, 3, 5, 7, 8, 9]
/// );
/// ```
///
/// # Errors
///
/// Fails on the first token that cannot be expanded.
pub fn expand(input: &str) -> crate::Result<Vec<Item>> {
    Expander::default().expand(input)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use new_zealand::nz;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Expander: Send, Sync, Clone);
    assert_impl_all!(ExpanderBuilder: Send, Sync);

    #[test]
    fn defaults() {
        let expander = Expander::default();

        assert_eq!(expander.delimiters(), ["-", "..", "to", "~"]);
        assert_eq!(expander.step_delimiter(), ":");
        assert!(expander.allow_reversed());
        assert!(!expander.allow_merged());
        assert!(!expander.allow_deduplicate());
        assert_eq!(expander.max_items(), None);

        let built = Expander::builder().build().unwrap();
        assert_eq!(built.delimiters(), expander.delimiters());
    }

    #[test]
    fn expand_smoke_test() {
        assert_eq!(expand("").unwrap(), Vec::<Item>::new());
        assert_eq!(expand("  , , , ").unwrap(), Vec::<Item>::new());
        assert_eq!(expand("5").unwrap(), vec![5]);
        assert_eq!(expand("1-3").unwrap(), vec![1, 2, 3]);
        assert_eq!(expand("1-2,4").unwrap(), vec![1, 2, 4]);
        assert_eq!(expand("1-3,5,7-9").unwrap(), vec![1, 2, 3, 5, 7, 8, 9]);
        assert_eq!(expand("3-1").unwrap(), vec![3, 2, 1]);
        assert_eq!(expand("5,1-3,2,7").unwrap(), vec![5, 1, 2, 3, 2, 7]);
    }

    #[test]
    fn builder_settings_are_applied() {
        let expander = Expander::builder()
            .delimiters(["..", "-"])
            .step_delimiter("/")
            .allow_reversed(false)
            .allow_merged(true)
            .allow_deduplicate(true)
            .max_items(nz!(10))
            .build()
            .unwrap();

        assert_eq!(expander.delimiters(), ["..", "-"]);
        assert_eq!(expander.step_delimiter(), "/");
        assert!(!expander.allow_reversed());
        assert!(expander.allow_merged());
        assert!(expander.allow_deduplicate());
        assert_eq!(expander.max_items(), Some(nz!(10)));

        assert_eq!(expander.expand("5..9/2,1-2").unwrap(), vec![1, 2, 5, 7, 9]);
    }

    #[test]
    fn invalid_configuration_is_error() {
        let no_delimiters = Expander::builder().delimiters(Vec::<String>::new()).build();
        let empty_delimiter = Expander::builder().delimiters(["-", ""]).build();
        let empty_step = Expander::builder().step_delimiter("").build();
        let same = Expander::builder().step_delimiter("-").build();
        let contained = Expander::builder().step_delimiter(".").build();
        let containing = Expander::builder().step_delimiter("~~").build();

        for result in [no_delimiters, empty_delimiter, empty_step, same, contained, containing] {
            assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
        }
    }

    #[test]
    fn item_limit() {
        let expander = Expander::builder().max_items(nz!(5)).build().unwrap();

        assert_eq!(expander.expand("1-5").unwrap().len(), 5);
        assert_eq!(expander.expand("1-3,4,5").unwrap().len(), 5);

        assert!(matches!(
            expander.expand("1-3,4-6"),
            Err(Error::TooManyItems { token, limit: 5 }) if token == "4-6"
        ));
        assert!(matches!(
            expander.expand("1-5,6"),
            Err(Error::TooManyItems { token, limit: 5 }) if token == "6"
        ));

        // Checked before anything is allocated.
        assert!(matches!(
            expander.expand("1-999999999999999"),
            Err(Error::TooManyItems { .. })
        ));
    }

    #[test]
    fn reversed_check_precedes_item_limit() {
        let expander = Expander::builder()
            .allow_reversed(false)
            .max_items(nz!(5))
            .build()
            .unwrap();

        assert!(matches!(
            expander.expand("100-1"),
            Err(Error::ReversedRangeNotAllowed { start: 100, end: 1, .. })
        ));
    }

    #[test]
    fn first_failing_token_is_reported() {
        let error = expand("1-3,x,5:2").unwrap_err();

        assert!(matches!(error, Error::InvalidNumber { token, .. } if token == "x"));
    }
}
