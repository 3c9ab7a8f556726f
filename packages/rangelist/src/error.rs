use thiserror::Error;

use crate::Item;

/// Errors that can occur when expanding a range list or rendering the result.
///
/// Every variant raised while processing input names the token (one comma-separated part of the
/// input, trimmed) that caused it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A part of the token was expected to be an integer but was not.
    #[error("Invalid number: '{value}' in '{token}' - must be a valid integer or range")]
    InvalidNumber {
        /// The token that contained the invalid value.
        token: String,

        /// The specific text that failed to parse. May be the whole token.
        value: String,
    },

    /// The range runs from a larger start to a smaller end but reversed ranges are disabled.
    #[error(
        "Reversed range not allowed: {start}-{end} in '{token}' - enable reversed ranges to allow descending ranges"
    )]
    ReversedRangeNotAllowed {
        /// The token that contained the range.
        token: String,

        /// The parsed start of the range.
        start: Item,

        /// The parsed (inclusive) end of the range.
        end: Item,
    },

    /// An explicit step of zero was given.
    #[error("Step value cannot be zero in '{token}' - must be a non-zero integer")]
    ZeroStep {
        /// The token that contained the step.
        token: String,
    },

    /// Step syntax was used on something that is not a range, or the step syntax was malformed.
    #[error("Step syntax '{token}' cannot be used with a single number - use with ranges only")]
    StepOnSingleNumber {
        /// The token that contained the step syntax.
        token: String,
    },

    /// Expanding the token would take the result over the configured item limit.
    #[error("Expanding '{token}' would exceed the limit of {limit} items")]
    TooManyItems {
        /// The token whose expansion crossed the limit.
        token: String,

        /// The configured limit.
        limit: usize,
    },

    /// The expander was configured with values that cannot be used together.
    #[error("Invalid configuration: {problem}")]
    InvalidConfiguration {
        /// A human-readable description of the problem.
        problem: String,
    },

    /// The requested output format is not one of the supported formats.
    #[error("Invalid output format: '{value}' - must be one of 'list', 'set' or 'csv'")]
    InvalidOutputFormat {
        /// The format name that was requested.
        value: String,
    },
}

impl Error {
    pub(crate) fn invalid_number(token: &str, value: &str) -> Self {
        Self::InvalidNumber {
            token: token.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_configuration(problem: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            problem: problem.into(),
        }
    }
}

/// A specialized `Result` type for range list operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
