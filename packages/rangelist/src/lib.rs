#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Expands strings that describe numbers and ranges of numbers into the concrete sequence of
//! integers they denote.
//!
//! Example range list: `1-3,5,7-9:2`
//!
//! # Format
//!
//! The value is a comma-separated list of zero or more tokens. Whitespace around tokens is
//! ignored, as are empty tokens. Each token is either:
//!
//! * a single integer (e.g. `5` or `-5`)
//! * a range of integers, inclusive at both ends (e.g. `1-3`, `1..3`, `1to3` or `1~3`)
//! * a range of integers with a step (e.g. `1-9:2` which is equivalent to `1,3,5,7,9`)
//!
//! Ranges may have negative bounds (`-3--1` is `-3,-2,-1`). A range whose start is greater than
//! its end counts down (`10-1:3` is `10,7,4,1`) unless reversed ranges are disabled. Only the
//! magnitude of a step is used; the direction always comes from the bounds.
//!
//! The range delimiters and the step delimiter are configurable via [`Expander::builder()`], as
//! are sorting ("merging") and deduplication of the result.
//!
//! The items are of type `i64`.
//!
//! # Example
//!
//! ```
//! let items = rangelist::expand("1-3,5,7-9").unwrap();
//! assert_eq!(items, vec![1, 2, 3, 5, 7, 8, 9]);
//!
//! let items = rangelist::expand("-3--1,10-1:3").unwrap();
//! assert_eq!(items, vec![-3, -2, -1, 10, 7, 4, 1]);
//! ```
//!
//! Rendering the result:
//!
//! ```
//! use rangelist::{OutputFormat, format};
//!
//! let items = rangelist::expand("1-3,4..6,7~9").unwrap();
//!
//! println!("{}", format(items, OutputFormat::Csv));
//! ```

mod error;
mod expander;
mod format;
mod number;
mod postprocess;
mod range;
mod scan;
mod sequence;
mod tokens;

pub use error::*;
pub use expander::*;
pub use format::*;

pub(crate) type Item = i64;
