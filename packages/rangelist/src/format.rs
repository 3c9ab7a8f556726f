use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::{Error, Item};

/// Selects how [`format()`] renders an expanded sequence.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// The sequence as-is, displayed as `[1, 2, 3]`.
    #[default]
    List,

    /// The distinct items in ascending order, displayed as `{1, 2, 3}`.
    Set,

    /// The items joined by commas, e.g. `1,2,3`.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Accepts `list`, `set` and `csv`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "set" => Ok(Self::Set),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::InvalidOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Csv => "csv",
        })
    }
}

/// An expanded sequence rendered by [`format()`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Rendered {
    /// See [`OutputFormat::List`].
    List(Vec<Item>),

    /// See [`OutputFormat::Set`].
    Set(BTreeSet<Item>),

    /// See [`OutputFormat::Csv`].
    Csv(String),
}

impl Display for Rendered {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Self::Set(items) => write!(f, "{{{}}}", items.iter().join(", ")),
            Self::Csv(text) => f.write_str(text),
        }
    }
}

/// Renders an expanded sequence in the requested format.
///
/// # Example
///
/// ```
/// use rangelist::{OutputFormat, format};
///
/// let items = rangelist::expand("3,1-2,3").unwrap();
///
/// assert_eq!(format(items.clone(), OutputFormat::List).to_string(), "[3, 1, 2, 3]");
/// assert_eq!(format(items.clone(), OutputFormat::Set).to_string(), "{1, 2, 3}");
/// assert_eq!(format(items, OutputFormat::Csv).to_string(), "3,1,2,3");
/// ```
#[must_use]
pub fn format(items: impl IntoIterator<Item = Item>, output_format: OutputFormat) -> Rendered {
    match output_format {
        OutputFormat::List => Rendered::List(items.into_iter().collect()),
        OutputFormat::Set => Rendered::Set(items.into_iter().collect()),
        OutputFormat::Csv => Rendered::Csv(items.into_iter().join(",")),
    }
}
