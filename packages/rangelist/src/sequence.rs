use std::cmp::Ordering;

use itertools::Either;

use crate::range::ParsedRange;
use crate::{Error, Item};

impl ParsedRange {
    /// Fails if the range is descending and descending ranges are not allowed.
    pub(crate) fn ensure_direction_allowed(
        &self,
        token: &str,
        allow_reversed: bool,
    ) -> crate::Result<()> {
        if self.start > self.end && !allow_reversed {
            return Err(Error::ReversedRangeNotAllowed {
                token: token.to_string(),
                start: self.start,
                end: self.end,
            });
        }

        Ok(())
    }

    /// The number of items [`items()`][Self::items] will yield, saturating at `u64::MAX`.
    pub(crate) fn len(&self) -> u64 {
        let span = self.start.abs_diff(self.end);
        // The remainder is the part of the span that the last step does not reach.
        (span / self.step.unsigned_abs()).saturating_add(1)
    }

    /// Yields `start`, then every value one step further towards `end`, as long as it does not go
    /// past `end`.
    ///
    /// The direction comes from comparing `start` and `end`; only the magnitude of the step is
    /// used. A range where `start == end` yields exactly one item.
    pub(crate) fn items(&self) -> impl Iterator<Item = Item> {
        // A stride that does not fit into usize is larger than any span, so only `start` remains.
        let stride = usize::try_from(self.step.unsigned_abs().get()).unwrap_or(usize::MAX);

        match self.start.cmp(&self.end) {
            Ordering::Less | Ordering::Equal => {
                Either::Left((self.start..=self.end).step_by(stride))
            }
            Ordering::Greater => Either::Right((self.end..=self.start).rev().step_by(stride)),
        }
    }
}
