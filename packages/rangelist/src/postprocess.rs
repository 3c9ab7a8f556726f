use itertools::Itertools;

use crate::Item;

/// Applies the optional deduplication and merge passes to a fully expanded sequence.
///
/// Deduplication keeps the first occurrence of each item. Merging sorts ascending and runs after
/// deduplication.
pub(crate) fn post_process(items: Vec<Item>, deduplicate: bool, merge: bool) -> Vec<Item> {
    let mut items = if deduplicate {
        items.into_iter().unique().collect()
    } else {
        items
    };

    if merge {
        items.sort_unstable();
    }

    items
}
