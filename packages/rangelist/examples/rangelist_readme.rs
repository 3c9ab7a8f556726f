//! Example that demonstrates the usage shown in the package documentation.

use rangelist::{Expander, OutputFormat, format};

fn main() {
    println!("=== rangelist example ===");

    let items = rangelist::expand("1-3,5,7-9:2").unwrap();
    assert_eq!(items, vec![1, 2, 3, 5, 7, 9]);

    println!("Expanded: {items:?}");
    println!("As CSV: {}", format(items, OutputFormat::Csv));

    let expander = Expander::builder()
        .allow_deduplicate(true)
        .allow_merged(true)
        .build()
        .unwrap();

    let items = expander.expand("-3--1,10-1:3,4..6").unwrap();
    println!("Merged and deduplicated: {}", format(items, OutputFormat::Set));

    println!("Example completed successfully!");
}
