#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Binary entry point for the `rangelist` tool.
//!
//! Inputs that start with `-` (e.g. `-3--1`) must follow a `--` argument so they are not taken
//! for an option.

use std::num::NonZero;
use std::process::ExitCode;

use argh::FromArgs;
use rangelist::{Error, Expander, OutputFormat, Rendered, format};
use tracing_subscriber::EnvFilter;

/// Expand a list of numbers and ranges such as "1-3,5,7-9:2" into the integers it denotes.
#[derive(FromArgs, Debug)]
struct Args {
    /// the numbers and ranges to expand
    #[argh(positional)]
    input: String,

    /// range delimiter to recognize; repeat to give several, in order of precedence (replaces the
    /// defaults "-", "..", "to" and "~")
    #[argh(option, long = "delimiter")]
    delimiters: Vec<String>,

    /// delimiter between a range and its step (default ":")
    #[argh(option)]
    step_delimiter: Option<String>,

    /// reject ranges whose start is greater than their end
    #[argh(switch)]
    no_reversed: bool,

    /// sort the result in ascending order
    #[argh(switch)]
    merge: bool,

    /// remove repeated numbers, keeping the first occurrence
    #[argh(switch)]
    deduplicate: bool,

    /// fail instead of producing more than this many numbers
    #[argh(option)]
    max_items: Option<NonZero<usize>>,

    /// output format: list, set or csv (default list)
    #[argh(option, default = "OutputFormat::List")]
    format: OutputFormat,
}

// Binary entry point - mutations would require subprocess testing, covered by integration tests.
#[cfg_attr(test, mutants::skip)]
#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Rendered, Error> {
    let mut builder = Expander::builder()
        .allow_reversed(!args.no_reversed)
        .allow_merged(args.merge)
        .allow_deduplicate(args.deduplicate);

    if !args.delimiters.is_empty() {
        builder = builder.delimiters(args.delimiters.iter().cloned());
    }

    if let Some(step_delimiter) = &args.step_delimiter {
        builder = builder.step_delimiter(step_delimiter.as_str());
    }

    if let Some(max_items) = args.max_items {
        builder = builder.max_items(max_items);
    }

    let items = builder.build()?.expand(&args.input)?;

    Ok(format(items, args.format))
}
