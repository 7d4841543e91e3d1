//! Merge command.

use arbor::Engine;

use crate::cli::MergeArgs;
use crate::output::{OutputFormat, print_json, read_document};

/// Run the merge command
pub fn run(
    engine: &Engine,
    args: &MergeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = read_document(Some(args.first.as_path()))?;
    let second = read_document(Some(args.second.as_path()))?;

    let merged = engine.merge(&first, &second)?;
    print_json(&merged, format)
}
