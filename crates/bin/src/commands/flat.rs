//! Coalesce and diffuse commands.

use arbor::{Engine, FlatError, Value};

use crate::cli::FlatArgs;
use crate::output::{OutputFormat, print_json, read_document};

/// Run the coalesce command
pub fn coalesce(
    engine: &Engine,
    args: &FlatArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = read_document(args.input.input.as_deref())?;

    if args.typed {
        let (flat, errors) = engine.coalesce_map_typed(&tree, &args.joiner, &args.type_sep);
        report(&errors);
        print_json(&flat, format)
    } else {
        print_json(&engine.coalesce_map(&tree, &args.joiner), format)
    }
}

/// Run the diffuse command
pub fn diffuse(
    engine: &Engine,
    args: &FlatArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let flat = match read_document(args.input.input.as_deref())? {
        Value::Map(map) => map,
        other => {
            return Err(format!("Expected a flat JSON object, found {}", other.type_name()).into());
        }
    };

    let tree = if args.typed {
        let (tree, errors) = engine.diffuse_map_typed(flat, &args.joiner, &args.type_sep);
        report(&errors);
        tree
    } else {
        engine.diffuse_map(flat, &args.joiner)
    };
    print_json(&tree, format)
}

/// Logs per-key conversion failures; the partial result is still printed.
fn report(errors: &[FlatError]) {
    for err in errors {
        tracing::warn!(key = err.key(), "{err}");
    }
    if !errors.is_empty() {
        tracing::warn!("{} keys skipped", errors.len());
    }
}
