//! Get and set commands.

use arbor::{Engine, PathBuf, Value};

use crate::cli::{GetArgs, SetArgs};
use crate::output::{OutputFormat, parse_cli_value, print_json, read_document};

/// Run the get command
pub fn get(
    engine: &Engine,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = read_document(args.input.input.as_deref())?;
    let path = PathBuf::split(&args.path, &args.joiner);

    let value = engine.get_or(&tree, &path, Value::Null);
    print_json(&*value, format)
}

/// Run the set command
pub fn set(
    engine: &Engine,
    args: &SetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = read_document(args.input.input.as_deref())?;
    let path = PathBuf::split(&args.path, &args.joiner);
    let value = parse_cli_value(&args.value);

    if args.strict {
        engine.try_set(&mut tree, &path, value)?;
    } else {
        engine.set(&mut tree, &path, value);
    }
    print_json(&tree, format)
}
