//! Leaf transform commands: compact, stringify and autotype.

use arbor::{Engine, Value};

use crate::cli::InputArgs;
use crate::output::{OutputFormat, print_json, read_document};

/// Which per-leaf rewrite to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Compact,
    Stringify,
    Autotype,
}

impl Transform {
    fn apply(self, engine: &Engine, tree: &Value) -> Value {
        match self {
            Transform::Compact => engine.compact(tree),
            Transform::Stringify => engine.stringify(tree),
            Transform::Autotype => engine.autotype(tree),
        }
    }
}

/// Run a transform command
pub fn run(
    engine: &Engine,
    transform: Transform,
    args: &InputArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = read_document(args.input.as_deref())?;
    print_json(&transform.apply(engine, &tree), format)
}
