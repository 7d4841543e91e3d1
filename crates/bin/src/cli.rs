//! CLI argument definitions for the Arbor binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reshape JSON documents: flatten, rebuild, address and merge
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Arbor: path addressing and flat/nested conversion for JSON trees")]
#[command(version)]
pub struct Cli {
    /// Engine configuration file (JSON)
    #[arg(short, long, global = true, env = "ARBOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact_output: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a document into path-keyed entries
    Coalesce(FlatArgs),
    /// Rebuild a document from path-keyed entries
    Diffuse(FlatArgs),
    /// Print the value at a path, or null
    Get(GetArgs),
    /// Write a value at a path, creating containers as needed
    Set(SetArgs),
    /// Deep-merge two documents
    Merge(MergeArgs),
    /// Drop empty leaves
    Compact(InputArgs),
    /// Convert every leaf to text
    Stringify(InputArgs),
    /// Convert text leaves to the scalar they look like
    Autotype(InputArgs),
}

/// Input document location
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input JSON file; stdin when omitted or `-`
    pub input: Option<PathBuf>,
}

/// Arguments shared by coalesce and diffuse
#[derive(clap::Args, Debug)]
pub struct FlatArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Prefix keys with their scalar type
    #[arg(long)]
    pub typed: bool,

    /// String joining path segments in flat keys
    #[arg(short, long, default_value = ".")]
    pub joiner: String,

    /// String separating the type tag from the path in typed keys
    #[arg(short, long, default_value = ":")]
    pub type_sep: String,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Path to read, segments split on the joiner
    pub path: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// String separating path segments
    #[arg(short, long, default_value = ".")]
    pub joiner: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Path to write, segments split on the joiner
    pub path: String,

    /// Value to write; parsed as JSON, or taken as text if it is not JSON
    pub value: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// String separating path segments
    #[arg(short, long, default_value = ".")]
    pub joiner: String,

    /// Fail instead of ignoring writes the document shape cannot take
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Base document
    pub first: PathBuf,
    /// Document merged into the base
    pub second: PathBuf,
}
