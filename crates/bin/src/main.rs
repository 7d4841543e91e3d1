use arbor::{Config, Engine};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::transform::Transform;
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arbor=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let engine = Engine::new(config);
    let format = OutputFormat::from_flag(cli.compact_output);

    match &cli.command {
        Commands::Coalesce(args) => commands::flat::coalesce(&engine, args, format),
        Commands::Diffuse(args) => commands::flat::diffuse(&engine, args, format),
        Commands::Get(args) => commands::access::get(&engine, args, format),
        Commands::Set(args) => commands::access::set(&engine, args, format),
        Commands::Merge(args) => commands::merge::run(&engine, args, format),
        Commands::Compact(args) => commands::transform::run(&engine, Transform::Compact, args, format),
        Commands::Stringify(args) => {
            commands::transform::run(&engine, Transform::Stringify, args, format)
        }
        Commands::Autotype(args) => {
            commands::transform::run(&engine, Transform::Autotype, args, format)
        }
    }
}
