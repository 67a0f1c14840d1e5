use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docblock_config::Config;
use docblock_engine::{Extractor, PathResolver, declarations};
use serde::Serialize;
use std::path::PathBuf;

/// Extract documentation channels from annotated Rust source blocks.
#[derive(Parser, Debug)]
#[command(name = "docblock", version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/docblock/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory that `@/` paths resolve against; overrides the config file
    #[arg(long, global = true)]
    source_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a `<STARTS_WITH> {` block into one record per declaration
    Block { file: String, starts_with: String },
    /// Merge the channel comments inside a block that may nest braces
    Comments { file: String, starts_with: String },
    /// Parse the documented fields of `pub struct <NAME>`
    Struct { file: String, name: String },
    /// Parse the documented variants of `pub enum <NAME>`
    Enum { file: String, name: String },
    /// Parse every built-in function source in a directory
    Fns { dir: String },
    /// Parse every step source in a directory
    Steps { dir: String },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let resolver = build_resolver(cli.config, cli.source_root)?;
    log::debug!(
        "resolving '{}' against {}",
        resolver.alias(),
        resolver.source_root().display()
    );
    let extractor = Extractor::new(resolver);

    match cli.command {
        Command::Block { file, starts_with } => {
            let records = extractor
                .split_block(&file, &starts_with)
                .with_context(|| format!("extracting block from {file}"))?;
            print_json(&records)
        }
        Command::Comments { file, starts_with } => {
            let values = extractor
                .comments_in_block(&file, &starts_with)
                .with_context(|| format!("collecting comments from {file}"))?;
            print_json(&values)
        }
        Command::Struct { file, name } => {
            let fields = declarations::parse_struct(&extractor, &file, &name)
                .with_context(|| format!("parsing struct {name} in {file}"))?;
            print_json(&fields)
        }
        Command::Enum { file, name } => {
            let variants = declarations::parse_enum_variants(&extractor, &file, &name)
                .with_context(|| format!("parsing enum {name} in {file}"))?;
            print_json(&variants)
        }
        Command::Fns { dir } => {
            let fns = declarations::parse_builtin_fns_dir(&extractor, &dir)
                .with_context(|| format!("parsing functions in {dir}"))?;
            print_json(&fns)
        }
        Command::Steps { dir } => {
            let steps = declarations::parse_steps_dir(&extractor, &dir)
                .with_context(|| format!("parsing steps in {dir}"))?;
            print_json(&steps)
        }
    }
}

/// Source root precedence: `--source-root`, then the config file, then `./src`.
fn build_resolver(config_path: Option<PathBuf>, source_root: Option<PathBuf>) -> Result<PathResolver> {
    let config = match config_path {
        Some(path) => Config::load_from_path(&path)?
            .with_context(|| format!("config file '{}' not found", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };

    let root = source_root.unwrap_or(config.source_root);
    Ok(PathResolver::with_alias(config.alias, root))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
