//! tokensmith CLI - compile design-token exports into CSS custom properties.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokensmith_canonical::Digest;

mod commands;
mod config;
mod logging;
mod output;

use commands::{build, check, list, name};
use config::{Config, Settings};

#[derive(Parser)]
#[command(name = "tokensmith")]
#[command(about = "Compile design-token JSON exports into CSS custom properties")]
#[command(version)]
struct Cli {
    /// Configuration file (default: ./tokensmith.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Input/output selection shared by the compiling commands.
#[derive(Args)]
struct SourceArgs {
    /// Directory of token JSON documents
    #[arg(long, env = "TOKENSMITH_INPUT", value_name = "DIR")]
    input: Option<PathBuf>,
    /// Pass object/array leaf values through instead of skipping the document
    #[arg(long)]
    permissive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile tokens and write the CSS artifact
    Build {
        #[command(flatten)]
        source: SourceArgs,
        /// Destination CSS file
        #[arg(long, env = "TOKENSMITH_OUTPUT", value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print the build report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fail if the CSS artifact is missing or out of date
    Check {
        #[command(flatten)]
        source: SourceArgs,
        /// CSS file to compare against
        #[arg(long, env = "TOKENSMITH_OUTPUT", value_name = "FILE")]
        output: Option<PathBuf>,
        /// Also require the compiled CSS to hash to this digest (sha-256:<b64>)
        #[arg(long, value_name = "DIGEST")]
        digest: Option<Digest>,
    },
    /// List the resolved tokens
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical name for raw token names
    Name {
        /// Raw token names (e.g. "Color/Brand Primary")
        #[arg(required = true)]
        raw: Vec<String>,
    },
}

fn settings(
    config: &Config,
    source: SourceArgs,
    output: Option<PathBuf>,
) -> Result<Settings, Box<dyn std::error::Error>> {
    Ok(config.resolve(source.input, output, source.permissive)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let load = || Config::load(cli.config.as_deref());
    match cli.command {
        Commands::Build {
            source,
            output,
            json,
        } => build::run(&settings(&load()?, source, output)?, json),
        Commands::Check {
            source,
            output,
            digest,
        } => check::run(&settings(&load()?, source, output)?, digest.as_ref()),
        Commands::List { source, json } => list::run(&settings(&load()?, source, None)?, json),
        Commands::Name { raw } => name::run(raw),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
