//! logvm-types - CLI for inspecting the type inference core

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logvm_types::builtins::{builtin_names, builtin_type};
use logvm_types::capture::{infer_capture_type_with, parse_pattern};
use logvm_types::util::config::CheckerConfig;
use logvm_types::util::logger;
use logvm_types::{TypeArena, NAME, VERSION};
use std::path::PathBuf;
use tracing::debug;

/// Inspect types assigned by the log-processing VM type checker
#[derive(Parser, Debug)]
#[command(name = "logvm-types")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Checker configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the inferred type of a capture group
    Capture {
        /// Regular expression
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Capture group number (1-based)
        #[arg(value_name = "GROUP")]
        group: usize,
    },

    /// List builtin function signatures
    Builtins,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CheckerConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => CheckerConfig::default(),
    };

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_with_level(config.log_level);
    }
    debug!(capture_default = %config.capture_default, "loaded configuration");

    let arena = TypeArena::new();
    match args.command {
        Commands::Capture { pattern, group } => {
            let hir = parse_pattern(&pattern)
                .with_context(|| format!("Failed to parse pattern: {}", pattern))?;
            match infer_capture_type_with(&hir, group, config.capture_default.to_type()) {
                Some(ty) => println!("{}", arena.display(&ty)),
                None => println!("untyped"),
            }
        }
        Commands::Builtins => {
            for name in builtin_names() {
                if let Some(ty) = builtin_type(name) {
                    println!("{:<12} {}", name, arena.display(ty));
                }
            }
        }
    }

    Ok(())
}
