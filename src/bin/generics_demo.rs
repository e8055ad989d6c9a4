//! Run with: cargo run --bin generics_demo [config.toml]

use std::path::PathBuf;
use std::process::exit;

use colored::Colorize;
use oop_generics_patterns::{generics, logging, DemoConfig, DemoError};

fn main() {
    let path = std::env::args().nth(1).map(PathBuf::from);
    if let Err(err) = run(path) {
        eprintln!("{} {}", "error:".red().bold(), err);
        exit(1);
    }
}

fn run(path: Option<PathBuf>) -> Result<(), DemoError> {
    let config = DemoConfig::load_or_default(path.as_deref())?;
    logging::init(config.verbose);
    tracing::debug!("config: {:?}", config);

    // stdout carries only the demo lines.
    eprintln!("{}", "=== Generic Containers and Bounds ===".bold().cyan());
    let stdout = std::io::stdout();
    generics::run(&config.generics, &mut stdout.lock())
}
