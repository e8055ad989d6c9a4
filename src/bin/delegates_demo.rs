//! Run with: cargo run --bin delegates_demo [config.toml]

use std::path::PathBuf;
use std::process::exit;

use colored::Colorize;
use oop_generics_patterns::{delegates, logging, DemoConfig, DemoError};

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
    eprintln!("{}", "=== Multicast Callbacks ===".bold().cyan());
    let stdout = std::io::stdout();
    delegates::run(&config.delegates, &mut stdout.lock())
}
