// src/bin/edgemill.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use edgemill_core::cli::{self, Cli};
use edgemill_core::run;

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli::resolve(&cli)?;
    let summary = run::run(&config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
