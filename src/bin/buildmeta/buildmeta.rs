use std::path::Path;

use buildmeta::{error::Error, metadata::BuildMetadata};
use clap::Parser;
use colored::Colorize;

mod config;
use config::Cli;

fn run() -> Result<(), Error> {
    // The repository is expected at the ambient working directory
    let metadata = BuildMetadata::capture(Path::new("."))?;

    for flag in metadata.define_flags() {
        println!("{flag}");
    }

    Ok(())
}

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    if std::env::var("RUST_LOG").is_err() {
        match &cli.loglevel {
            0 => {}
            1 => std::env::set_var("RUST_LOG", "info"),
            2 => std::env::set_var("RUST_LOG", "debug"),
            _ => std::env::set_var("RUST_LOG", "trace"),
        }
    }
    pretty_env_logger::init();

    match run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    }
}
