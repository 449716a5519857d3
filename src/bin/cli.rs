// src/bin/cli.rs
use clap::Parser;
use grant_finder::cli::{ self, CliArgs };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    if let Err(e) = grant_finder::log::init(args.log_level()) {
        eprintln!("Logger setup failed: {e}");
    }
    cli::run(args)
}
