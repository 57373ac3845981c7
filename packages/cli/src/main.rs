//! Main entry point for the devtoken CLI

mod cli;
mod logging;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args = cli::Cli::parse();
    let token = cli::run(&args).inspect_err(|e| tracing::error!(error = %e, "Token issuing failed"))?;
    println!("{token}");
    Ok(())
}
