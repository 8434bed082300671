use clap::Parser;
use color_eyre::Result;

use telepick::cli::Cli;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    env_logger::init();

    Cli::parse().run()
}
