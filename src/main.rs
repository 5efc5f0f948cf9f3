use clap::Parser;
use tracing_subscriber::EnvFilter;

use modreg::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout stays limited to the result line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    cli::run(Cli::parse())
}
