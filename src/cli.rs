//! Command-line surface for generating the registry.

use std::path::PathBuf;

use clap::Parser;

use crate::registry::{generate, DEFAULT_CATALOG_NAME, DEFAULT_CATALOG_VERSION};

/// Generate a consolidated registry.json catalog from a module tree.
#[derive(Parser, Debug, Clone)]
#[command(name = "modreg", version, about)]
pub struct Cli {
    /// Module root directory to scan
    #[arg(long, default_value = "modules")]
    pub root: PathBuf,

    /// Output path for the registry artifact
    #[arg(long, default_value = "registry.json")]
    pub output: PathBuf,

    /// Catalog label written into the document's `name` field
    #[arg(long, default_value = DEFAULT_CATALOG_NAME)]
    pub catalog_name: String,

    /// Catalog schema version (not a module version)
    #[arg(long, default_value = DEFAULT_CATALOG_VERSION)]
    pub catalog_version: String,
}

/// Run a generation with the given arguments.
///
/// Prints the module count on success. A missing root or a write failure
/// propagates as an error, which `main` turns into a non-zero exit status.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let (doc, report) = generate(&cli.root, &cli.output, &cli.catalog_name, &cli.catalog_version)?;

    for entry in &report.skipped {
        eprintln!("warning: skipped unreadable entry {}: {}", entry.path.display(), entry.reason);
    }

    println!(
        "Generated {} with {} modules",
        cli.output.display(),
        doc.module_count()
    );

    Ok(())
}
