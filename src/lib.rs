//! Module registry generator.
//!
//! Scans a directory tree where each installable module's published versions
//! live as subdirectories (`<root>/<module-id>/<version-id>/`), and produces
//! a single consolidated `registry.json` catalog. A version directory counts
//! only if it directly contains a `manifest.json`; the manifest's contents
//! are never inspected.
//!
//! ```text
//! modules/
//! ├── widget/
//! │   ├── 1.0.0/manifest.json   <- qualifying version
//! │   └── 2.0.0/manifest.json   <- qualifying version (latest)
//! └── gadget/
//!     └── 0.9.0/                <- no manifest, ignored
//! ```
//!
//! The catalog is consumed by an editor-side module installer to discover
//! which modules exist, which versions are available, and which is latest.
//! Building is a pure fold over the scan result; serialization is a separate,
//! explicit step, so the builder is testable without touching the filesystem.

pub mod cli;
pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::builder::{build_registry, generate, write_registry};
pub use registry::document::{ModuleSummary, RegistryDocument};
pub use registry::scanner::{scan_modules, ScanReport, ScannedModule, SkippedEntry};
