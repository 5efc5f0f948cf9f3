//! Registry domain: scan a module tree, fold it into a catalog document,
//! serialize it.
//!
//! ```text
//! <root>/
//! ├── <module-id>/
//! │   └── <version-id>/
//! │       └── manifest.json   <- presence-only check
//! └── ...
//! ```
//!
//! The scanner produces, per module, the lexicographically sorted sequence of
//! qualifying version identifiers. The builder folds those into one
//! [`RegistryDocument`] keyed by module identifier. Modules with no
//! qualifying versions are omitted entirely.

pub mod builder;
pub mod document;
pub mod scanner;

pub use builder::{build_registry, generate, write_registry};
pub use document::{ModuleSummary, RegistryDocument};
pub use scanner::{scan_modules, ScanReport, ScannedModule, SkippedEntry};

/// Default catalog label written into the `name` field of the document.
pub const DEFAULT_CATALOG_NAME: &str = "Official Modules";

/// Catalog schema version (not a module version).
pub const DEFAULT_CATALOG_VERSION: &str = "1.0.0";

/// Per-version marker file whose presence qualifies a directory as a real
/// published version. Contents are never parsed.
pub const MANIFEST_FILE: &str = "manifest.json";
