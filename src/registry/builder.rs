//! Registry builder: folds scan results into a catalog document and
//! serializes it.

use std::fs;
use std::path::Path;

use crate::error::RegistryError;
use crate::registry::document::{ModuleSummary, RegistryDocument};
use crate::registry::scanner::{scan_modules, ScanReport};

/// Fold a scan report into a catalog document.
///
/// Pure: no I/O, no global state. One [`ModuleSummary`] per scanned module,
/// inserted in scan order; `latest` is the last element of the module's
/// (already sorted) version sequence. The scanner guarantees every module in
/// the report has at least one version.
pub fn build_registry(report: &ScanReport, name: &str, version: &str) -> RegistryDocument {
    let mut doc = RegistryDocument::new(name, version);

    for module in &report.modules {
        let latest = module
            .versions
            .last()
            .cloned()
            .unwrap_or_default();
        doc.modules.insert(
            module.id.clone(),
            ModuleSummary {
                latest,
                versions: module.versions.clone(),
            },
        );
    }

    doc
}

/// Serialize a document to `path`, overwriting any existing file.
///
/// Pretty-printed with stable formatting so regenerations diff cleanly.
/// Failures are fatal and carry the underlying I/O error.
pub fn write_registry(doc: &RegistryDocument, path: &Path) -> Result<(), RegistryError> {
    let json = doc.to_json_pretty()?;
    fs::write(path, json).map_err(|e| RegistryError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Scan `root`, build the document, and write it to `output`.
///
/// Returns the scan report alongside the document so callers can surface
/// skipped subtrees and the module count. Nothing is written if the scan
/// fails, so a missing root leaves any prior artifact untouched.
pub fn generate(
    root: &Path,
    output: &Path,
    name: &str,
    version: &str,
) -> Result<(RegistryDocument, ScanReport), RegistryError> {
    let report = scan_modules(root)?;
    let doc = build_registry(&report, name, version);
    write_registry(&doc, output)?;

    tracing::debug!(
        "Wrote {:?} with {} module(s), {} subtree(s) skipped",
        output,
        doc.module_count(),
        report.skipped.len()
    );

    Ok((doc, report))
}
