//! Filesystem scanner: discovers modules and their qualifying versions.
//!
//! Read-only. The only fatal conditions are a missing/unlistable root;
//! anything wrong with an individual module or version subtree is skipped
//! and reported, never aborting the whole scan.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::registry::MANIFEST_FILE;

/// One discovered module and its qualifying versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedModule {
    /// Module identifier (the directory name, used verbatim as registry key).
    pub id: String,
    /// Qualifying version identifiers, ascending per [`version_ordering`].
    /// Never empty: a module with no qualifying versions is omitted.
    pub versions: Vec<String>,
}

/// A subtree the scanner could not read and skipped over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a module root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Modules with at least one qualifying version, in directory listing
    /// order (filesystem-dependent, not sorted).
    pub modules: Vec<ScannedModule>,
    /// Subtrees skipped due to read failures.
    pub skipped: Vec<SkippedEntry>,
}

/// Ordering used for version enumeration and "latest" selection.
///
/// Plain lexicographic comparison of directory names, so "10.0.0" sorts
/// before "2.0.0". That matches the catalog's published behavior; swap this
/// function for a semantic-version comparator to change the policy without
/// touching the scan itself.
pub fn version_ordering(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Scan a module root and enumerate every module's qualifying versions.
///
/// A version directory qualifies iff it directly contains `manifest.json`
/// (presence check only). Modules that yield zero qualifying versions are
/// omitted from the report.
pub fn scan_modules(root: &Path) -> Result<ScanReport, RegistryError> {
    if !root.is_dir() {
        return Err(RegistryError::RootNotFound(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|e| RegistryError::DirectoryRead {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut report = ScanReport::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.skip(root.to_path_buf(), e.to_string());
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        // Directory names are the module identifiers; non-UTF-8 names cannot
        // be registry keys and are ignored like non-directories.
        let Some(id) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };

        match scan_versions(&path, &mut report) {
            Ok(versions) if versions.is_empty() => {
                tracing::debug!("Module '{}' has no qualifying versions, omitting", id);
            }
            Ok(versions) => {
                tracing::debug!("Module '{}': {} version(s)", id, versions.len());
                report.modules.push(ScannedModule {
                    id: id.to_string(),
                    versions,
                });
            }
            Err(reason) => {
                report.skip(path.clone(), reason);
            }
        }
    }

    Ok(report)
}

/// Enumerate qualifying versions of one module directory, sorted ascending.
///
/// Returns `Err` with a reason if the module directory itself cannot be
/// listed; unreadable individual version entries are recorded in the report
/// and skipped.
fn scan_versions(module_dir: &Path, report: &mut ScanReport) -> Result<Vec<String>, String> {
    let entries = fs::read_dir(module_dir).map_err(|e| e.to_string())?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.skip(module_dir.to_path_buf(), e.to_string());
                continue;
            }
        };

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) => {
                report.skip(path, e.to_string());
                continue;
            }
        };
        if !meta.is_dir() {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|f| f.to_str()) {
            names.push(name.to_string());
        }
    }

    // Explicit sort: OS listing order is incidental and must not leak into
    // the catalog.
    names.sort_by(|a, b| version_ordering(a, b));

    let mut versions = Vec::new();
    for name in names {
        if module_dir.join(&name).join(MANIFEST_FILE).is_file() {
            versions.push(name);
        }
    }

    Ok(versions)
}

impl ScanReport {
    fn skip(&mut self, path: PathBuf, reason: String) {
        tracing::warn!("Skipping unreadable entry {:?}: {}", path, reason);
        self.skipped.push(SkippedEntry { path, reason });
    }
}
