//! The output catalog document and its per-module entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Summary of one module's published versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    /// The lexicographically greatest qualifying version identifier.
    ///
    /// Note this is string order, not semantic-version order: "10.0.0"
    /// sorts before "2.0.0". See [`super::scanner::version_ordering`].
    pub latest: String,

    /// Qualifying version identifiers in ascending lexicographic order.
    pub versions: Vec<String>,
}

/// The consolidated catalog, rebuilt from scratch on every run.
///
/// `modules` keeps scan (insertion) order: the top level mirrors the order
/// the root's entries were listed in and is not itself sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDocument {
    /// Fixed catalog label (not a module identifier).
    pub name: String,

    /// Catalog schema version (not a module version).
    pub version: String,

    /// Module identifier -> version summary. Only modules with at least one
    /// qualifying version appear here.
    pub modules: IndexMap<String, ModuleSummary>,
}

impl RegistryDocument {
    /// Create an empty document with the given catalog label and schema version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            modules: IndexMap::new(),
        }
    }

    /// Number of modules in the catalog.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Pretty-printed JSON with a trailing newline.
    ///
    /// 2-space indentation, stable field order, non-ASCII identifiers left
    /// unescaped. Regenerating from an unchanged tree yields byte-identical
    /// output, keeping version-control diffs minimal.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RegistryDocument {
        let mut doc = RegistryDocument::new("Official Modules", "1.0.0");
        doc.modules.insert(
            "widget".to_string(),
            ModuleSummary {
                latest: "2.0.0".to_string(),
                versions: vec!["1.0.0".to_string(), "2.0.0".to_string()],
            },
        );
        doc
    }

    #[test]
    fn test_json_shape() {
        let json = sample().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Official Modules");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["modules"]["widget"]["latest"], "2.0.0");
        assert_eq!(
            value["modules"]["widget"]["versions"],
            serde_json::json!(["1.0.0", "2.0.0"])
        );
    }

    #[test]
    fn test_pretty_output_ends_with_newline() {
        let json = sample().to_json_pretty().unwrap();
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_non_ascii_identifiers_not_escaped() {
        let mut doc = RegistryDocument::new("目录", "1.0.0");
        doc.modules.insert(
            "模块".to_string(),
            ModuleSummary {
                latest: "1.0.0".to_string(),
                versions: vec!["1.0.0".to_string()],
            },
        );

        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("目录"));
        assert!(json.contains("模块"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut doc = RegistryDocument::new("Official Modules", "1.0.0");
        for id in ["zeta", "alpha", "mid"] {
            doc.modules.insert(
                id.to_string(),
                ModuleSummary {
                    latest: "1.0.0".to_string(),
                    versions: vec!["1.0.0".to_string()],
                },
            );
        }

        let json = doc.to_json_pretty().unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        let mid = json.find("\"mid\"").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }
}
