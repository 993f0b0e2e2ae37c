use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ManifestError;
use crate::models::ManifestEntry;

#[derive(Debug, Deserialize)]
struct PackageJson {
    dependencies: Option<Map<String, Value>>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Option<Map<String, Value>>,
}

/// Analyzer for `package.json`.
///
/// `dependencies` and `devDependencies` are merged into one list of unique
/// names. A name declared in both keeps its `dependencies` position and takes
/// the `devDependencies` constraint.
pub struct NodeAnalyzer;

impl NodeAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for NodeAnalyzer {
    fn manifest_name(&self) -> &'static str {
        "package.json"
    }

    fn analyze(&self, path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
        parse_package_json(&path.join(self.manifest_name()))
    }
}

fn parse_package_json(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let pkg: PackageJson = super::read_manifest(path)?;

    let runtime = super::section_entries(path, "dependencies", pkg.dependencies)?;
    let dev = super::section_entries(path, "devDependencies", pkg.dev_dependencies)?;

    let mut merged: Vec<ManifestEntry> = Vec::with_capacity(runtime.len() + dev.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in runtime.into_iter().chain(dev) {
        match positions.get(&entry.name) {
            Some(&idx) => merged[idx].version = entry.version,
            None => {
                positions.insert(entry.name.clone(), merged.len());
                merged.push(entry);
            }
        }
    }

    Ok(merged)
}
