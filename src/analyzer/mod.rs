use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ManifestError;
use crate::models::ManifestEntry;

pub mod node;
pub mod php;

/// Reads the declared top-level dependencies of one ecosystem's manifest.
pub trait Analyzer {
    /// File name of the manifest inside the project directory.
    fn manifest_name(&self) -> &'static str;

    fn analyze(&self, path: &Path) -> Result<Vec<ManifestEntry>, ManifestError>;
}

/// Read and deserialize a JSON manifest.
fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn one `name → constraint` object into entries, keeping declaration order.
fn section_entries(
    path: &Path,
    section: &'static str,
    map: Option<Map<String, Value>>,
) -> Result<Vec<ManifestEntry>, ManifestError> {
    let Some(map) = map else {
        return Ok(Vec::new());
    };

    let invalid = |name: &str, reason: &'static str| ManifestError::InvalidEntry {
        path: path.to_path_buf(),
        section,
        name: name.to_string(),
        reason,
    };

    map.into_iter()
        .map(|(name, value)| {
            if name.trim().is_empty() {
                return Err(invalid(&name, "package name is empty"));
            }
            match value {
                Value::String(version) => Ok(ManifestEntry { name, version }),
                _ => Err(invalid(&name, "version constraint is not a string")),
            }
        })
        .collect()
}
