use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ManifestError;
use crate::models::ManifestEntry;

#[derive(Debug, Deserialize)]
struct ComposerJson {
    require: Option<Map<String, Value>>,
}

/// Analyzer for `composer.json`. Reads the `require` section only.
///
/// Platform requirements (`php`, `ext-*`) are reported like any other entry.
pub struct PhpAnalyzer;

impl PhpAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for PhpAnalyzer {
    fn manifest_name(&self) -> &'static str {
        "composer.json"
    }

    fn analyze(&self, path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
        let manifest = path.join(self.manifest_name());
        let composer: ComposerJson = super::read_manifest(&manifest)?;
        super::section_entries(&manifest, "require", composer.require)
    }
}
