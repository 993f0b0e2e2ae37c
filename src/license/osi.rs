use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// OSI approval table bundled with the binary.
const BUNDLED_TABLE: &str = include_str!("../../data/osi_licenses.json");

#[derive(Debug, Deserialize)]
struct TableEntry {
    id: String,
    approved: bool,
}

/// Read-only lookup of license identifier → OSI approval.
///
/// Built once at startup and passed by reference to whatever needs it.
/// Identifiers match exactly, ignoring ASCII case; anything absent from the
/// table (including the `"Unknown"` and `"License not found"` sentinels) is
/// not approved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRegistry {
    entries: HashMap<String, bool>,
}

impl LicenseRegistry {
    /// Load the bundled table. Calling this again yields an identical registry.
    pub fn load() -> Result<Self> {
        Self::from_json(BUNDLED_TABLE)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let table: Vec<TableEntry> = serde_json::from_str(raw).map_err(Error::LicenseTable)?;
        let entries = table
            .into_iter()
            .map(|e| (key(&e.id), e.approved))
            .collect();
        Ok(Self { entries })
    }

    /// Apply local overrides: `approved` ids are added as approved, `denied` ids
    /// are forced to not approved. Denials win over approvals.
    pub fn with_overrides(mut self, approved: &[String], denied: &[String]) -> Self {
        for id in approved {
            self.entries.insert(key(id), true);
        }
        for id in denied {
            self.entries.insert(key(id), false);
        }
        self
    }

    pub fn is_approved(&self, license: &str) -> bool {
        self.entries.get(&key(license)).copied().unwrap_or(false)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

fn key(id: &str) -> String {
    id.to_ascii_lowercase()
}
