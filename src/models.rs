/// License value used when a registry lookup fails.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// License value used when Packagist answers but lists no license.
pub const LICENSE_NOT_FOUND: &str = "License not found";

/// One declared package reference with its resolved license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    /// Version constraint exactly as written in the manifest.
    pub version: String,
    pub license: String,
}

impl Dependency {
    /// Name with scope markers (`@`) removed, for display.
    pub fn display_name(&self) -> String {
        self.name.replace('@', "")
    }
}

/// A `name → constraint` pair read from a manifest, before any lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    NodeJs,
    Php,
    None,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::NodeJs => write!(f, "nodejs"),
            ProjectType::Php => write!(f, "php"),
            ProjectType::None => write!(f, "none"),
        }
    }
}

/// Report bucket of a dependency. Every dependency lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseStatus {
    Unknown,
    OsiApproved,
    NotOsiApproved,
}

impl LicenseStatus {
    /// CSS class used in the HTML report.
    pub fn css_class(&self) -> &'static str {
        match self {
            LicenseStatus::Unknown => "license-unknown",
            LicenseStatus::OsiApproved => "osi-approved",
            LicenseStatus::NotOsiApproved => "not-osi-approved",
        }
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseStatus::Unknown => write!(f, "License Unknown"),
            LicenseStatus::OsiApproved => write!(f, "OSI Approved"),
            LicenseStatus::NotOsiApproved => write!(f, "Not OSI Approved"),
        }
    }
}
