use crate::license::osi::LicenseRegistry;
use crate::models::{Dependency, LicenseStatus, UNKNOWN_LICENSE};

/// Place a dependency into exactly one report bucket.
///
/// Only the literal `"Unknown"` sentinel is `Unknown`; `"License not found"`
/// is a resolved (if useless) value and falls through to the approval check.
pub fn classify(dep: &Dependency, registry: &LicenseRegistry) -> LicenseStatus {
    if dep.license == UNKNOWN_LICENSE {
        LicenseStatus::Unknown
    } else if registry.is_approved(&dep.license) {
        LicenseStatus::OsiApproved
    } else {
        LicenseStatus::NotOsiApproved
    }
}

/// Per-bucket totals for a dependency list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub approved: usize,
    pub not_approved: usize,
    pub unknown: usize,
}

impl StatusCounts {
    pub fn tally(deps: &[Dependency], registry: &LicenseRegistry) -> Self {
        let mut counts = Self::default();
        for dep in deps {
            match classify(dep, registry) {
                LicenseStatus::OsiApproved => counts.approved += 1,
                LicenseStatus::NotOsiApproved => counts.not_approved += 1,
                LicenseStatus::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.approved + self.not_approved + self.unknown
    }
}
