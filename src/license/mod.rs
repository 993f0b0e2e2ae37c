//! OSI approval lookup and report classification.
//!
//! - [`osi`]: the bundled identifier → approved table ([`LicenseRegistry`]).
//! - [`classifier`]: maps a resolved dependency to one of the three report
//!   buckets (approved, not approved, unknown).

pub mod classifier;
pub mod osi;

pub use osi::LicenseRegistry;
