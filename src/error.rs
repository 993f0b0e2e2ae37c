//! Error taxonomy for the scan → report → upload pipeline.
//!
//! Only [`LookupError`] is absorbed locally (by the scanner, which substitutes
//! `"Unknown"`). Every other error aborts the remaining stages. Upload failures
//! are reported as [`TransportError`] on their own, since the report already
//! exists on disk by then.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no package.json or composer.json found in {}", .dir.display())]
    Detection { dir: PathBuf },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("bundled license table is malformed: {0}")]
    LicenseTable(#[source] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// The manifest exists but could not be read or understood.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("manifest {}: invalid entry {name:?} in `{section}`: {reason}", .path.display())]
    InvalidEntry {
        path: PathBuf,
        section: &'static str,
        name: String,
        reason: &'static str,
    },
}

/// Failure to deliver a generated report to the configured endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open report {} for upload: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build upload request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to send report to {endpoint}: {source}")]
    Send {
        endpoint: String,
        source: reqwest::Error,
    },
}

/// A single registry lookup failed. Never fatal.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("registry returned status {0}")]
    Status(StatusCode),

    #[error("response carries no usable license field")]
    MissingLicense,
}

pub type Result<T> = std::result::Result<T, Error>;
