use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

use crate::error::TransportError;

/// Upload the generated report as a multipart form (`file` field) to `endpoint`.
///
/// A single POST, no retry. Certificate validation is disabled only when
/// `skip_tls_verify` is set, and only for this request's client. Any HTTP
/// response counts as delivered; the status is returned for the caller to
/// inspect.
pub async fn send_report(
    file_path: &Path,
    endpoint: &str,
    skip_tls_verify: bool,
    timeout: Duration,
) -> Result<StatusCode, TransportError> {
    let content = tokio::fs::read(file_path)
        .await
        .map_err(|source| TransportError::Open {
            path: file_path.to_path_buf(),
            source,
        })?;

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.html".to_string());

    let part = Part::bytes(content)
        .file_name(file_name)
        .mime_str("application/octet-stream")
        .map_err(TransportError::Request)?;
    let form = Form::new().part("file", part);

    if skip_tls_verify {
        tracing::warn!(endpoint, "TLS certificate verification disabled for report upload");
    }

    let client = Client::builder()
        .timeout(timeout)
        .danger_accept_invalid_certs(skip_tls_verify)
        .build()
        .map_err(TransportError::Request)?;

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|source| TransportError::Send {
            endpoint: endpoint.to_string(),
            source,
        })?;

    Ok(response.status())
}
