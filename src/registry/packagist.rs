use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LookupError;
use crate::models::LICENSE_NOT_FOUND;

#[derive(Debug, Deserialize)]
struct PackageMetadata {
    #[serde(default)]
    packages: Map<String, Value>,
}

/// Fetch the license of a Composer package from Packagist.
///
/// Any status other than 200 is an error. A 200 response that lists no
/// license anywhere resolves to [`LICENSE_NOT_FOUND`] rather than an error.
pub async fn fetch_license(
    client: &Client,
    base_url: &str,
    name: &str,
) -> Result<String, LookupError> {
    let url = format!("{}/p/{}.json", base_url.trim_end_matches('/'), name);

    let response = client.get(&url).send().await?;

    if response.status() != StatusCode::OK {
        return Err(LookupError::Status(response.status()));
    }

    let data: PackageMetadata = response.json().await?;

    Ok(first_license(&data.packages).unwrap_or_else(|| LICENSE_NOT_FOUND.to_string()))
}

/// First non-empty license across all packages and versions, in response order.
///
/// Versions may be keyed by version string (`/p/` metadata) or listed as an
/// array (`/p2/` metadata).
fn first_license(packages: &Map<String, Value>) -> Option<String> {
    packages
        .values()
        .flat_map(|versions| match versions {
            Value::Object(map) => map.values().collect::<Vec<_>>(),
            Value::Array(list) => list.iter().collect(),
            _ => Vec::new(),
        })
        .filter_map(|version| version.get("license").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .find(|id| !id.trim().is_empty())
        .map(str::to_string)
}
