use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;

#[derive(Debug, Deserialize)]
struct LatestVersion {
    license: Option<LicenseField>,
}

/// npm accepts an SPDX string; very old packages publish `{ "type": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    Spdx(String),
    Legacy {
        #[serde(rename = "type")]
        kind: String,
    },
}

/// Fetch the license of the latest published version of an npm package.
pub async fn fetch_license(
    client: &Client,
    base_url: &str,
    name: &str,
) -> Result<String, LookupError> {
    // Scoped packages need URL encoding: @scope/pkg → %40scope%2Fpkg
    let encoded_name = name.replace('@', "%40").replace('/', "%2F");
    let url = format!("{}/{}/latest", base_url.trim_end_matches('/'), encoded_name);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(LookupError::Status(response.status()));
    }

    let data: LatestVersion = response.json().await?;

    let license = match data.license {
        Some(LicenseField::Spdx(id)) => id,
        Some(LicenseField::Legacy { kind }) => kind,
        None => String::new(),
    };

    if license.trim().is_empty() {
        return Err(LookupError::MissingLicense);
    }
    Ok(license)
}
