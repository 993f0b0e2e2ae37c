use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;
use crate::registry::{NPM_REGISTRY_URL, PACKAGIST_URL};

/// Root configuration structure, deserialized from `.license-reporter/config.toml`.
///
/// Every section and key is optional; missing values fall back to the
/// built-in defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry: RegistryConfig,
    pub report: ReportConfig,
    pub upload: UploadConfig,
    pub licenses: LicenseConfig,
}

impl Config {
    /// Command-line flags take precedence over file values.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(name) = &cli.report_name {
            self.report.name = name.clone();
        }
        if let Some(endpoint) = &cli.api_send_endpoint {
            self.upload.endpoint = Some(endpoint.clone());
        }
        if let Some(concurrency) = cli.concurrency {
            self.registry.concurrency = concurrency;
        }
        if let Some(timeout) = cli.timeout {
            self.registry.timeout_secs = timeout;
        }
        self
    }

    /// Upload target, if one is configured. An empty endpoint means no upload.
    pub fn upload_endpoint(&self) -> Option<&str> {
        self.upload.endpoint.as_deref().filter(|e| !e.trim().is_empty())
    }
}

/// Where and how license lookups are performed.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Base URL of the npm registry.
    pub npm_url: String,
    /// Base URL of the Packagist repository.
    pub packagist_url: String,
    /// Per-request ceiling, in seconds.
    pub timeout_secs: u64,
    /// Lookups issued together per batch. `1` means strictly one at a time.
    pub concurrency: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            npm_url: NPM_REGISTRY_URL.to_string(),
            packagist_url: PACKAGIST_URL.to_string(),
            timeout_secs: 10,
            concurrency: 8,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// File name of the report, without the `.html` extension.
    pub name: String,
    /// Heading and `<title>` of the HTML document.
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: "license_report".to_string(),
            title: "License Report".to_string(),
        }
    }
}

/// Optional delivery of the generated report.
///
/// TLS verification can only be disabled from the command line.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 30,
        }
    }
}

impl UploadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Local adjustments to the bundled OSI table.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LicenseConfig {
    /// Identifiers to treat as approved in addition to the bundled table.
    pub approved: Vec<String>,
    /// Identifiers to treat as not approved, overriding the bundled table.
    pub denied: Vec<String>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<project_path>/.license-reporter/config.toml`
/// 3. `~/.config/license-reporter/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-reporter").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-reporter")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
