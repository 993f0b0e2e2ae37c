//! Manifest → resolved dependency list.
//!
//! The scanner reads the manifest for the detected [`ProjectType`], then asks
//! the matching registry for each entry's license. Lookups run in batches of
//! `concurrency`; results keep manifest order. A failed lookup is logged and
//! recorded as [`UNKNOWN_LICENSE`] without stopping the scan.

use std::path::Path;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{debug, warn};

use crate::analyzer::node::NodeAnalyzer;
use crate::analyzer::php::PhpAnalyzer;
use crate::analyzer::Analyzer;
use crate::config::RegistryConfig;
use crate::error::{LookupError, Result};
use crate::models::{Dependency, ManifestEntry, ProjectType, UNKNOWN_LICENSE};
use crate::registry::{self, npm, packagist};

pub struct Scanner {
    client: Client,
    npm_url: String,
    packagist_url: String,
    concurrency: usize,
    show_progress: bool,
}

impl Scanner {
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        Ok(Self {
            client: registry::build_client(config.timeout())?,
            npm_url: config.npm_url.clone(),
            packagist_url: config.packagist_url.clone(),
            concurrency: config.concurrency.max(1),
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Read the manifest for `project_type` in `path` and resolve every entry.
    ///
    /// Only manifest failures are returned as errors. `ProjectType::None`
    /// yields an empty list.
    pub async fn scan(&self, project_type: ProjectType, path: &Path) -> Result<Vec<Dependency>> {
        let entries = match project_type {
            ProjectType::NodeJs => NodeAnalyzer::new().analyze(path)?,
            ProjectType::Php => PhpAnalyzer::new().analyze(path)?,
            ProjectType::None => return Ok(Vec::new()),
        };

        debug!(%project_type, count = entries.len(), "manifest parsed");
        Ok(self.resolve(project_type, entries).await)
    }

    async fn resolve(
        &self,
        project_type: ProjectType,
        entries: Vec<ManifestEntry>,
    ) -> Vec<Dependency> {
        let pb = self.progress_bar(entries.len());
        let mut deps = Vec::with_capacity(entries.len());

        for batch in entries.chunks(self.concurrency) {
            let lookups = batch.iter().map(|entry| self.lookup(project_type, &entry.name));
            let results = join_all(lookups).await;

            for (entry, result) in batch.iter().zip(results) {
                let license = result.unwrap_or_else(|err| {
                    warn!(package = %entry.name, error = %err, "failed to obtain a license");
                    UNKNOWN_LICENSE.to_string()
                });
                deps.push(Dependency {
                    name: entry.name.clone(),
                    version: entry.version.clone(),
                    license,
                });
                pb.inc(1);
            }
        }

        pb.finish_and_clear();
        deps
    }

    async fn lookup(
        &self,
        project_type: ProjectType,
        name: &str,
    ) -> std::result::Result<String, LookupError> {
        match project_type {
            ProjectType::NodeJs => npm::fetch_license(&self.client, &self.npm_url, name).await,
            ProjectType::Php => {
                packagist::fetch_license(&self.client, &self.packagist_url, name).await
            }
            ProjectType::None => Ok(UNKNOWN_LICENSE.to_string()),
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("resolving licenses");
        pb
    }
}
