//! Async HTTP clients for resolving licenses from upstream package registries.
//!
//! Each module exposes a single `fetch_license(client, base_url, name)` function
//! that returns the license string on success and a [`LookupError`] when the
//! request fails, the registry answers with an error status, or the body has
//! no usable license. Callers decide how to absorb the error.
//!
//! [`LookupError`]: crate::error::LookupError

pub mod npm;
pub mod packagist;

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, Result};

pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";
pub const PACKAGIST_URL: &str = "https://repo.packagist.org";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared client for registry lookups; every request is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::HttpClient)
}
