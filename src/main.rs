//! `license-reporter`: resolve dependency licenses and publish an OSI approval report.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and load config ([`config::load_config`]).
//! 2. Load the bundled OSI table ([`license::LicenseRegistry`]).
//! 3. Detect the project type ([`detector::detect_project_type`]).
//! 4. Parse the manifest and resolve licenses from the registry ([`scanner`]).
//! 5. Warn about every license that is not OSI approved.
//! 6. Write the HTML report ([`report::html`]) and print a summary.
//! 7. Optionally upload the report ([`transport`]).
//!
//! Exits `1` on any fatal error. A failed upload leaves the report on disk.

mod analyzer;
mod cli;
mod config;
mod detector;
mod error;
mod license;
mod models;
mod registry;
mod report;
mod scanner;
mod transport;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use config::load_config;
use detector::detect_project_type;
use error::Error;
use license::LicenseRegistry;
use models::{Dependency, ProjectType};
use scanner::Scanner;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let config = load_config(&cli.project_dir, cli.config.as_deref())?.with_cli_overrides(&cli);

    let registry = LicenseRegistry::load()?
        .with_overrides(&config.licenses.approved, &config.licenses.denied);
    debug!(entries = registry.entry_count(), "OSI license table loaded");

    let project_type = detect_project_type(&cli.project_dir);
    if project_type == ProjectType::None {
        let err = Error::Detection {
            dir: cli.project_dir.clone(),
        };
        eprintln!("{} {}", "error:".red().bold(), err);
        eprintln!("Make sure the project directory path is correct.");
        std::process::exit(1);
    }

    if !cli.quiet {
        eprintln!("  {} Project type: {}", "→".cyan(), project_type);
    }

    let scanner = Scanner::new(&config.registry)?.with_progress(!cli.quiet);
    let deps = scanner
        .scan(project_type, &cli.project_dir)
        .await
        .context("Error while scanning dependencies")?;

    warn_not_approved(&deps, &registry);
    report::terminal::render(&deps, &registry, project_type, cli.verbose, cli.quiet);

    let report_path = report::report_path(&cli.project_dir, &config.report.name);
    report::html::generate(&deps, &registry, &config.report.title, &report_path)
        .context("Error generating license report")?;

    if !cli.quiet {
        eprintln!("  {} Report written to {}", "✓".green(), report_path.display());
    }

    if let Some(endpoint) = config.upload_endpoint() {
        let status = transport::send_report(
            &report_path,
            endpoint,
            cli.ignore_tls,
            config.upload.timeout(),
        )
        .await
        .context("Error sending license report")?;

        if status.is_success() {
            info!(endpoint, %status, "license report sent");
        } else {
            warn!(endpoint, %status, "report endpoint answered with a non-success status");
        }
    }

    Ok(())
}

fn warn_not_approved(deps: &[Dependency], registry: &LicenseRegistry) {
    for dep in deps.iter().filter(|d| !registry.is_approved(&d.license)) {
        warn!(
            package = %dep.name,
            license = %dep.license,
            "license is not OSI approved"
        );
    }
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
