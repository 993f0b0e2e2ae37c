use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-reporter",
    about = "Resolve dependency licenses and generate an OSI approval report",
    version
)]
pub struct Cli {
    /// Project directory containing package.json or composer.json
    #[arg(long, default_value = ".", value_name = "PATH")]
    pub project_dir: PathBuf,

    /// Report file name without extension, written next to the project directory [default: license_report]
    #[arg(long, value_name = "NAME")]
    pub report_name: Option<String>,

    /// URL to POST the generated report to
    #[arg(long, value_name = "URL")]
    pub api_send_endpoint: Option<String>,

    /// Skip TLS certificate verification for the report upload
    #[arg(long)]
    pub ignore_tls: bool,

    /// Config file [default: <project-dir>/.license-reporter/config.toml, fallback ~/.config/license-reporter/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Registry lookups issued at once (1 = strictly sequential)
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-request registry timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// List every dependency in the terminal summary, not just flagged ones
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print a one-line summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
