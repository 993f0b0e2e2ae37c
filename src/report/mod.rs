//! Report renderers for resolved dependencies.
//!
//! - [`html`]: the static HTML report written to disk (and optionally uploaded).
//! - [`terminal`]: colored summary with a table of flagged dependencies;
//!   respects `--verbose` / `--quiet`.

pub mod html;
pub mod terminal;

use std::path::{Path, PathBuf};

/// `<parent of project_dir>/<name>.html`.
///
/// A bare relative directory such as `.` has an empty parent, which resolves
/// to the current working directory.
pub fn report_path(project_dir: &Path, name: &str) -> PathBuf {
    let file_name = format!("{}.html", name);
    match project_dir.parent() {
        Some(parent) => parent.join(file_name),
        None => project_dir.join(file_name),
    }
}
