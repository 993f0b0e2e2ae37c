use std::path::Path;

use crate::models::ProjectType;

/// Detect the project type from the manifest present in `path`.
///
/// `package.json` is checked before `composer.json`, so a directory holding
/// both is treated as Node. Only existence is checked: a manifest that turns
/// out to be unreadable fails later, when it is parsed. A missing directory
/// simply yields `None`.
pub fn detect_project_type(path: &Path) -> ProjectType {
    if path.join("package.json").exists() {
        return ProjectType::NodeJs;
    }

    if path.join("composer.json").exists() {
        return ProjectType::Php;
    }

    ProjectType::None
}
