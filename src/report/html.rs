use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::license::classifier::{classify, StatusCounts};
use crate::license::LicenseRegistry;
use crate::models::{Dependency, LicenseStatus};

const STYLE: &str = r#"
    body { font-family: 'Segoe UI', Arial, sans-serif; color: #333; background: #f4f4f4; margin: 0; padding: 20px; }
    h1 { color: #007acc; }
    .summary { color: #555; }
    ul { list-style-type: none; padding: 0; }
    li { background: #fff; margin-bottom: 10px; padding: 10px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
    li:hover { background: #f9f9f9; }
    span.osi-approved { color: #28a745; font-weight: bold; }
    span.not-osi-approved, span.license-unknown { color: #dc3545; font-weight: bold; }
"#;

/// Mode of the written report on Unix. The temp file starts out owner-only.
#[cfg(unix)]
const REPORT_MODE: u32 = 0o644;

/// Render the full HTML document.
pub fn render(deps: &[Dependency], registry: &LicenseRegistry, title: &str) -> String {
    let counts = StatusCounts::tally(deps, registry);
    let title = escape(title);

    let mut s = String::with_capacity(1024 + deps.len() * 160);
    s.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    let _ = writeln!(s, "<title>{}</title>", title);
    let _ = writeln!(s, "<style>{}</style>", STYLE);
    s.push_str("</head>\n<body>\n");
    let _ = writeln!(s, "<h1>{}</h1>", title);
    let _ = writeln!(
        s,
        "<p class=\"summary\">{} dependencies: {} OSI approved, {} not OSI approved, {} license unknown</p>",
        counts.total(),
        counts.approved,
        counts.not_approved,
        counts.unknown
    );

    s.push_str("<ul>\n");
    for dep in deps {
        let status = classify(dep, registry);
        let label = match status {
            LicenseStatus::Unknown => status.to_string(),
            _ => format!("{} ({})", escape(&dep.license), status),
        };
        let _ = writeln!(
            s,
            "  <li class=\"{class}\">{name} - {version} - <span class=\"{class}\">{label}</span></li>",
            class = status.css_class(),
            name = escape(&dep.display_name()),
            version = escape(&dep.version),
            label = label,
        );
    }
    s.push_str("</ul>\n</body>\n</html>\n");
    s
}

/// Render and write the report to `output_path`, replacing any existing file.
///
/// The document is written to a sibling temp file first and renamed into
/// place, so a failed write never leaves a partial report behind.
pub fn generate(
    deps: &[Dependency],
    registry: &LicenseRegistry,
    title: &str,
    output_path: &Path,
) -> Result<()> {
    let html = render(deps, registry, title);

    let write_err = |source: std::io::Error| Error::ReportWrite {
        path: output_path.to_path_buf(),
        source,
    };

    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(html.as_bytes()).map_err(write_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(REPORT_MODE))
            .map_err(write_err)?;
    }
    tmp.persist(output_path).map_err(|e| write_err(e.error))?;

    tracing::info!(path = %output_path.display(), entries = deps.len(), "license report generated");
    Ok(())
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LICENSE_NOT_FOUND;
    use tempfile::tempdir;

    fn dep(name: &str, version: &str, license: &str) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: version.to_string(),
            license: license.to_string(),
        }
    }

    fn sample() -> Vec<Dependency> {
        vec![
            dep("left-pad", "1.0.0", "MIT"),
            dep("@types/node", "^20.0.0", "MIT"),
            dep("weird", "2.0.0", "WTFPL"),
            dep("ghost", "*", "Unknown"),
            dep("acme/private", "1.*", LICENSE_NOT_FOUND),
        ]
    }

    #[test]
    fn test_every_entry_has_exactly_one_class() {
        let registry = LicenseRegistry::load().unwrap();
        let html = render(&sample(), &registry, "License Report");

        let items: Vec<&str> = html.lines().filter(|l| l.trim_start().starts_with("<li")).collect();
        assert_eq!(items.len(), 5);
        for item in &items {
            let classes = ["osi-approved", "not-osi-approved", "license-unknown"]
                .iter()
                .filter(|c| item.contains(&format!("<li class=\"{}\"", c)))
                .count();
            assert_eq!(classes, 1, "{item}");
        }
        assert!(items[0].contains("MIT (OSI Approved)"));
        assert!(items[2].contains("WTFPL (Not OSI Approved)"));
        assert!(items[3].contains("<span class=\"license-unknown\">License Unknown</span>"));
        assert!(items[4].contains("License not found (Not OSI Approved)"));
    }

    #[test]
    fn test_scope_marker_stripped_from_names() {
        let registry = LicenseRegistry::load().unwrap();
        let html = render(&sample(), &registry, "License Report");
        assert!(html.contains(">types/node - ^20.0.0 - "));
        assert!(!html.contains("@types"));
    }

    #[test]
    fn test_values_are_escaped() {
        let registry = LicenseRegistry::load().unwrap();
        let deps = vec![dep("<script>", "\"1\"", "A&B")];
        let html = render(&deps, &registry, "Deps <main>");
        assert!(html.contains("<title>Deps &lt;main&gt;</title>"));
        assert!(html.contains("&lt;script&gt; - &quot;1&quot; - "));
        assert!(html.contains("A&amp;B (Not OSI Approved)"));
    }

    #[test]
    fn test_summary_counts() {
        let registry = LicenseRegistry::load().unwrap();
        let html = render(&sample(), &registry, "License Report");
        assert!(html.contains(
            "5 dependencies: 2 OSI approved, 2 not OSI approved, 1 license unknown"
        ));
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let registry = LicenseRegistry::load().unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("license_report.html");
        std::fs::write(&out, "stale").unwrap();

        generate(&sample(), &registry, "License Report", &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(!content.contains("stale"));
    }

    #[cfg(unix)]
    #[test]
    fn test_generated_report_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let registry = LicenseRegistry::load().unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("license_report.html");

        generate(&[], &registry, "License Report", &out).unwrap();

        let mode = std::fs::metadata(&out).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_generate_into_missing_directory_fails() {
        let registry = LicenseRegistry::load().unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing").join("report.html");

        let err = generate(&sample(), &registry, "License Report", &out).unwrap_err();
        assert!(matches!(err, Error::ReportWrite { .. }));
        assert!(!out.exists());
    }
}
