use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::classifier::{classify, StatusCounts};
use crate::license::LicenseRegistry;
use crate::models::{Dependency, LicenseStatus, ProjectType};

/// Print a colored summary of the scan to stdout.
///
/// Flagged dependencies (not approved or unknown) are always tabulated;
/// `verbose` adds the approved ones, `quiet` prints a single line.
pub fn render(
    deps: &[Dependency],
    registry: &LicenseRegistry,
    project_type: ProjectType,
    verbose: bool,
    quiet: bool,
) {
    let counts = StatusCounts::tally(deps, registry);

    if quiet {
        println!(
            "Total: {}  Approved: {}  Not approved: {}  Unknown: {}",
            counts.total(),
            counts.approved.to_string().green(),
            counts.not_approved.to_string().red(),
            counts.unknown.to_string().yellow(),
        );
        return;
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Project type       : {}", project_type));
    println!(" │  {:<48} │", format!("Total dependencies : {}", counts.total()));
    println!(
        " │  {:<48} │",
        format!("{}  OSI approved     : {:>4}", "✓".green(), counts.approved)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Not OSI approved : {:>4}", "✗".red(), counts.not_approved)
    );
    println!(
        " │  {:<48} │",
        format!("{}  License unknown  : {:>4}", "?".yellow(), counts.unknown)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if counts.not_approved + counts.unknown > 0 {
        println!(" {} Dependencies requiring attention:\n", "[FLAGGED]".red().bold());
        render_table(deps, registry, |status| status != LicenseStatus::OsiApproved);
        println!();
    }

    if verbose && counts.approved > 0 {
        println!(" {} OSI approved dependencies:\n", "[OK]".green().bold());
        render_table(deps, registry, |status| status == LicenseStatus::OsiApproved);
        println!();
    }
}

fn render_table(
    deps: &[Dependency],
    registry: &LicenseRegistry,
    keep: impl Fn(LicenseStatus) -> bool,
) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for dep in deps {
        let status = classify(dep, registry);
        if !keep(status) {
            continue;
        }

        let color = match status {
            LicenseStatus::OsiApproved => Color::Green,
            LicenseStatus::NotOsiApproved => Color::Red,
            LicenseStatus::Unknown => Color::DarkGrey,
        };

        table.add_row(vec![
            Cell::new(&dep.name),
            Cell::new(&dep.version),
            Cell::new(&dep.license),
            Cell::new(status.to_string())
                .fg(color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}
