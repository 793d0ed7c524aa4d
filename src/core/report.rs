use crate::domain::model::ExportBundle;
use std::fmt::Write;

/// Human-readable summary printed to stdout, followed by the SQL script.
pub fn render_report(bundle: &ExportBundle, sql: &str) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Total companies: {}", bundle.constructions.len());
    let _ = writeln!(out, "\nCompanies:");
    for (i, company) in bundle.constructions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, company);
    }

    let _ = writeln!(out, "\n\nTotal items: {}", bundle.items.len());
    let _ = writeln!(out, "\nItems:");
    for item in &bundle.items {
        let _ = writeln!(out, "- {}: {}", item.item_id, item.item_name);
    }

    let _ = writeln!(out, "\n\n=== SQL INSERT statements ===\n");
    out.push_str(sql);

    out
}
