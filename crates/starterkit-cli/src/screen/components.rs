use std::fmt::Write;

use starterkit_core::catalog::{ComponentCatalog, UserRow};
use starterkit_core::format::{status_label, Locale};

use crate::error::CliError;

/// Components grouped under their category headings.
pub fn list(catalog: &ComponentCatalog, category: Option<&str>, locale: Locale) -> String {
    let mut out = String::new();
    for heading in catalog.categories() {
        if category.is_some_and(|c| !c.eq_ignore_ascii_case(heading)) {
            continue;
        }
        let _ = writeln!(out, "{heading}");
        for item in catalog.in_category(heading) {
            let _ = writeln!(
                out,
                "  {:<14} {:<16} {}",
                item.id,
                item.name,
                status_label(item.status.as_str(), locale)
            );
        }
    }
    if out.is_empty() {
        out.push_str("No components.\n");
    }
    out
}

pub fn categories(catalog: &ComponentCatalog) -> String {
    catalog
        .categories()
        .into_iter()
        .map(|c| format!("{c}\n"))
        .collect()
}

pub fn show(catalog: &ComponentCatalog, id: &str, locale: Locale) -> Result<String, CliError> {
    let item = catalog.component(id)?;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}]",
        item.name,
        status_label(item.status.as_str(), locale)
    );
    let _ = writeln!(out, "{}", item.description);
    let _ = writeln!(out, "Category: {}", item.category);
    let _ = writeln!(out, "Tags: {}", item.tags.join(", "));
    Ok(out)
}

/// The table demo: sample users with localized status.
pub fn table(rows: &[UserRow], locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<8} {:<20} {:<6} {}",
        "ID", "NAME", "EMAIL", "ROLE", "STATUS"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<20} {:<6} {}",
            row.id,
            row.name,
            row.email,
            row.role,
            status_label(&row.status, locale)
        );
    }
    out
}
