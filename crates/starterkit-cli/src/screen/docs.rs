use std::fmt::Write;

use starterkit_core::catalog::{ApiDocs, ApiParam, ApiSchema};
use starterkit_core::format::method_badge;
use starterkit_core::Theme;

use crate::error::CliError;

pub fn list(docs: &ApiDocs, tag: Option<&str>) -> String {
    let mut out = String::new();
    let endpoints = docs
        .endpoints()
        .iter()
        .filter(|e| tag.map_or(true, |t| e.has_tag(t)));
    for endpoint in endpoints {
        let _ = writeln!(
            out,
            "{:<7} {:<16} {:<13} {}",
            endpoint.method, endpoint.path, endpoint.id, endpoint.description
        );
    }
    if out.is_empty() {
        out.push_str("No endpoints.\n");
    }
    out
}

pub fn tags(docs: &ApiDocs) -> String {
    docs.tags()
        .into_iter()
        .map(|tag| format!("{tag} ({})\n", docs.by_tag(tag).count()))
        .collect()
}

/// Full page for one endpoint. Badge colors follow the active theme.
pub fn show(docs: &ApiDocs, id: &str, theme: Theme) -> Result<String, CliError> {
    let endpoint = docs.endpoint(id)?;
    let badge = method_badge(endpoint.method.as_str()).colors(theme);

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", endpoint.method, endpoint.path);
    let _ = writeln!(
        out,
        "  badge {} on {}",
        badge.foreground, badge.background
    );
    let _ = writeln!(out, "{}", endpoint.description);
    let _ = writeln!(out, "Tags: {}", endpoint.tags.join(", "));

    write_params(&mut out, "Path parameters", &endpoint.path_params);
    write_params(&mut out, "Query parameters", &endpoint.query_params);
    if let Some(body) = &endpoint.request_body {
        write_schema(&mut out, "Request body", body);
    }
    write_schema(&mut out, "Response", &endpoint.response_schema);

    if let Some(request) = endpoint.request_text() {
        let _ = writeln!(out, "\nExample request:\n{request}");
    }
    let _ = writeln!(out, "\nExample response:\n{}", endpoint.response_text());
    Ok(out)
}

fn write_params(out: &mut String, title: &str, params: &[ApiParam]) {
    if params.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for p in params {
        let required = if p.required { "required" } else { "optional" };
        let _ = writeln!(
            out,
            "  {:<10} {:<8} {:<9} {}",
            p.name, p.ty, required, p.description
        );
    }
}

fn write_schema(out: &mut String, title: &str, schema: &ApiSchema) {
    let _ = writeln!(out, "\n{title} ({}):", schema.ty);
    for prop in &schema.properties {
        let mut line = format!("  {:<10} {:<8} {}", prop.name, prop.ty, prop.description);
        if prop.required {
            line.push_str(" [required]");
        }
        if let Some(format) = &prop.format {
            let _ = write!(line, " [format: {format}]");
        }
        if !prop.allowed.is_empty() {
            let _ = write!(line, " [one of: {}]", prop.allowed.join(" | "));
        }
        let _ = writeln!(out, "{line}");
    }
}
