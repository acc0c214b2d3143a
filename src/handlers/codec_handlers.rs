use anyhow::{bail, Result};
use facetq_core::{
    decode, encode, extract_raw_filters, parse_selections, resolve_selections, strip_html,
    FilterCatalog, FilterKeys,
};
use serde::Serialize;
use std::path::Path;

use super::catalog_handlers::load_catalog_or_report;
use crate::ui::{format_raw_filters, format_skipped, format_state, set_status, StatusLevel};

#[derive(Serialize)]
struct EncodeOutput<'a> {
    query: &'a str,
}

/// Recognized keys from the command line, or every catalog group if none were given
fn recognized_keys(keys: &[String], catalog: &FilterCatalog) -> FilterKeys {
    if keys.is_empty() {
        catalog.filter_keys()
    } else {
        FilterKeys::new(keys)
    }
}

/// Encode `group=value` selections into a query string
pub fn handle_encode(
    existing: &str,
    catalog_path: &Path,
    keys: &[String],
    select: &[String],
    json: bool,
) -> Result<()> {
    let catalog = load_catalog_or_report(catalog_path)?;

    let (selections, malformed) = parse_selections(select);
    for entry in &malformed {
        set_status(
            format!("Invalid selection '{}'. Expected 'group=value'", entry),
            StatusLevel::Warning,
        );
    }

    let (state, unknown) = resolve_selections(&catalog, &selections);
    if !unknown.is_empty() {
        for message in &unknown {
            set_status(message, StatusLevel::Warning);
        }
        bail!("{} selection(s) could not be resolved", unknown.len());
    }

    let keys = recognized_keys(keys, &catalog);
    let query = encode(existing, &keys, &state);

    if json {
        println!("{}", serde_json::to_string(&EncodeOutput { query: &query })?);
    } else {
        println!("{}", query);
    }
    Ok(())
}

/// Decode a query string against a catalog
pub fn handle_decode(query: &str, catalog_path: &Path, keys: &[String], json: bool) -> Result<()> {
    let catalog = load_catalog_or_report(catalog_path)?;
    let keys = recognized_keys(keys, &catalog);
    let decoded = decode(query, &keys, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
        return Ok(());
    }

    println!("## Active Filters\n");
    println!("{}", format_state(&decoded.state));

    for line in format_skipped(&decoded.skipped) {
        set_status(line, StatusLevel::Warning);
    }
    set_status(
        format!(
            "{} group(s) decoded, {} parameter(s) skipped",
            decoded.state.len(),
            decoded.skipped.len()
        ),
        StatusLevel::Info,
    );
    Ok(())
}

/// Print raw filter values without a catalog
pub fn handle_extract(query: &str, json: bool) -> Result<()> {
    let raw = extract_raw_filters(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&raw)?);
    } else {
        println!("## Filter Parameters\n");
        println!("{}", format_raw_filters(&raw));
    }
    Ok(())
}

pub fn handle_strip_html(text: &str) -> Result<()> {
    println!("{}", strip_html(text));
    Ok(())
}
