use anyhow::{anyhow, Result};
use facetq_core::{load_catalog, FilterCatalog};
use std::path::Path;

use crate::errors::map_catalog_load_error;
use crate::ui::{format_catalog, set_status, show_error, StatusLevel};

/// Load a catalog, reporting failures with a friendly message
pub fn load_catalog_or_report(path: &Path) -> Result<FilterCatalog> {
    match load_catalog(path) {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            let (title, message, details) = map_catalog_load_error(&e, path);
            show_error(&title, message, details);
            Err(anyhow!(title))
        }
    }
}

/// Validate and print a catalog
pub fn handle_catalog(path: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog_or_report(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        println!("# Filter Catalog\n");
        println!("{}", format_catalog(&catalog));
    }

    set_status(
        format!("Catalog is valid ({} groups)", catalog.len()),
        StatusLevel::Success,
    );
    Ok(())
}
