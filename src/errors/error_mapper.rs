use facetq_core::CatalogError;
use std::io::ErrorKind;
use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_load_error(error: &CatalogError, path: &Path) -> (String, String, String) {
    match error {
        CatalogError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "Catalog Not Found".to_string(),
            "The catalog file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPass --catalog or set FACETQ_CATALOG to an existing file.",
                path.display()
            ),
        ),
        CatalogError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        CatalogError::Json(e) => (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", e, e.line(), e.column()),
        ),
        CatalogError::Schema(_) => (
            "Schema Error".to_string(),
            "The catalog does not have the expected shape.".to_string(),
            numbered(&error.details()),
        ),
        CatalogError::Invalid(_) => (
            "Validation Error".to_string(),
            "The catalog has validation errors.".to_string(),
            numbered(&error.details()),
        ),
        CatalogError::Io { .. } => (
            "Error Loading Catalog".to_string(),
            "Failed to load catalog file.".to_string(),
            error.to_string(),
        ),
    }
}

fn numbered(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
