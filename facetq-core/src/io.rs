use crate::error::CatalogError;
use crate::models::FilterCatalog;
use crate::schema_validation::validate_catalog_json;
use crate::validation::validate_catalog;
use std::fs;
use std::path::Path;

/// Load a filter catalog from a JSON file
/// The file is checked against the catalog schema before deserializing,
/// then validated
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FilterCatalog, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;
    tracing::debug!(path = %path.display(), groups = catalog.len(), "loaded filter catalog");
    Ok(catalog)
}

/// Parse and validate a filter catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<FilterCatalog, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    validate_catalog_json(&value).map_err(CatalogError::Schema)?;

    let catalog: FilterCatalog = serde_json::from_value(value)?;
    validate_catalog(&catalog).map_err(CatalogError::Invalid)?;
    Ok(catalog)
}

/// Save a filter catalog to a JSON file with pretty printing
pub fn save_catalog<P: AsRef<Path>>(catalog: &FilterCatalog, path: P) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterItem;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut catalog = FilterCatalog::new();
        catalog.insert_group("color", vec![FilterItem::new("Red", "5")]);
        save_catalog(&catalog, &path).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_catalog("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_schema_violation() {
        let err = parse_catalog(r#"{"color": [{"title": "Red"}]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Schema(_)));
    }

    #[test]
    fn test_semantic_violation() {
        let json = r#"{"color": [{"title": "Red", "value": "5"}, {"title": "Rouge", "value": "5"}]}"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert_eq!(err.details().len(), 1);
    }
}
