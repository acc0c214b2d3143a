use serde_json::Value;

use crate::schema::catalog_schema;

/// Validate data against a JSON Schema
/// Returns Ok(()) if valid, Err with every validation error if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate raw catalog JSON against the catalog schema
pub fn validate_catalog_json(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&catalog_schema(), data)
}
