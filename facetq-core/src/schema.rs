use serde_json::{json, Value};

use crate::codec::FILTER_SUFFIX;

/// JSON Schema describing a filter catalog file
///
/// A catalog is an object keyed by group identifier, each holding an array
/// of `{ "title", "value" }` items.
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "facetq-filter-catalog",
        "title": "Filter Catalog",
        "type": "object",
        "propertyNames": {
            "minLength": 1,
            "not": { "pattern": format!("{}$", regex::escape(FILTER_SUFFIX)) }
        },
        "additionalProperties": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "value": { "type": "string", "minLength": 1 }
                },
                "required": ["title", "value"],
                "additionalProperties": false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_metadata() {
        let schema = catalog_schema();
        assert_eq!(schema["$id"], "facetq-filter-catalog");
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn test_suffix_pattern_is_escaped() {
        let schema = catalog_schema();
        assert_eq!(
            schema["propertyNames"]["not"]["pattern"],
            r"\[filter\]$"
        );
    }

    #[test]
    fn test_item_requires_title_and_value() {
        let schema = catalog_schema();
        let required = schema["additionalProperties"]["items"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 2);
    }
}
