use crate::codec::{DELIMITER, FILTER_SUFFIX};
use crate::models::{FilterCatalog, FilterItem, FilterState};
use std::collections::HashSet;

/// Validate a filter catalog
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_catalog(catalog: &FilterCatalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for group in catalog.sorted_group_names() {
        if group.trim().is_empty() {
            errors.push("Filter group names cannot be empty".to_string());
        }

        if group.ends_with(FILTER_SUFFIX) {
            errors.push(format!(
                "Filter group '{}' must not carry the '{}' suffix",
                group, FILTER_SUFFIX
            ));
        }

        if let Some(items) = catalog.group(&group) {
            validate_group_items(&group, items, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_group_items(group: &str, items: &[FilterItem], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("Group '{}' item #{} ('{}')", group, idx + 1, item.title);

        if item.title.trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", item_ref));
        }

        if item.value.trim().is_empty() {
            errors.push(format!("{}: value cannot be empty", item_ref));
        }

        // Values are recovered from the text after the last delimiter
        if item.value.contains(DELIMITER) {
            errors.push(format!(
                "{}: value '{}' contains the '{}' delimiter",
                item_ref, item.value, DELIMITER
            ));
        }

        if !seen.insert(&item.value) {
            errors.push(format!(
                "{}: duplicate value '{}'",
                item_ref, item.value
            ));
        }
    }
}

/// Check that every selected item exists in the catalog
/// A state that passes decodes back to itself after encoding
pub fn validate_state(state: &FilterState, catalog: &FilterCatalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for group in state.groups() {
        if catalog.group(&group.key).is_none() {
            errors.push(format!("Filter group '{}' is not in the catalog", group.key));
            continue;
        }

        for item in &group.items {
            match catalog.find(&group.key, &item.value) {
                Some(known) if known == item => {}
                Some(known) => errors.push(format!(
                    "Group '{}' value '{}' is titled '{}' in the catalog, not '{}'",
                    group.key, item.value, known.title, item.title
                )),
                None => errors.push(format!(
                    "Group '{}' value '{}' is not in the catalog",
                    group.key, item.value
                )),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FilterCatalog {
        let mut catalog = FilterCatalog::new();
        catalog.insert_group(
            "color",
            vec![FilterItem::new("Red", "5"), FilterItem::new("Blue", "6")],
        );
        catalog
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_value() {
        let mut catalog = catalog();
        catalog.insert_group(
            "size",
            vec![FilterItem::new("Medium", "m"), FilterItem::new("Mid", "m")],
        );

        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate value 'm'"));
    }

    #[test]
    fn test_value_with_delimiter() {
        let mut catalog = FilterCatalog::new();
        catalog.insert_group("price", vec![FilterItem::new("Cheap", "0,50")]);

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("delimiter"));
    }

    #[test]
    fn test_empty_fields_and_suffixed_group() {
        let mut catalog = FilterCatalog::new();
        catalog.insert_group("color[filter]", vec![FilterItem::new(" ", "")]);

        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_state() {
        let mut state = FilterState::new();
        state.insert("color", FilterItem::new("Red", "5"));
        assert!(validate_state(&state, &catalog()).is_ok());

        state.insert("color", FilterItem::new("Green", "7"));
        state.insert("color", FilterItem::new("Navy", "6"));
        state.insert("size", FilterItem::new("M", "m"));

        let errors = validate_state(&state, &catalog()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
