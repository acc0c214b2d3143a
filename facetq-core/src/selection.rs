use crate::models::{FilterCatalog, FilterState};

/// A `group=value` selection parsed from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub group: String,
    pub value: String,
}

/// Parse selection strings in the format "group=value"
/// Returns the parsed selections and the entries that had no '=' or an empty side
pub fn parse_selections(inputs: &[String]) -> (Vec<Selection>, Vec<String>) {
    let mut selections = Vec::new();
    let mut malformed = Vec::new();

    for input in inputs {
        match input.split_once('=') {
            Some((group, value)) if !group.trim().is_empty() && !value.trim().is_empty() => {
                selections.push(Selection {
                    group: group.trim().to_string(),
                    value: value.trim().to_string(),
                });
            }
            _ => malformed.push(input.clone()),
        }
    }

    (selections, malformed)
}

/// Build a filter state from selections, looking each value up in the catalog
/// Returns the state and a message for every selection the catalog does not know
pub fn resolve_selections(
    catalog: &FilterCatalog,
    selections: &[Selection],
) -> (FilterState, Vec<String>) {
    let mut state = FilterState::new();
    let mut unknown = Vec::new();

    for selection in selections {
        if catalog.group(&selection.group).is_none() {
            unknown.push(format!("Unknown filter group '{}'", selection.group));
            continue;
        }

        match catalog.find(&selection.group, &selection.value) {
            Some(item) => {
                state.insert(&selection.group, item.clone());
            }
            None => unknown.push(format!(
                "Group '{}' has no value '{}'",
                selection.group, selection.value
            )),
        }
    }

    (state, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterItem;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_selections() {
        let (selections, malformed) =
            parse_selections(&strings(&["color = 5", "size=m", "broken", "=7", "x="]));

        assert_eq!(
            selections,
            vec![
                Selection {
                    group: "color".to_string(),
                    value: "5".to_string()
                },
                Selection {
                    group: "size".to_string(),
                    value: "m".to_string()
                },
            ]
        );
        assert_eq!(malformed, strings(&["broken", "=7", "x="]));
    }

    #[test]
    fn test_resolve_selections() {
        let mut catalog = FilterCatalog::new();
        catalog.insert_group(
            "color",
            vec![FilterItem::new("Red", "5"), FilterItem::new("Blue", "6")],
        );

        let (selections, _) = parse_selections(&strings(&[
            "color=6",
            "color=5",
            "color=6",
            "color=9",
            "size=m",
        ]));
        let (state, unknown) = resolve_selections(&catalog, &selections);

        assert_eq!(
            state.get("color").unwrap(),
            &[FilterItem::new("Blue", "6"), FilterItem::new("Red", "5")]
        );
        assert_eq!(unknown.len(), 2);
        assert!(unknown[0].contains("'9'"));
        assert!(unknown[1].contains("'size'"));
    }
}
