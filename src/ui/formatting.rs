use facetq_core::{
    sort_items, strip_html, FilterCatalog, FilterItem, FilterState, RawFilters, SkippedFilter,
};

/// Format one item as "Title (value)" with markup removed from the title
pub fn format_item(item: &FilterItem) -> String {
    format!("{} ({})", strip_html(&item.title), item.value)
}

/// Format a filter state as a markdown list, one line per group
pub fn format_state(state: &FilterState) -> String {
    if state.is_empty() {
        return "_No active filters._".to_string();
    }

    state
        .groups()
        .map(|group| {
            let items: Vec<String> = group.items.iter().map(format_item).collect();
            format!("- **{}:** {}", group.key, items.join(" OR "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format skipped filters, one per line
pub fn format_skipped(skipped: &[SkippedFilter]) -> Vec<String> {
    skipped.iter().map(|s| s.to_string()).collect()
}

/// Format raw filters as a markdown list
pub fn format_raw_filters(raw: &RawFilters) -> String {
    if raw.is_empty() {
        return "_No filter parameters._".to_string();
    }

    raw.iter()
        .map(|(group, values)| {
            let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
            format!("- **{}:** {}", group, quoted.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the catalog with groups and items in display order
pub fn format_catalog(catalog: &FilterCatalog) -> String {
    let mut sections = Vec::new();

    for group in catalog.sorted_group_names() {
        let mut items = catalog.group(&group).map(<[_]>::to_vec).unwrap_or_default();
        sort_items(&mut items);

        let mut lines = vec![format!("### {}\n", group)];
        if items.is_empty() {
            lines.push("_No selectable values._".to_string());
        }
        lines.extend(items.iter().map(|item| format!("- {}", format_item(item))));
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_state() {
        let mut state = FilterState::new();
        state.insert("color", FilterItem::new("<b>Red</b>", "5"));
        state.insert("color", FilterItem::new("Blue", "6"));
        state.insert("size", FilterItem::new("M", "m"));

        assert_eq!(
            format_state(&state),
            "- **color:** Red (5) OR Blue (6)\n- **size:** M (m)"
        );
        assert_eq!(format_state(&FilterState::new()), "_No active filters._");
    }

    #[test]
    fn test_format_raw_filters() {
        let raw = facetq_core::extract_raw_filters("?color[filter]=Red,5&color[filter]=Blue,6");
        assert_eq!(format_raw_filters(&raw), "- **color:** \"Red,5\", \"Blue,6\"");
    }

    #[test]
    fn test_format_catalog_sorts_groups_and_items() {
        let mut catalog = FilterCatalog::new();
        catalog.insert_group("size", vec![]);
        catalog.insert_group(
            "color",
            vec![FilterItem::new("Red", "5"), FilterItem::new("Blue", "6")],
        );

        assert_eq!(
            format_catalog(&catalog),
            "### color\n\n- Blue (6)\n- Red (5)\n\n### size\n\n_No selectable values._"
        );
    }
}
