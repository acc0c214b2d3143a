use crate::models::FilterItem;
use crate::text::strip_html;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een)\s+")
        .expect("valid article pattern")
});

/// Sort filter items for display by title, ties broken by value
pub fn sort_items(items: &mut [FilterItem]) {
    items.sort_by(compare_items);
}

/// Ordering used by [`sort_items`]
pub fn compare_items(a: &FilterItem, b: &FilterItem) -> Ordering {
    let a_key = normalize_for_sorting(&a.title);
    let b_key = normalize_for_sorting(&b.title);

    match a_key.cmp(&b_key) {
        Ordering::Equal => a.value.cmp(&b.value),
        other => other,
    }
}

/// Normalize a title for library-style sorting
/// - Strip markup and leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let plain = strip_html(s);
    let without_articles = strip_leading_articles(plain.trim());

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
pub fn strip_leading_articles(s: &str) -> String {
    LEADING_ARTICLE.replace(s, "").to_string()
}
