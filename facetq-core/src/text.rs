use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[^>]+>").expect("valid tag pattern"));

/// Remove anything shaped like an HTML tag from a facet title
///
/// This is a display helper, not a sanitizer: unterminated or nested tags
/// are not handled.
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}
