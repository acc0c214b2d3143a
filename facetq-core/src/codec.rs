//! Conversion between filter selections and URL query strings
//!
//! Each selected item becomes one `<group>[filter]=<title>,<value>` pair.
//! Parameters that are not recognized filter keys pass through untouched.

use serde::Serialize;
use std::fmt;
use url::form_urlencoded;

use crate::models::{FilterCatalog, FilterItem, FilterKeys, FilterState, RawFilters};

/// Joins title and value inside an encoded filter parameter.
/// Changing it invalidates every previously shared URL.
pub const DELIMITER: char = ',';

/// Suffix marking a query parameter as a filter group
pub const FILTER_SUFFIX: &str = "[filter]";

/// Why a filter parameter could not be resolved during decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The catalog has no entry for the group
    UnknownGroup,
    /// The parameter value has no title/value delimiter
    MissingDelimiter,
    /// The value is not among the group's catalog items
    UnknownValue,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownGroup => write!(f, "group not in catalog"),
            SkipReason::MissingDelimiter => write!(f, "missing '{}' delimiter", DELIMITER),
            SkipReason::UnknownValue => write!(f, "value not in catalog"),
        }
    }
}

/// A filter parameter dropped during decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFilter {
    pub group: String,
    pub raw: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "filter '{}' in group '{}' skipped: {}",
            self.raw, self.group, self.reason
        )
    }
}

/// Result of decoding a query string against a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodedFilters {
    pub state: FilterState,
    pub skipped: Vec<SkippedFilter>,
}

/// Query parameter key for a group
pub fn filter_param_key(group: &str) -> String {
    format!("{}{}", group, FILTER_SUFFIX)
}

/// Group identifier for a filter parameter key, if it carries the suffix
pub fn group_from_param_key(key: &str) -> Option<&str> {
    key.strip_suffix(FILTER_SUFFIX)
}

/// Split an encoded `<title>,<value>` pair at its last delimiter
pub fn split_encoded(raw: &str) -> Option<(&str, &str)> {
    raw.rsplit_once(DELIMITER)
}

/// Serialize filter selections into a query string, starting from `existing`
///
/// Every parameter under a recognized key is removed first, so groups absent
/// from `state` are cleared. The result always begins with `?`.
pub fn encode(existing: &str, keys: &FilterKeys, state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in parse_pairs(existing) {
        if !keys.recognizes(&key) {
            serializer.append_pair(&key, &value);
        }
    }

    for group in state.groups() {
        let param_key = filter_param_key(&group.key);
        for item in &group.items {
            serializer.append_pair(&param_key, &item.encoded());
        }
    }

    let query = serializer.finish();
    tracing::debug!(
        groups = state.len(),
        items = state.item_count(),
        "encoded filter state"
    );
    format!("?{}", query)
}

/// Rebuild filter selections from a query string
///
/// Values that cannot be resolved against `catalog` are dropped and reported
/// in [`DecodedFilters::skipped`]. Keys that are not recognized are ignored.
pub fn decode(query: &str, keys: &FilterKeys, catalog: &FilterCatalog) -> DecodedFilters {
    let pairs = parse_pairs(query);
    let mut decoded = DecodedFilters::default();

    for key in unique_keys(&pairs) {
        if !keys.recognizes(key) {
            continue;
        }
        let Some(group) = group_from_param_key(key) else {
            continue;
        };
        let catalog_items = catalog.group(group);

        for raw in values_for(&pairs, key) {
            match resolve(catalog_items, raw) {
                Ok(item) => {
                    decoded.state.insert(group, item.clone());
                }
                Err(reason) => {
                    tracing::warn!(
                        group,
                        filter = raw,
                        %reason,
                        "dropping unresolved filter parameter"
                    );
                    decoded.skipped.push(SkippedFilter {
                        group: group.to_string(),
                        raw: raw.to_string(),
                        reason,
                    });
                }
            }
        }
    }

    tracing::debug!(
        groups = decoded.state.len(),
        skipped = decoded.skipped.len(),
        "decoded filter state"
    );
    decoded
}

/// Collect raw filter values by group without a catalog
pub fn extract_raw_filters(query: &str) -> RawFilters {
    let pairs = parse_pairs(query);
    let mut raw = RawFilters::default();

    for key in unique_keys(&pairs) {
        if let Some(group) = group_from_param_key(key) {
            for value in values_for(&pairs, key) {
                raw.push(group, value.to_string());
            }
        }
    }

    raw
}

fn resolve<'a>(
    catalog_items: Option<&'a [FilterItem]>,
    raw: &str,
) -> Result<&'a FilterItem, SkipReason> {
    let items = catalog_items.ok_or(SkipReason::UnknownGroup)?;
    let (_, value) = split_encoded(raw).ok_or(SkipReason::MissingDelimiter)?;
    items
        .iter()
        .find(|item| item.value == value)
        .ok_or(SkipReason::UnknownValue)
}

/// Parse a query string, ignoring one leading `?`
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Distinct keys in order of first appearance
fn unique_keys(pairs: &[(String, String)]) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for (key, _) in pairs {
        if !keys.contains(&key.as_str()) {
            keys.push(key);
        }
    }
    keys
}

fn values_for<'a>(pairs: &'a [(String, String)], key: &'a str) -> impl Iterator<Item = &'a str> {
    pairs
        .iter()
        .filter(move |(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
