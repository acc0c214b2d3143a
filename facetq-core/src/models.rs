use serde::{Deserialize, Serialize, Serializer};
use std::collections::{HashMap, HashSet};

use crate::codec::{DELIMITER, FILTER_SUFFIX};

/// A selectable option within a facet group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterItem {
    pub title: String,
    pub value: String,
}

impl FilterItem {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    /// The `<title>,<value>` form used as a query parameter value
    pub fn encoded(&self) -> String {
        format!("{}{}{}", self.title, DELIMITER, self.value)
    }
}

/// Selected items for one facet group, unique by value, in selection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: String,
    pub items: Vec<FilterItem>,
}

impl FilterGroup {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item.value == value)
    }
}

/// The shopper's current selections across all facets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    groups: Vec<FilterGroup>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups with at least one selected item
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total number of selected items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn groups(&self) -> impl Iterator<Item = &FilterGroup> {
        self.groups.iter()
    }

    pub fn get(&self, group: &str) -> Option<&[FilterItem]> {
        self.groups
            .iter()
            .find(|g| g.key == group)
            .map(|g| g.items.as_slice())
    }

    pub fn contains(&self, group: &str, value: &str) -> bool {
        self.get(group)
            .is_some_and(|items| items.iter().any(|item| item.value == value))
    }

    /// Add an item to a group; returns false if an item with the same value was already selected
    pub fn insert(&mut self, group: &str, item: FilterItem) -> bool {
        let index = match self.groups.iter().position(|g| g.key == group) {
            Some(index) => index,
            None => {
                self.groups.push(FilterGroup::new(group));
                self.groups.len() - 1
            }
        };

        let entry = &mut self.groups[index];
        if entry.position(&item.value).is_some() {
            return false;
        }
        entry.items.push(item);
        true
    }

    /// Remove an item by value; a group left without items is dropped
    pub fn remove(&mut self, group: &str, value: &str) -> Option<FilterItem> {
        let index = self.groups.iter().position(|g| g.key == group)?;
        let position = self.groups[index].position(value)?;
        let removed = self.groups[index].items.remove(position);

        if self.groups[index].items.is_empty() {
            self.groups.remove(index);
        }
        Some(removed)
    }

    /// Flip the selection of an item; returns whether it is selected afterwards
    pub fn toggle(&mut self, group: &str, item: FilterItem) -> bool {
        if self.remove(group, &item.value).is_some() {
            false
        } else {
            self.insert(group, item)
        }
    }

    pub fn clear_group(&mut self, group: &str) -> Option<FilterGroup> {
        let index = self.groups.iter().position(|g| g.key == group)?;
        Some(self.groups.remove(index))
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Compare selections ignoring group and item order
    pub fn is_equivalent(&self, other: &FilterState) -> bool {
        if self.groups.len() != other.groups.len() {
            return false;
        }

        self.groups.iter().all(|group| {
            let Some(other_items) = other.get(&group.key) else {
                return false;
            };
            let ours: HashSet<&FilterItem> = group.items.iter().collect();
            let theirs: HashSet<&FilterItem> = other_items.iter().collect();
            ours == theirs
        })
    }
}

/// Every selectable item per facet group, used to resolve values back to items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCatalog {
    groups: HashMap<String, Vec<FilterItem>>,
}

impl FilterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_group(&mut self, group: impl Into<String>, items: Vec<FilterItem>) {
        self.groups.insert(group.into(), items);
    }

    pub fn group(&self, group: &str) -> Option<&[FilterItem]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn find(&self, group: &str, value: &str) -> Option<&FilterItem> {
        self.group(group)?.iter().find(|item| item.value == value)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<FilterItem>)> {
        self.groups.iter()
    }

    /// Group names in sorted order
    pub fn sorted_group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }

    /// Recognized filter keys covering every group in the catalog
    pub fn filter_keys(&self) -> FilterKeys {
        self.groups.keys().collect()
    }
}

/// The query parameter keys treated as filters
///
/// Group identifiers are normalized to their parameter form, so `color` and
/// `color[filter]` name the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterKeys {
    keys: HashSet<String>,
}

impl FilterKeys {
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        groups.into_iter().collect()
    }

    pub fn recognizes(&self, param_key: &str) -> bool {
        self.keys.contains(param_key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let keys = iter
            .into_iter()
            .map(|key| {
                let key = key.as_ref();
                if key.ends_with(FILTER_SUFFIX) {
                    key.to_string()
                } else {
                    format!("{}{}", key, FILTER_SUFFIX)
                }
            })
            .collect();
        Self { keys }
    }
}

/// Raw encoded filter values grouped by facet, before any catalog lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFilters {
    groups: Vec<(String, Vec<String>)>,
}

impl RawFilters {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, group: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(key, _)| key == group)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub(crate) fn push(&mut self, group: &str, raw: String) {
        match self.groups.iter_mut().find(|(key, _)| key == group) {
            Some((_, values)) => {
                if !values.contains(&raw) {
                    values.push(raw);
                }
            }
            None => self.groups.push((group.to_string(), vec![raw])),
        }
    }
}

impl Serialize for RawFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
