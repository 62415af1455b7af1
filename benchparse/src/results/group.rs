//! Grouping results by variable values

use super::types::{BenchResults, ResultEntry};
use crate::config::constants::rendering::GROUP_KEY_SEPARATOR;
use crate::log_success;
use crate::logging::codes;
use indexmap::IndexMap;

/// Buckets of results keyed by comma-joined `name=value` pairs.
///
/// Buckets are kept in the order their keys were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedResults {
    groups: IndexMap<String, BenchResults>,
}

impl GroupedResults {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: String, entry: ResultEntry) {
        self.groups.entry(key).or_default().push(entry);
    }

    pub fn get(&self, key: &str) -> Option<&BenchResults> {
        self.groups.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BenchResults)> {
        self.groups.iter().map(|(key, results)| (key.as_str(), results))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for GroupedResults {
    type Item = (String, BenchResults);
    type IntoIter = indexmap::map::IntoIter<String, BenchResults>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl BenchResults {
    /// Partition results by the values of the named variables.
    ///
    /// A result lacking any of `names` is left out of every bucket, as is
    /// one with fewer matching variables than requested names. Key
    /// components follow the result's own variable order. With no names
    /// there is exactly one bucket, keyed `""`, holding every result.
    pub fn group<S: AsRef<str>>(&self, names: &[S]) -> GroupedResults {
        let mut grouped = GroupedResults::new();

        if names.is_empty() {
            grouped.groups.insert(String::new(), self.clone());
            return grouped;
        }

        for result in self.iter() {
            let matched: Vec<String> = result
                .inputs
                .variables
                .iter()
                .filter(|variable| names.iter().any(|name| name.as_ref() == variable.name))
                .map(|variable| variable.to_string())
                .collect();

            let has_every_name = names.iter().all(|name| {
                result
                    .inputs
                    .variables
                    .iter()
                    .any(|variable| variable.name == name.as_ref())
            });
            if matched.len() < names.len() || !has_every_name {
                continue;
            }

            grouped.insert(matched.join(GROUP_KEY_SEPARATOR), result.clone());
        }

        log_success!(codes::success::GROUPING_COMPLETE, "Results grouped",
            "groups" => grouped.len(),
            "total" => self.len()
        );

        grouped
    }
}
