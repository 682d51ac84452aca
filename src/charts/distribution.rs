//! Categorical counting for the depot and decision charts.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::records::TrainRecord;

/// Which categorical field of a record to count by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Depot,
    Decision,
}

impl CategoryField {
    pub fn resolve(self, record: &TrainRecord) -> &str {
        match self {
            CategoryField::Depot => record.depot(),
            CategoryField::Decision => record.decision(),
        }
    }
}

/// Count per category label, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDistribution {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CategoryDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to `label`, appending it if this is its first occurrence.
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Counts records by whatever label `key` resolves for each of them.
pub fn count_by<'a, F>(records: &'a [TrainRecord], key: F) -> CategoryDistribution
where
    F: Fn(&'a TrainRecord) -> &'a str,
{
    records
        .iter()
        .fold(CategoryDistribution::new(), |mut dist, record| {
            dist.increment(key(record));
            dist
        })
}

/// Counts records per depot or per decision, defaulting absent labels to `"Unknown"`.
pub fn category_distribution(
    records: &[TrainRecord],
    field: CategoryField,
) -> CategoryDistribution {
    count_by(records, |r| field.resolve(r))
}
