// src/analysis/demand.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Skill label to percentage of analyzed jobs, in a meaningful order
/// (first-seen order as computed, descending demand once sorted).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandStatistic {
    entries: Vec<(String, f64)>,
}

impl DemandStatistic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(label, _)| label == skill)
            .map(|(_, percentage)| *percentage)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.get(skill).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(label, percentage)| (label.as_str(), *percentage))
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, percentage)| *percentage)
    }

    /// Keep only the entries matching `keep`, preserving order
    pub fn filtered(&self, mut keep: impl FnMut(&str, f64) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(label, percentage)| keep(label.as_str(), *percentage))
                .cloned()
                .collect(),
        }
    }

    /// Stable sort by descending percentage; equal values keep their order
    pub fn sorted_descending(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { entries }
    }

    /// The first `n` entries
    pub fn top(&self, n: usize) -> Self {
        Self {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }

    /// Arithmetic mean of all percentages, 0 when empty
    pub fn mean(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.values().sum::<f64>() / self.entries.len() as f64
    }
}

impl FromIterator<(String, f64)> for DemandStatistic {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for DemandStatistic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, percentage) in &self.entries {
            map.serialize_entry(label, percentage)?;
        }
        map.end()
    }
}
