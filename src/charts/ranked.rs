//! Fitness ranking for the bar chart.

use serde::Serialize;

use crate::records::TrainRecord;

/// Binary color class of a ranked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// The train was inducted.
    Positive,
    /// Any other decision, including a missing one.
    Negative,
}

impl Classification {
    pub fn of(record: &TrainRecord) -> Self {
        if record.is_inducted() {
            Classification::Positive
        } else {
            Classification::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub label: String,
    pub value: f64,
    pub class: Classification,
}

/// Entries ordered by descending fitness score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedSeries {
    entries: Vec<RankedEntry>,
}

impl RankedSeries {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn classes(&self) -> impl Iterator<Item = Classification> + '_ {
        self.entries.iter().map(|e| e.class)
    }
}

/// Ranks records by fitness score, highest first.
///
/// Missing scores rank as `0`. The sort is stable, so trains with equal
/// scores keep their input order.
pub fn rank_fitness(records: &[TrainRecord]) -> RankedSeries {
    let mut entries: Vec<RankedEntry> = records
        .iter()
        .map(|r| RankedEntry {
            label: r.train_id().to_string(),
            value: r.fitness_score(),
            class: Classification::of(r),
        })
        .collect();

    entries.sort_by(|a, b| b.value.total_cmp(&a.value));

    RankedSeries { entries }
}
