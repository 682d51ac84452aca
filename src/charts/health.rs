use serde::{Deserialize, Serialize};

use crate::charts::utility::{mean, round_tenth};
use crate::records::TrainRecord;

/// Fitness tiers shown on the fleet health panel.
///
/// | Range           | Tier      |
/// |-----------------|-----------|
/// | >= 90           | Excellent |
/// | >= 80 and < 90  | Good      |
/// | >= 70 and < 80  | Fair      |
/// | < 70            | Poor      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthTier {
    pub const ALL: [HealthTier; 4] = [
        HealthTier::Excellent,
        HealthTier::Good,
        HealthTier::Fair,
        HealthTier::Poor,
    ];

    pub fn classify(score: f64) -> Self {
        match score {
            s if s >= 90.0 => HealthTier::Excellent,
            s if s >= 80.0 => HealthTier::Good,
            s if s >= 70.0 => HealthTier::Fair,
            _ => HealthTier::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent (90%+)",
            HealthTier::Good => "Good (80-89%)",
            HealthTier::Fair => "Fair (70-79%)",
            HealthTier::Poor => "Poor (<70%)",
        }
    }
}

/// Tier counts plus the fleet average fitness, rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub average_fitness: f64,
}

impl HealthSummary {
    pub fn count(&self, tier: HealthTier) -> usize {
        match tier {
            HealthTier::Excellent => self.excellent,
            HealthTier::Good => self.good,
            HealthTier::Fair => self.fair,
            HealthTier::Poor => self.poor,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor
    }

    /// Average as the panel prints it, e.g. `55.7%`.
    pub fn average_display(&self) -> String {
        format!("{:.1}%", self.average_fitness)
    }
}

pub fn summarize_health(records: &[TrainRecord]) -> HealthSummary {
    let mut s = HealthSummary::default();
    let scores: Vec<f64> = records.iter().map(TrainRecord::fitness_score).collect();

    for &score in &scores {
        match HealthTier::classify(score) {
            HealthTier::Excellent => s.excellent += 1,
            HealthTier::Good => s.good += 1,
            HealthTier::Fair => s.fair += 1,
            HealthTier::Poor => s.poor += 1,
        }
    }

    s.average_fitness = round_tenth(mean(&scores));
    s
}
