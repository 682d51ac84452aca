//! Fleet chart derivations.
//!
//! Each derivation is a pure fold over a slice of [`TrainRecord`]s: a ranked
//! fitness series, per-depot and per-decision counts, and the tiered health
//! summary. [`view`] turns the results into Chart.js-shaped structures.
//!
//! [`TrainRecord`]: crate::records::TrainRecord

pub mod distribution;
pub mod health;
pub mod ranked;
pub mod utility;
pub mod view;

pub use distribution::{CategoryDistribution, CategoryField, category_distribution, count_by};
pub use health::{HealthSummary, HealthTier, summarize_health};
pub use ranked::{Classification, RankedEntry, RankedSeries, rank_fitness};
