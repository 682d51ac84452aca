//! The four dashboard panels, derived together from one record set.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::charts::view::{ChartData, ChartOptions, distribution_chart, fitness_chart};
use crate::charts::{
    CategoryDistribution, CategoryField, HealthSummary, HealthTier, category_distribution,
    rank_fitness, summarize_health,
};
use crate::records::TrainRecord;
use crate::theme::ChartTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// One row of the fleet health panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierRow {
    pub tier: HealthTier,
    pub label: String,
    pub trains: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthPanel {
    pub title: String,
    pub summary: HealthSummary,
    pub rows: Vec<TierRow>,
    pub average_display: String,
}

impl HealthPanel {
    fn new(summary: HealthSummary) -> Self {
        HealthPanel {
            title: "Fleet Health Overview".to_string(),
            rows: HealthTier::ALL
                .iter()
                .map(|&tier| TierRow {
                    tier,
                    label: tier.label().to_string(),
                    trains: summary.count(tier),
                })
                .collect(),
            average_display: summary.average_display(),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetDashboard {
    pub fitness: ChartPanel,
    pub depots: ChartPanel,
    pub decisions: ChartPanel,
    /// Absent when there are no records, like the empty panel on the page.
    pub health: Option<HealthPanel>,
}

impl FleetDashboard {
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn from_records(records: &[TrainRecord], theme: &ChartTheme) -> Self {
        let depots = category_distribution(records, CategoryField::Depot);
        let decisions = category_distribution(records, CategoryField::Decision);

        FleetDashboard {
            fitness: ChartPanel {
                title: "Train Fitness Scores".to_string(),
                kind: ChartKind::Bar,
                data: fitness_chart(&rank_fitness(records), theme),
                options: ChartOptions::percent_bar(),
            },
            depots: ChartPanel {
                title: "Train Distribution by Depot".to_string(),
                kind: ChartKind::Pie,
                data: distribution_chart(&depots, &theme.category),
                options: ChartOptions::base(),
            },
            decisions: ChartPanel {
                title: "Induction Decision Summary".to_string(),
                kind: ChartKind::Doughnut,
                data: distribution_chart(&decisions, &theme.decision),
                options: ChartOptions::base(),
            },
            health: if records.is_empty() {
                None
            } else {
                Some(HealthPanel::new(summarize_health(records)))
            },
        }
    }
}

/// Export wrapper: the dashboard plus when and from what it was derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardExport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub trains: usize,
    pub dashboard: FleetDashboard,
}

impl FleetDashboard {
    pub fn export(self, source: &str, trains: usize) -> DashboardExport {
        DashboardExport {
            generated_at: Utc::now(),
            source: source.to_string(),
            trains,
            dashboard: self,
        }
    }
}

/// Depot and decision counts, for logging without the chart wrapping.
pub fn distributions(records: &[TrainRecord]) -> (CategoryDistribution, CategoryDistribution) {
    (
        category_distribution(records, CategoryField::Depot),
        category_distribution(records, CategoryField::Decision),
    )
}
