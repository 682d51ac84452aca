//! Chart.js-shaped data and options handed to the rendering layer.

use serde::Serialize;

use crate::charts::distribution::CategoryDistribution;
use crate::charts::ranked::{Classification, RankedSeries};
use crate::theme::{ChartTheme, ColorPair, Palette};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

/// Labels plus datasets. Empty input yields no datasets at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }
}

impl ChartTheme {
    fn colors_for(&self, class: Classification) -> &ColorPair {
        match class {
            Classification::Positive => &self.positive,
            Classification::Negative => &self.negative,
        }
    }
}

/// Bar chart data for the ranked fitness series.
pub fn fitness_chart(series: &RankedSeries, theme: &ChartTheme) -> ChartData {
    if series.is_empty() {
        return ChartData::default();
    }

    let (fills, borders) = series
        .classes()
        .map(|class| {
            let pair = theme.colors_for(class);
            (pair.fill.clone(), pair.border.clone())
        })
        .unzip();

    ChartData {
        labels: series.labels(),
        datasets: vec![Dataset {
            label: Some("Fitness Score".to_string()),
            data: series.values(),
            background_color: fills,
            border_color: borders,
            border_width: 1,
        }],
    }
}

/// Pie/doughnut data for a categorical distribution, one palette color per
/// category.
pub fn distribution_chart(dist: &CategoryDistribution, palette: &Palette) -> ChartData {
    if dist.is_empty() {
        return ChartData::default();
    }

    ChartData {
        labels: dist.labels(),
        datasets: vec![Dataset {
            label: None,
            data: dist.counts().into_iter().map(|c| c as f64).collect(),
            background_color: palette.fills(dist.len()),
            border_color: palette.borders(dist.len()),
            border_width: 2,
        }],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugins {
    pub legend: Legend,
    /// Tooltip label template; `{value}` is replaced by the hovered value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_label: Option<String>,
}

/// Tick settings; `suffix` is appended to every tick label by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl ChartOptions {
    /// Shared options for the pie and doughnut charts.
    pub fn base() -> Self {
        ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    position: LegendPosition::Top,
                },
                tooltip_label: None,
            },
            scales: None,
        }
    }

    /// Percentage bar chart: y axis pinned to 0..100.
    pub fn percent_bar() -> Self {
        let mut options = Self::base();
        options.plugins.tooltip_label = Some("Fitness: {value}%".to_string());
        options.scales = Some(Scales {
            x: Axis {
                ticks: Ticks {
                    max_rotation: Some(45),
                    suffix: None,
                },
                ..Axis::default()
            },
            y: Axis {
                begin_at_zero: Some(true),
                max: Some(100.0),
                ticks: Ticks {
                    max_rotation: None,
                    suffix: Some("%".to_string()),
                },
            },
        });
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::distribution::{CategoryField, category_distribution};
    use crate::charts::ranked::rank_fitness;
    use crate::records::TrainRecord;

    fn scenario() -> Vec<TrainRecord> {
        vec![
            TrainRecord::new("T1", Some(95.0), Some("Induct"), Some("A")),
            TrainRecord::new("T2", Some(72.0), Some("Hold"), Some("B")),
            TrainRecord::new("T3", None, Some("Induct"), Some("A")),
        ]
    }

    #[test]
    fn test_fitness_chart_colors() {
        let chart = fitness_chart(&rank_fitness(&scenario()), &ChartTheme::default());
        let dataset = &chart.datasets[0];

        assert_eq!(chart.labels, vec!["T1", "T2", "T3"]);
        assert_eq!(dataset.data, vec![95.0, 72.0, 0.0]);
        assert_eq!(dataset.background_color, vec!["#10b981", "#ef4444", "#10b981"]);
        assert_eq!(dataset.border_color, vec!["#059669", "#dc2626", "#059669"]);
        assert_eq!(dataset.border_width, 1);
    }

    #[test]
    fn test_empty_charts_have_no_datasets() {
        let theme = ChartTheme::default();
        let fitness = fitness_chart(&rank_fitness(&[]), &theme);
        let depots = distribution_chart(
            &category_distribution(&[], CategoryField::Depot),
            &theme.category,
        );

        assert!(fitness.is_empty());
        assert!(depots.is_empty());
        assert_eq!(
            serde_json::to_string(&fitness).unwrap(),
            r#"{"labels":[],"datasets":[]}"#
        );
    }

    #[test]
    fn test_distribution_chart_cycles_palette() {
        let records: Vec<_> = (0..7)
            .map(|i| TrainRecord::new("T", None, None, Some(format!("D{i}").as_str())))
            .collect();
        let palette = Palette::default();
        let chart = distribution_chart(
            &category_distribution(&records, CategoryField::Depot),
            &palette,
        );
        let dataset = &chart.datasets[0];

        assert_eq!(dataset.background_color.len(), 7);
        assert_eq!(dataset.background_color[5], dataset.background_color[0]);
        assert_eq!(dataset.border_color[6], dataset.border_color[1]);
        assert_eq!(dataset.border_width, 2);
    }

    #[test]
    fn test_dataset_serializes_camel_case() {
        let chart = distribution_chart(
            &category_distribution(&scenario(), CategoryField::Decision),
            &Palette::default(),
        );
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["labels"], serde_json::json!(["Induct", "Hold"]));
        assert_eq!(json["datasets"][0]["data"], serde_json::json!([2.0, 1.0]));
        assert!(json["datasets"][0].get("backgroundColor").is_some());
        assert!(json["datasets"][0].get("label").is_none());
    }

    #[test]
    fn test_percent_bar_options() {
        let json = serde_json::to_value(ChartOptions::percent_bar()).unwrap();

        assert_eq!(json["maintainAspectRatio"], false);
        assert_eq!(json["plugins"]["legend"]["position"], "top");
        assert_eq!(json["plugins"]["tooltipLabel"], "Fitness: {value}%");
        assert!(json["plugins"].get("tooltip_label").is_none());
        assert_eq!(json["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["scales"]["y"]["max"], 100.0);
        assert_eq!(json["scales"]["y"]["ticks"]["suffix"], "%");
        assert_eq!(json["scales"]["x"]["ticks"]["maxRotation"], 45);
        assert!(json["scales"]["x"].get("maxRotation").is_none());
        assert!(json["scales"]["x"].get("beginAtZero").is_none());
        assert!(serde_json::to_value(ChartOptions::base()).unwrap().get("scales").is_none());
    }
}
