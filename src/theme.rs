//! Chart colors.
//!
//! The defaults mirror the dashboard's stock palette. A JSON file can
//! override any subset of them:
//! ```json
//! {
//!   "positive": { "fill": "#22c55e", "border": "#15803d" },
//!   "category_fill": ["#0ea5e9", "#f97316"]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fill color and its matching border color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fill: String,
    pub border: String,
}

impl ColorPair {
    fn new(fill: &str, border: &str) -> Self {
        ColorPair {
            fill: fill.to_string(),
            border: border.to_string(),
        }
    }
}

/// Fill and border sequences assigned to categories in order, wrapping
/// around when there are more categories than colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    fill: Vec<String>,
    border: Vec<String>,
}

impl Palette {
    /// Builds a palette. Either side falls back to the default sequence
    /// when empty.
    pub fn new(fill: Vec<String>, border: Vec<String>) -> Self {
        let default = Palette::default();
        Palette {
            fill: if fill.is_empty() { default.fill } else { fill },
            border: if border.is_empty() { default.border } else { border },
        }
    }

    pub fn fill(&self, index: usize) -> &str {
        &self.fill[index % self.fill.len()]
    }

    pub fn border(&self, index: usize) -> &str {
        &self.border[index % self.border.len()]
    }

    /// Fill colors for `n` categories.
    pub fn fills(&self, n: usize) -> Vec<String> {
        (0..n).map(|i| self.fill(i).to_string()).collect()
    }

    /// Border colors for `n` categories.
    pub fn borders(&self, n: usize) -> Vec<String> {
        (0..n).map(|i| self.border(i).to_string()).collect()
    }
}

fn strings(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            fill: strings(&["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"]),
            border: strings(&["#2563eb", "#059669", "#d97706", "#dc2626", "#7c3aed"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    pub positive: ColorPair,
    pub negative: ColorPair,
    pub category: Palette,
    pub decision: Palette,
}

impl Default for ChartTheme {
    fn default() -> Self {
        ChartTheme {
            positive: ColorPair::new("#10b981", "#059669"),
            negative: ColorPair::new("#ef4444", "#dc2626"),
            category: Palette::default(),
            decision: Palette::default(),
        }
    }
}

/// On-disk shape of a theme override file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    positive: Option<ColorPair>,
    negative: Option<ColorPair>,
    category_fill: Vec<String>,
    category_border: Vec<String>,
    decision_fill: Vec<String>,
    decision_border: Vec<String>,
}

impl ChartTheme {
    /// Loads overrides from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file '{path}'"))?;
        let theme = Self::from_json(&content)
            .with_context(|| format!("invalid theme file '{path}'"))?;
        debug!(path, "Loaded chart theme");
        Ok(theme)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: ThemeFile = serde_json::from_str(content)?;
        let default = ChartTheme::default();

        Ok(ChartTheme {
            positive: file.positive.unwrap_or(default.positive),
            negative: file.negative.unwrap_or(default.negative),
            category: Palette::new(file.category_fill, file.category_border),
            decision: Palette::new(file.decision_fill, file.decision_border),
        })
    }
}
