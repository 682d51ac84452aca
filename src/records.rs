//! Train fitness records as supplied by the fleet data source.
//!
//! Every field is optional on the wire. Accessors resolve the documented
//! defaults so downstream derivations never deal with absent values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Label used for any categorical field that is missing or empty.
pub const UNKNOWN: &str = "Unknown";

/// The decision label that marks a train as eligible for service.
pub const INDUCT: &str = "Induct";

/// A single train's fitness record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub train_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub fitness_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub final_decision: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub depot: Option<String>,
}

impl TrainRecord {
    pub fn new(
        train_id: &str,
        fitness_score: Option<f64>,
        final_decision: Option<&str>,
        depot: Option<&str>,
    ) -> Self {
        TrainRecord {
            train_id: Some(train_id.to_string()),
            fitness_score,
            final_decision: final_decision.map(str::to_string),
            depot: depot.map(str::to_string),
        }
    }

    /// Display label; empty when the record carries no id.
    pub fn train_id(&self) -> &str {
        self.train_id.as_deref().unwrap_or("")
    }

    /// Fitness score, `0.0` when absent or not a finite number.
    pub fn fitness_score(&self) -> f64 {
        match self.fitness_score {
            Some(score) if score.is_finite() => score,
            _ => 0.0,
        }
    }

    /// Decision label, [`UNKNOWN`] when absent or empty.
    pub fn decision(&self) -> &str {
        non_empty(self.final_decision.as_deref())
    }

    /// Depot label, [`UNKNOWN`] when absent or empty.
    pub fn depot(&self) -> &str {
        non_empty(self.depot.as_deref())
    }

    /// `true` only for an exact `"Induct"` decision.
    pub fn is_inducted(&self) -> bool {
        self.final_decision.as_deref() == Some(INDUCT)
    }
}

fn non_empty(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN,
    }
}

/// Coerces a JSON value into a score. Numbers and numeric strings are
/// accepted; everything else is treated as absent.
pub(crate) fn score_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_score(s),
        _ => None,
    }
}

/// Parses a textual score, ignoring surrounding whitespace.
pub(crate) fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Prints a number the way the dashboard labels it: integral floats lose
/// their fractional part, so `1.0` reads `1`.
fn display_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Coerces a JSON value into a display id. Any scalar is kept, including `0`.
pub(crate) fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(display_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerces a JSON value into a category label. Falsy scalars (`""`, `0`,
/// `false`) count as absent and end up as [`UNKNOWN`].
pub(crate) fn label_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(display_number(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(score_from_value))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(label_from_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let record = TrainRecord::default();

        assert_eq!(record.train_id(), "");
        assert_eq!(record.fitness_score(), 0.0);
        assert_eq!(record.decision(), UNKNOWN);
        assert_eq!(record.depot(), UNKNOWN);
        assert!(!record.is_inducted());
    }

    #[test]
    fn test_empty_labels_count_as_unknown() {
        let record = TrainRecord::new("T1", Some(80.0), Some(""), Some(""));

        assert_eq!(record.decision(), UNKNOWN);
        assert_eq!(record.depot(), UNKNOWN);
    }

    #[test]
    fn test_non_finite_score_defaults_to_zero() {
        let record = TrainRecord::new("T1", Some(f64::NAN), None, None);
        assert_eq!(record.fitness_score(), 0.0);
    }

    #[test]
    fn test_induct_is_case_sensitive() {
        assert!(TrainRecord::new("T1", None, Some("Induct"), None).is_inducted());
        assert!(!TrainRecord::new("T2", None, Some("induct"), None).is_inducted());
        assert!(!TrainRecord::new("T3", None, Some("Hold"), None).is_inducted());
    }

    #[test]
    fn test_deserialize_coerces_values() {
        let json = r#"{
            "train_id": 42,
            "fitness_score": "87.5",
            "final_decision": null,
            "depot": ["A"]
        }"#;
        let record: TrainRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.train_id(), "42");
        assert_eq!(record.fitness_score(), 87.5);
        assert_eq!(record.decision(), UNKNOWN);
        assert_eq!(record.depot(), UNKNOWN);
    }

    #[test]
    fn test_numeric_labels_follow_dashboard_printing() {
        let json = r#"[
            {"train_id": 1.0, "final_decision": false, "depot": 0},
            {"train_id": 0, "final_decision": true, "depot": 3.5},
            {"train_id": "", "depot": 7.0}
        ]"#;
        let records: Vec<TrainRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].train_id(), "1");
        assert_eq!(records[0].decision(), UNKNOWN);
        assert_eq!(records[0].depot(), UNKNOWN);

        assert_eq!(records[1].train_id(), "0");
        assert_eq!(records[1].decision(), "true");
        assert_eq!(records[1].depot(), "3.5");

        assert_eq!(records[2].train_id(), "");
        assert_eq!(records[2].depot(), "7");
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let record: TrainRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, TrainRecord::default());
    }

    #[test]
    fn test_parse_score_rejects_garbage() {
        assert_eq!(parse_score(" 91 "), Some(91.0));
        assert_eq!(parse_score("n/a"), None);
        assert_eq!(parse_score("inf"), None);
    }
}
