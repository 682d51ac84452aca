//! Decoding of train record payloads.
//!
//! Records are coerced rather than validated: a field of the wrong type is
//! treated as missing. Only a payload that is not JSON (or CSV) at all is an
//! error.

use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::records::{TrainRecord, parse_score};

/// Decodes a JSON payload: either an array of records or an object with a
/// `trains` array.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or have neither shape.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<TrainRecord>> {
    let value: Value = serde_json::from_slice(bytes)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("trains") {
            Some(Value::Array(items)) => items,
            _ => bail!("expected a JSON array of trains or an object with a `trains` array"),
        },
        _ => bail!("expected a JSON array of trains or an object with a `trains` array"),
    };

    let records: Vec<TrainRecord> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).ok(),
            _ => None,
        })
        .collect();

    debug!(records = records.len(), "Parsed JSON train records");
    Ok(records)
}

/// Raw CSV row; every cell may be empty.
#[derive(Debug, Deserialize)]
struct CsvRow {
    train_id: Option<String>,
    fitness_score: Option<String>,
    final_decision: Option<String>,
    depot: Option<String>,
}

impl From<CsvRow> for TrainRecord {
    fn from(row: CsvRow) -> Self {
        TrainRecord {
            train_id: row.train_id,
            fitness_score: row.fitness_score.as_deref().and_then(parse_score),
            final_decision: row.final_decision,
            depot: row.depot,
        }
    }
}

/// Decodes a CSV payload with a `train_id,fitness_score,final_decision,depot`
/// header. Column order does not matter; missing columns read as empty.
pub fn parse_csv_records(bytes: &[u8]) -> Result<Vec<TrainRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let row: CsvRow = result?;
        records.push(TrainRecord::from(row));
    }

    debug!(records = records.len(), "Parsed CSV train records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        let records = parse_records(b"[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_invalid_bytes() {
        assert!(parse_records(&[0xFF, 0xFE, 0x00, 0x01]).is_err());
        assert!(parse_records(b"42").is_err());
        assert!(parse_records(br#"{"rows": []}"#).is_err());
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = br#"{"trains": [{"train_id": "T1", "fitness_score": 91}]}"#;
        let records = parse_records(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fitness_score(), 91.0);
    }

    #[test]
    fn test_parse_coerces_fields() {
        let json = br#"[
            {"train_id": "T1", "fitness_score": 95, "final_decision": "Induct", "depot": "A"},
            {"train_id": "T2", "fitness_score": "72", "final_decision": "Hold", "depot": null},
            {"train_id": "T3", "fitness_score": null, "final_decision": ["x"]},
            "not a record"
        ]"#;
        let records = parse_records(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].fitness_score(), 72.0);
        assert_eq!(records[1].depot(), "Unknown");
        assert_eq!(records[2].fitness_score(), 0.0);
        assert_eq!(records[2].decision(), "Unknown");
    }

    #[test]
    fn test_parse_csv_records() {
        let csv = b"train_id,fitness_score,final_decision,depot\n\
                    T1,95,Induct,A\n\
                    T2,,Hold,\n\
                    T3,abc,,B\n";
        let records = parse_csv_records(csv).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].fitness_score(), 95.0);
        assert_eq!(records[1].fitness_score(), 0.0);
        assert_eq!(records[1].depot(), "Unknown");
        assert_eq!(records[2].fitness_score(), 0.0);
        assert_eq!(records[2].decision(), "Unknown");
        assert_eq!(records[2].depot(), "B");
    }

    #[test]
    fn test_parse_csv_header_only() {
        let records = parse_csv_records(b"train_id,fitness_score,final_decision,depot\n").unwrap();
        assert!(records.is_empty());
    }
}
