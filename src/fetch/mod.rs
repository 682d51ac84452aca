//! Loading train records from a local file or the fleet API.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, bail};
use reqwest::header::{ACCEPT, HeaderValue};
use std::path::Path;
use tracing::debug;

use crate::parser::{parse_csv_records, parse_records};
use crate::records::TrainRecord;

/// GETs `url` through `client` and returns the body.
///
/// Non-success statuses are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let mut req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);
    req.headers_mut()
        .insert(ACCEPT, HeaderValue::from_static("application/json, text/csv"));

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("request to {url} failed with status {status}: {body}");
    }

    let bytes = resp.bytes().await?.to_vec();
    debug!(bytes = bytes.len(), "Fetched record payload");
    Ok(bytes)
}

/// Payload format, picked from the source's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn detect(source: &str) -> Self {
        let path = source.split(['?', '#']).next().unwrap_or(source);
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Csv,
            _ => Format::Json,
        }
    }

    pub fn parse(self, bytes: &[u8]) -> Result<Vec<TrainRecord>> {
        match self {
            Format::Json => parse_records(bytes),
            Format::Csv => parse_csv_records(bytes),
        }
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads records from a local path or an `http(s)` URL. `token`, when set,
/// is sent as a bearer token on remote requests.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn load_records(source: &str, token: Option<&str>) -> Result<Vec<TrainRecord>> {
    let bytes = if is_remote(source) {
        let client = BasicClient::new()?;
        match token {
            Some(token) => fetch_bytes(&auth::ApiKey::bearer(client, token)?, source).await?,
            None => fetch_bytes(&client, source).await?,
        }
    } else {
        std::fs::read(source).with_context(|| format!("failed to read '{source}'"))?
    };

    Format::detect(source)
        .parse(&bytes)
        .with_context(|| format!("failed to parse records from '{source}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(Format::detect("fleet.csv"), Format::Csv);
        assert_eq!(Format::detect("FLEET.CSV"), Format::Csv);
        assert_eq!(Format::detect("https://api.example.com/trains.csv?day=1"), Format::Csv);
        assert_eq!(Format::detect("fleet.json"), Format::Json);
        assert_eq!(Format::detect("https://api.example.com/trains"), Format::Json);
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://api.example.com/trains"));
        assert!(is_remote("http://localhost:8000/api/trains"));
        assert!(!is_remote("data/fleet.json"));
    }

    #[tokio::test]
    async fn test_load_local_json() {
        let path = std::env::temp_dir().join("fleet_charts_test_load.json");
        std::fs::write(&path, br#"[{"train_id": "T1", "fitness_score": 88}]"#).unwrap();

        let records = load_records(path.to_str().unwrap(), None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fitness_score(), 88.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        assert!(load_records("/nonexistent/fleet.json", None).await.is_err());
    }
}
