//! Output formatting and export for dashboard data.
//!
//! Supports pretty-printing and JSON export, optionally gzipped.

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use tracing::{debug, info};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Logs any value using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Writes a value to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Writes a value as JSON to `path`, gzip-compressed when `gzip` is set.
///
/// Parent directories are created as needed.
pub fn write_json<T: Serialize>(path: &str, value: &T, gzip: bool) -> Result<()> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }

    let body = serde_json::to_vec_pretty(value)?;
    let file = File::create(path).with_context(|| format!("failed to create '{path}'"))?;

    if gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(&body)?;
        encoder.finish()?;
    } else {
        let mut file = file;
        file.write_all(&body)?;
    }

    info!(path, bytes = body.len(), gzip, "Wrote dashboard JSON");
    Ok(())
}
