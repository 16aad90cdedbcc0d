// src/store.rs
//! Read-through cache of normalized tables.
//!
//! A cache file is a plain CSV (header row + values) named after the input
//! file and the SHA-256 of its bytes, so an edited export never picks up a
//! stale table. A cache that exists is trusted as already normalized.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::consts::{CACHE_ID_LEN, CACHE_SUFFIX};
use crate::core::sanitize::sanitize_file_stem;
use crate::error::{Error, LoadError, Result};
use crate::file::ensure_directory;
use crate::normalize::type_columns;
use crate::table::StaffTable;

/// First `CACHE_ID_LEN` hex digits of the SHA-256 of `raw`.
pub fn content_id(raw: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(raw));
    digest[..CACHE_ID_LEN].to_string()
}

/// `<dir>/<input stem>_<content id>_cleaned.csv`
pub fn cache_path(dir: &Path, input: &Path, raw: &[u8]) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| sanitize_file_stem(&s.to_string_lossy()))
        .unwrap_or_else(|| s!("staff"));
    dir.join(join!(&stem, "_", &content_id(raw), CACHE_SUFFIX))
}

pub fn save_table(path: &Path, table: &StaffTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let wrap = |source| Error::Csv { path: path.to_path_buf(), source };
    let mut w = csv::Writer::from_path(path).map_err(wrap)?;
    w.write_record(table.headers()).map_err(wrap)?;
    for row in 0..table.len() {
        let record: Vec<String> = (0..table.columns().len())
            .map(|c| table.value(row, c).to_string())
            .collect();
        w.write_record(&record).map_err(wrap)?;
    }
    w.flush().map_err(|source| Error::Write { path: path.to_path_buf(), source })?;

    debug!("Cache: wrote {} rows → {}", table.len(), path.display());
    Ok(())
}

/// Load a cached table back into the same typed schema fresh
/// normalization produces.
pub fn load_table(path: &Path) -> Result<StaffTable> {
    let wrap = |source| LoadError::Cache { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(wrap)?;

    let headers: Vec<String> = rdr.headers().map_err(wrap)?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(wrap)?;
        rows.push(record.iter().map(String::from).collect::<Vec<_>>());
    }

    type_columns(headers, rows).map_err(|source| Error::Normalization {
        path: path.to_path_buf(),
        source,
    })
}
