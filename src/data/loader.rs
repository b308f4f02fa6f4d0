//! One-shot CSV loading with process-lifetime memoization.
//!
//! The first call to [`dataset`] reads the five tables from disk; every
//! later call returns the same in-memory relations without touching the
//! filesystem. A missing or malformed file is fatal - the application
//! cannot proceed without its data.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use tracing::info;

use super::tables::{Dataset, RawTable};
use crate::error::{DashError, Result};

#[cfg(test)]
mod tests;

pub const OVERALL_FILE: &str = "mw_overall.csv";
pub const PW_FILE: &str = "mw_pw.csv";
pub const PW_PROFILES_FILE: &str = "mw_pw_profiles.csv";
pub const STYLE_FEATURES_FILE: &str = "style_based_features.csv";
pub const TOTAL_FILE: &str = "total_data.csv";

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Resolve the data directory: explicit flag, then the
/// `CRICKET_DASH_DATA_DIR` env var, then the working directory.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(crate::DATA_DIR_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load all five relations from `dir`, memoized for the process lifetime.
///
/// Only the first call reads the files; the directory passed to later calls
/// is ignored.
pub fn dataset(dir: &Path) -> Result<&'static Dataset> {
    DATASET.get_or_try_init(|| load_dataset(dir))
}

/// Read all five relations from `dir` without memoization.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let overall = read_typed(dir.join(OVERALL_FILE))?;
    let pw = read_raw(dir.join(PW_FILE))?;
    let pw_profiles = read_raw(dir.join(PW_PROFILES_FILE))?;
    let style_features = read_typed(dir.join(STYLE_FEATURES_FILE))?;
    let total = read_raw(dir.join(TOTAL_FILE))?;

    info!(
        overall_rows = overall.len(),
        style_rows = style_features.len(),
        dir = %dir.display(),
        "loaded dataset"
    );

    Ok(Dataset {
        overall,
        pw,
        pw_profiles,
        style_features,
        total,
    })
}

fn load_err(path: &Path) -> impl FnOnce(csv::Error) -> DashError + '_ {
    move |source| DashError::Load {
        path: path.to_path_buf(),
        source,
    }
}

fn read_typed<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(&path).map_err(load_err(&path))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(load_err(&path))?);
    }
    Ok(rows)
}

/// Read a relation whose schema is unspecified: headers plus string rows.
/// Ragged rows are tolerated here since nothing downstream types them.
fn read_raw(path: PathBuf) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&path)
        .map_err(load_err(&path))?;

    let headers = reader
        .headers()
        .map_err(load_err(&path))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(load_err(&path))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}
