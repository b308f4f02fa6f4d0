//! In-memory row types for the five relations.
//!
//! Relations are immutable after load. Every derived view is a fresh
//! filtered copy; nothing in the crate mutates these rows in place.

use serde::{Deserialize, Serialize};

/// One row of `mw_overall.csv`: per-batter per-year aggregate stats.
///
/// `avg` and `sr` are optional in the source data; a missing column or an
/// empty cell both decode to `None` and the summarizer falls back
/// accordingly. Extra columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallRecord {
    pub batter: String,
    #[serde(default)]
    pub year: Option<u16>,
    pub runs: f64,
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub sr: Option<f64>,
}

/// One row of `style_based_features.csv`: per-batter per-year per-style stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRecord {
    pub batter: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub bowling_type: Option<String>,
    pub runs_scored: f64,
}

/// A relation loaded without a typed schema.
///
/// Three of the five inputs (`pw`, `pw_profiles`, `total`) are read by no
/// rendered view; they are carried exactly as loaded, pending a clarified
/// use, rather than silently dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The five relations, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub overall: Vec<OverallRecord>,
    pub pw: RawTable,
    pub pw_profiles: RawTable,
    pub style_features: Vec<StyleRecord>,
    pub total: RawTable,
}
