//! Pure selection filtering over the loaded relations.
//!
//! Everything here is a function of its inputs: the base relations are
//! never mutated and every call returns fresh filtered copies. An empty
//! result is a valid state meaning "no data for this selection", not an
//! error.

use crate::cli::types::{BowlingStyle, Year, YearRange};
use crate::data::{OverallRecord, StyleRecord};


/// One user selection, from the sidebar or the `summary` flags.
#[derive(Debug, Clone)]
pub struct Selection {
    pub batsman: String,
    pub years: YearRange,
    pub bowling_style: BowlingStyle,
}

/// Rows of the overall relation matching the batsman and year interval.
///
/// Rows with a missing year never match.
pub fn filter_overall(rows: &[OverallRecord], selection: &Selection) -> Vec<OverallRecord> {
    rows.iter()
        .filter(|r| r.batter == selection.batsman)
        .filter(|r| {
            r.year
                .is_some_and(|y| selection.years.contains(Year::new(y)))
        })
        .cloned()
        .collect()
}

/// Rows of the style-features relation matching the batsman, year interval,
/// and bowling style.
pub fn filter_style(rows: &[StyleRecord], selection: &Selection) -> Vec<StyleRecord> {
    rows.iter()
        .filter(|r| r.batter == selection.batsman)
        .filter(|r| {
            r.year
                .is_some_and(|y| selection.years.contains(Year::new(y)))
        })
        .filter(|r| r.bowling_type.as_deref() == Some(selection.bowling_style.as_str()))
        .cloned()
        .collect()
}

/// Sorted unique batter names across the whole overall relation.
pub fn batsmen(rows: &[OverallRecord]) -> Vec<String> {
    let mut names: Vec<String> = rows.iter().map(|r| r.batter.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Min and max non-missing year across the whole overall relation,
/// independent of any current selection. `None` when no row has a year.
pub fn year_bounds(rows: &[OverallRecord]) -> Option<YearRange> {
    let mut bounds: Option<(u16, u16)> = None;
    for year in rows.iter().filter_map(|r| r.year) {
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(year), hi.max(year)),
            None => (year, year),
        });
    }
    bounds.map(|(lo, hi)| YearRange {
        start: Year::new(lo),
        end: Year::new(hi),
    })
}

/// Sorted unique non-missing bowling styles across the style relation.
pub fn bowling_styles(rows: &[StyleRecord]) -> Vec<BowlingStyle> {
    let mut styles: Vec<String> = rows
        .iter()
        .filter_map(|r| r.bowling_type.clone())
        .collect();
    styles.sort();
    styles.dedup();
    styles.into_iter().map(BowlingStyle::new).collect()
}
