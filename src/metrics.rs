//! KPI aggregation over a filtered overall selection.

use serde::Serialize;

use crate::data::OverallRecord;


/// The three dashboard KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub total_runs: i64,
    pub average: f64,
    pub strike_rate: f64,
}

/// Summarize a filtered overall selection.
///
/// Returns `None` for an empty selection; callers show a "no data" notice
/// instead of metrics. When every `avg` value is missing, the average falls
/// back to total runs over the row count, with the divisor floored at one.
/// A fully missing `sr` column yields a strike rate of zero.
pub fn summarize(rows: &[OverallRecord]) -> Option<Kpis> {
    if rows.is_empty() {
        return None;
    }

    let total_runs = rows.iter().map(|r| r.runs).sum::<f64>() as i64;
    let average = mean(rows.iter().filter_map(|r| r.avg))
        .unwrap_or_else(|| total_runs as f64 / rows.len().max(1) as f64);
    let strike_rate = mean(rows.iter().filter_map(|r| r.sr)).unwrap_or(0.0);

    Some(Kpis {
        total_runs,
        average,
        strike_rate,
    })
}

/// Mean of the yielded values; `None` when the iterator is empty.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
