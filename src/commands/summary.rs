//! One-shot KPI summary without the interactive dashboard.
//!
//! Runs the same load, filter, summarize pipeline the dashboard runs on
//! every key press, then prints the result once as text lines or JSON.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use super::common::CommandContext;
use crate::{
    cli::types::{BowlingStyle, Year, YearRange},
    data::{OverallRecord, StyleRecord},
    error::Result,
    filters::{self, Selection},
    metrics::{self, Kpis},
};

/// Parameters for the `summary` subcommand.
pub struct SummaryParams {
    pub data_dir: Option<PathBuf>,
    pub batsman: String,
    pub from: Option<Year>,
    pub to: Option<Year>,
    pub style: Option<BowlingStyle>,
    pub as_json: bool,
    pub verbose: bool,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    batsman: &'a str,
    from: Year,
    to: Year,
    #[serde(skip_serializing_if = "Option::is_none")]
    bowling_style: Option<&'a str>,
    kpis: Option<Kpis>,
    rows: &'a [OverallRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    style_rows: Option<&'a [StyleRecord]>,
}

pub fn handle_summary(params: SummaryParams) -> Result<()> {
    let ctx = CommandContext::new(params.data_dir, params.verbose)?;

    let from = params.from.unwrap_or(ctx.domains.years.start);
    let to = params.to.unwrap_or(ctx.domains.years.end);
    let selection = Selection {
        batsman: params.batsman,
        years: YearRange::new(from, to)?,
        bowling_style: params.style.clone().unwrap_or_default(),
    };

    let overall_filtered = filters::filter_overall(&ctx.dataset.overall, &selection);
    let style_filtered = params
        .style
        .as_ref()
        .map(|_| filters::filter_style(&ctx.dataset.style_features, &selection));
    let kpis = metrics::summarize(&overall_filtered);

    info!(
        batsman = %selection.batsman,
        rows = overall_filtered.len(),
        "summary pass complete"
    );

    if params.as_json {
        let output = SummaryOutput {
            batsman: &selection.batsman,
            from,
            to,
            bowling_style: params.style.as_ref().map(BowlingStyle::as_str),
            kpis,
            rows: &overall_filtered,
            style_rows: style_filtered.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match kpis {
        Some(kpis) => {
            println!("{} ({}-{})", selection.batsman, from, to);
            println!("Total Runs:  {}", kpis.total_runs);
            println!("Average:     {:.2}", kpis.average);
            println!("Strike Rate: {:.2}", kpis.strike_rate);
        }
        None => println!("No data available for selected filters."),
    }

    if let Some(style) = &params.style {
        let style_rows = style_filtered.unwrap_or_default();
        if style_rows.is_empty() {
            println!("No style-wise data to display for {}.", style);
        } else {
            println!();
            println!("vs {} bowling:", style);
            for row in &style_rows {
                if let Some(year) = row.year {
                    println!("  {}: {} runs", year, row.runs_scored);
                }
            }
        }
    }

    Ok(())
}
