//! End-to-end tests of the load -> filter -> summarize pipeline

use std::fs;
use std::path::Path;

use cricket_dash::{
    data::load_dataset,
    filters::{self, Selection},
    metrics, BowlingStyle, Year, YearRange,
};
use tempfile::TempDir;

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        "mw_overall.csv",
        "batter,year,runs,avg,sr\n\
         A,2020,50,,\n\
         A,2021,70,,\n\
         B,2020,10,,\n",
    );
    write_fixture(dir.path(), "mw_pw.csv", "batter,bowler\nA,X\n");
    write_fixture(dir.path(), "mw_pw_profiles.csv", "bowler,profile\nX,fast\n");
    write_fixture(
        dir.path(),
        "style_based_features.csv",
        "batter,year,bowling_type,runs_scored\n\
         A,2020,Pace,30\n\
         A,2021,Pace,45\n\
         A,2021,Spin,25\n",
    );
    write_fixture(dir.path(), "total_data.csv", "batter,total\nA,120\n");
    dir
}

fn selection(batsman: &str, from: u16, to: u16, style: &str) -> Selection {
    Selection {
        batsman: batsman.to_string(),
        years: YearRange::new(Year::new(from), Year::new(to)).unwrap(),
        bowling_style: BowlingStyle::new(style),
    }
}

#[test]
fn test_two_seasons_sum_to_120_runs() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    let filtered = filters::filter_overall(&dataset.overall, &selection("A", 2020, 2021, ""));
    assert_eq!(filtered.len(), 2);

    let kpis = metrics::summarize(&filtered).unwrap();
    assert_eq!(kpis.total_runs, 120);
    // No avg column values: fallback average is runs over row count.
    assert_eq!(kpis.average, 60.0);
    assert_eq!(kpis.strike_rate, 0.0);
}

#[test]
fn test_style_breakdown_through_the_pipeline() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    let pace = filters::filter_style(
        &dataset.style_features,
        &selection("A", 2020, 2021, "Pace"),
    );
    assert_eq!(pace.len(), 2);

    let spin = filters::filter_style(
        &dataset.style_features,
        &selection("A", 2020, 2021, "Spin"),
    );
    assert_eq!(spin.len(), 1);
    assert_eq!(spin[0].runs_scored, 25.0);
}

#[test]
fn test_empty_selection_skips_metrics() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    let filtered = filters::filter_overall(&dataset.overall, &selection("A", 1990, 1999, ""));
    assert!(filtered.is_empty());
    assert!(metrics::summarize(&filtered).is_none());
}

#[test]
fn test_selector_domains_cover_whole_relations() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(filters::batsmen(&dataset.overall), vec!["A", "B"]);

    let bounds = filters::year_bounds(&dataset.overall).unwrap();
    assert_eq!(bounds.start, Year::new(2020));
    assert_eq!(bounds.end, Year::new(2021));

    let styles = filters::bowling_styles(&dataset.style_features);
    assert_eq!(
        styles,
        vec![BowlingStyle::new("Pace"), BowlingStyle::new("Spin")]
    );
}

#[test]
fn test_unused_relations_are_still_loaded() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.pw.len(), 1);
    assert_eq!(dataset.pw_profiles.len(), 1);
    assert_eq!(dataset.total.len(), 1);
    assert_eq!(dataset.total.headers, vec!["batter", "total"]);
}
