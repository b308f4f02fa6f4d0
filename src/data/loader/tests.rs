//! Unit tests for CSV loading

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// A minimal but complete data directory.
fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        OVERALL_FILE,
        "batter,year,runs,avg,sr\n\
         A Batsman,2020,50,25.0,130.5\n\
         A Batsman,2021,70,,\n\
         B Batsman,2020,10,10.0,95.0\n",
    );
    write_fixture(dir.path(), PW_FILE, "batter,bowler,balls\nA Batsman,X Bowler,24\n");
    write_fixture(
        dir.path(),
        PW_PROFILES_FILE,
        "bowler,profile\nX Bowler,aggressive\n",
    );
    write_fixture(
        dir.path(),
        STYLE_FEATURES_FILE,
        "batter,year,bowling_type,runs_scored\n\
         A Batsman,2020,Right arm Fast,30\n\
         A Batsman,2021,Left arm Orthodox,40\n",
    );
    write_fixture(dir.path(), TOTAL_FILE, "batter,total\nA Batsman,120\n");
    dir
}

#[test]
fn test_load_dataset_reads_all_five_relations() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.overall.len(), 3);
    assert_eq!(dataset.style_features.len(), 2);
    assert_eq!(dataset.pw.len(), 1);
    assert_eq!(dataset.pw_profiles.len(), 1);
    assert_eq!(dataset.total.len(), 1);
}

#[test]
fn test_typed_rows_decode_optional_columns() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    let first = &dataset.overall[0];
    assert_eq!(first.batter, "A Batsman");
    assert_eq!(first.year, Some(2020));
    assert_eq!(first.runs, 50.0);
    assert_eq!(first.avg, Some(25.0));
    assert_eq!(first.sr, Some(130.5));

    // Empty cells decode to None
    let second = &dataset.overall[1];
    assert_eq!(second.avg, None);
    assert_eq!(second.sr, None);
}

#[test]
fn test_missing_avg_and_sr_columns_default_to_none() {
    let dir = fixture_dir();
    write_fixture(
        dir.path(),
        OVERALL_FILE,
        "batter,year,runs\nA Batsman,2020,50\n",
    );
    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.overall[0].avg, None);
    assert_eq!(dataset.overall[0].sr, None);
}

#[test]
fn test_missing_year_cell_decodes_to_none() {
    let dir = fixture_dir();
    write_fixture(
        dir.path(),
        OVERALL_FILE,
        "batter,year,runs,avg,sr\nA Batsman,,50,25.0,130.5\n",
    );
    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.overall[0].year, None);
}

#[test]
fn test_raw_table_preserves_headers_and_shape() {
    let dir = fixture_dir();
    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.pw.headers, vec!["batter", "bowler", "balls"]);
    assert_eq!(dataset.pw.rows[0], vec!["A Batsman", "X Bowler", "24"]);
    assert!(!dataset.pw.is_empty());
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = fixture_dir();
    fs::remove_file(dir.path().join(TOTAL_FILE)).unwrap();

    let result = load_dataset(dir.path());
    match result {
        Err(DashError::Load { path, .. }) => {
            assert!(path.ends_with(TOTAL_FILE));
        }
        other => panic!("Expected Load error, got {other:?}"),
    }
}

#[test]
fn test_malformed_numeric_cell_is_a_load_error() {
    let dir = fixture_dir();
    write_fixture(
        dir.path(),
        OVERALL_FILE,
        "batter,year,runs,avg,sr\nA Batsman,2020,not-a-number,,\n",
    );

    let result = load_dataset(dir.path());
    match result {
        Err(DashError::Load { path, .. }) => {
            assert!(path.ends_with(OVERALL_FILE));
        }
        other => panic!("Expected Load error, got {other:?}"),
    }
}

#[test]
fn test_dataset_is_memoized_for_the_process() {
    let dir = fixture_dir();

    let first = dataset(dir.path()).unwrap();
    // Second call ignores its argument entirely; even a bogus path returns
    // the already-loaded relations.
    let second = dataset(Path::new("/nonexistent")).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.overall.len(), 3);
}
