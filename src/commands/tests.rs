//! Unit tests for command context construction

use super::common::CommandContext;
use crate::{
    cli::types::Year,
    data::{Dataset, OverallRecord, RawTable, StyleRecord},
    error::DashError,
};

fn leak(dataset: Dataset) -> &'static Dataset {
    Box::leak(Box::new(dataset))
}

fn sample_dataset() -> Dataset {
    Dataset {
        overall: vec![
            OverallRecord {
                batter: "B Batsman".to_string(),
                year: Some(2021),
                runs: 70.0,
                avg: None,
                sr: None,
            },
            OverallRecord {
                batter: "A Batsman".to_string(),
                year: Some(2019),
                runs: 50.0,
                avg: Some(25.0),
                sr: Some(120.0),
            },
        ],
        pw: RawTable::default(),
        pw_profiles: RawTable::default(),
        style_features: vec![StyleRecord {
            batter: "A Batsman".to_string(),
            year: Some(2019),
            bowling_type: Some("Pace".to_string()),
            runs_scored: 30.0,
        }],
        total: RawTable::default(),
    }
}

#[test]
fn test_context_builds_sorted_domains() {
    let ctx = CommandContext::from_dataset(leak(sample_dataset())).unwrap();

    assert_eq!(ctx.domains.batsmen, vec!["A Batsman", "B Batsman"]);
    assert_eq!(ctx.domains.years.start, Year::new(2019));
    assert_eq!(ctx.domains.years.end, Year::new(2021));
    assert_eq!(ctx.domains.styles.len(), 1);
}

#[test]
fn test_context_rejects_dataset_without_batters() {
    let mut dataset = sample_dataset();
    dataset.overall.clear();

    let result = CommandContext::from_dataset(leak(dataset));
    assert!(matches!(
        result,
        Err(DashError::EmptyDomain {
            name: "overall",
            column: "batter"
        })
    ));
}

#[test]
fn test_context_rejects_dataset_without_years() {
    let mut dataset = sample_dataset();
    for row in &mut dataset.overall {
        row.year = None;
    }

    let result = CommandContext::from_dataset(leak(dataset));
    assert!(matches!(
        result,
        Err(DashError::EmptyDomain {
            name: "overall",
            column: "year"
        })
    ));
}
