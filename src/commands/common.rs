//! Shared context built by every command before doing its work.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    cli::types::{BowlingStyle, YearRange},
    data::{self, Dataset},
    error::{DashError, Result},
    filters,
};

/// Selector domains derived once from the full relations.
///
/// Year bounds span the whole overall relation, independent of whatever
/// batsman or style is currently selected.
#[derive(Debug, Clone)]
pub struct SelectorDomains {
    pub batsmen: Vec<String>,
    pub years: YearRange,
    pub styles: Vec<BowlingStyle>,
}

/// Context containing the loaded dataset and its selector domains.
pub struct CommandContext {
    pub dataset: &'static Dataset,
    pub domains: SelectorDomains,
}

impl CommandContext {
    /// Load (or reuse) the process-wide dataset and derive selector domains.
    pub fn new(data_dir: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let dir = data::resolve_data_dir(data_dir);
        if verbose {
            println!("Loading tables from {}...", dir.display());
        }
        let dataset = data::dataset(&dir)?;
        Self::from_dataset(dataset)
    }

    /// Derive selector domains from an already-loaded dataset.
    pub fn from_dataset(dataset: &'static Dataset) -> Result<Self> {
        let batsmen = filters::batsmen(&dataset.overall);
        if batsmen.is_empty() {
            return Err(DashError::EmptyDomain {
                name: "overall",
                column: "batter",
            });
        }
        let years = filters::year_bounds(&dataset.overall).ok_or(DashError::EmptyDomain {
            name: "overall",
            column: "year",
        })?;
        let styles = filters::bowling_styles(&dataset.style_features);

        debug!(
            batsmen = batsmen.len(),
            styles = styles.len(),
            years = %years,
            "selector domains ready"
        );

        Ok(Self {
            dataset,
            domains: SelectorDomains {
                batsmen,
                years,
                styles,
            },
        })
    }
}
