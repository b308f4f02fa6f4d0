//! Cricket Batting Analytics Dashboard
//!
//! Loads five pre-computed CSV tables of batting statistics, filters them by
//! batsman, year range, and bowling style, and renders KPI metrics, year-wise
//! charts, and the raw filtered rows - either in an interactive terminal
//! dashboard or as a one-shot summary for scripting.
//!
//! ## Features
//!
//! - **Memoized Data Loading**: All five relations are read once per process
//!   and served from memory afterwards
//! - **Pure Filtering**: Selections produce fresh filtered copies of the
//!   base relations, which are never mutated
//! - **KPI Summaries**: Total runs, batting average, and strike rate over
//!   any selection
//! - **Terminal Dashboard**: Sidebar selectors, line and bar charts, and a
//!   collapsible raw-data table rendered with ratatui
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_dash::commands::summary::{handle_summary, SummaryParams};
//!
//! # fn example() -> cricket_dash::Result<()> {
//! // Print KPIs for one batsman across all loaded years
//! handle_summary(SummaryParams {
//!     data_dir: None,
//!     batsman: "V Kohli".to_string(),
//!     from: None,
//!     to: None,
//!     style: None,
//!     as_json: false,
//!     verbose: false,
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the tools at a data directory to avoid passing it in every command:
//! ```bash
//! export CRICKET_DASH_DATA_DIR=/path/to/tables
//! ```

pub mod cli;
pub mod commands;
pub mod data;
pub mod error;
pub mod filters;
pub mod metrics;
pub mod tui;

// Re-export commonly used types
pub use cli::types::{BowlingStyle, Year, YearRange};
pub use data::{Dataset, OverallRecord, RawTable, StyleRecord};
pub use error::{DashError, Result};
pub use filters::Selection;
pub use metrics::Kpis;

pub const DATA_DIR_ENV_VAR: &str = "CRICKET_DASH_DATA_DIR";
