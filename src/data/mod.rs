//! Loading and in-memory representation of the five CSV relations.

pub mod loader;
pub mod tables;

pub use loader::{dataset, load_dataset, resolve_data_dir};
pub use tables::{Dataset, OverallRecord, RawTable, StyleRecord};
