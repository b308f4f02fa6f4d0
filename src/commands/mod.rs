//! Command handlers for the CLI surface.

pub mod common;
pub mod dashboard;
pub mod summary;

#[cfg(test)]
mod tests;
