//! Type-safe wrappers for the selection dimensions.

pub mod style;
pub mod time;

pub use style::BowlingStyle;
pub use time::{Year, YearRange};
