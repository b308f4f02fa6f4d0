//! Bowling style classification.
//!
//! Styles are free-form categorical values taken from the style-features
//! relation (e.g. "Right arm Fast", "Left arm Orthodox"), so this is a
//! string newtype rather than a closed enum.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Categorical classification of opposing bowlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BowlingStyle(String);

impl BowlingStyle {
    pub fn new(style: impl Into<String>) -> Self {
        Self(style.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BowlingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BowlingStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for BowlingStyle {
    fn from(style: String) -> Self {
        Self(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_from_str() {
        let style: BowlingStyle = "Right arm Fast".parse().unwrap();
        assert_eq!(style.as_str(), "Right arm Fast");
        assert_eq!(style.to_string(), "Right arm Fast");
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(BowlingStyle::default().as_str(), "");
    }
}
