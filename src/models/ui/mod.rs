// UI models module
// View mode selection shared by the grid generator and the views

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Calendar view types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Week,
    #[default]
    Month,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Week => "week",
            ViewType::Month => "month",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewType::Week),
            "month" => Ok(ViewType::Month),
            other => Err(format!("Unknown view '{}' (expected 'month' or 'week')", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_month() {
        assert_eq!(ViewType::default(), ViewType::Month);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Week".parse::<ViewType>().unwrap(), ViewType::Week);
        assert_eq!(" MONTH ".parse::<ViewType>().unwrap(), ViewType::Month);
        assert!("day".parse::<ViewType>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for view in [ViewType::Week, ViewType::Month] {
            assert_eq!(view.to_string().parse::<ViewType>().unwrap(), view);
        }
    }
}
