//! Parsing modes shared between the parser and the settings layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How coordinate words behave across program lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// X, Y and Z start from 0 on every line
    #[default]
    Reset,
    /// Omitted X, Y and Z keep the previous line's value
    Modal,
}

impl fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => write!(f, "reset"),
            Self::Modal => write!(f, "modal"),
        }
    }
}

impl FromStr for CoordinateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "modal" => Ok(Self::Modal),
            _ => Err(format!("Unknown coordinate mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("Modal".parse::<CoordinateMode>(), Ok(CoordinateMode::Modal));
        assert_eq!("reset".parse::<CoordinateMode>(), Ok(CoordinateMode::Reset));
        assert!("sticky".parse::<CoordinateMode>().is_err());
    }

    #[test]
    fn test_display_matches_from_str() {
        for mode in [CoordinateMode::Reset, CoordinateMode::Modal] {
            assert_eq!(mode.to_string().parse::<CoordinateMode>(), Ok(mode));
        }
    }
}
