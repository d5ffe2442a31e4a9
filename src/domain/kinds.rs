//! Shape kinds
//!
//! The closed set of shape variants a scene can be built from. Names match
//! the values of the host's shape selector.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Bubble,
    Square,
}

impl ShapeKind {
    /// Every registered kind, in selector order
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Bubble, ShapeKind::Square];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Bubble => "Bubble",
            ShapeKind::Square => "Square",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name.trim())
            .ok_or_else(|| ConfigError::UnsupportedShapeKind(name.to_string()))
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
