//! Board type discriminator
//!
//! Selects the concrete board variant, the creation strategy that builds it,
//! and the channel the board is filed under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of board types that can be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoardType {
    /// Board posted inside a league
    League,
    /// Vehicle profile board
    MyCar,
    /// Dash camera footage board
    Dashcam,
}

impl BoardType {
    /// Every board type, in registration order
    pub const ALL: [BoardType; 3] = [Self::League, Self::MyCar, Self::Dashcam];

    /// Wire/database tag
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::League => "LEAGUE",
            Self::MyCar => "MYCAR",
            Self::Dashcam => "DASHCAM",
        }
    }

    /// Name of the channel boards of this type are filed under
    #[must_use]
    pub fn channel_name(self) -> &'static str {
        match self {
            Self::League => "리그",
            Self::MyCar => "내 차 자랑",
            Self::Dashcam => "블랙박스",
        }
    }

    /// Parse the wire tag, accepting any casing
    pub fn parse(s: &str) -> Result<Self, BoardTypeParseError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEAGUE" => Ok(Self::League),
            "MYCAR" | "MY_CAR" => Ok(Self::MyCar),
            "DASHCAM" => Ok(Self::Dashcam),
            _ => Err(BoardTypeParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoardType {
    type Err = BoardTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardType::parse(s)
    }
}

/// Error when parsing a board type tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardTypeParseError {
    #[error("unknown board type: {0}")]
    Unknown(String),
}
