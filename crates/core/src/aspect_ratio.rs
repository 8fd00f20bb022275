//! Video aspect ratios offered by the metadata dialog and the video settings panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three fixed aspect ratios a project can be rendered in.
///
/// Stored in `video_projects.aspect_ratio` as its textual form (`"16:9"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

/// All aspect ratios in the order the dialog presents them.
pub const ALL_ASPECT_RATIOS: [AspectRatio; 3] = [
    AspectRatio::Landscape,
    AspectRatio::Portrait,
    AspectRatio::Square,
];

impl AspectRatio {
    /// Convert to the database-compatible string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Square => "1:1",
        }
    }

    /// Human-readable label shown under the ratio.
    pub fn label(self) -> &'static str {
        match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
            Self::Square => "Square",
        }
    }
}

impl FromStr for AspectRatio {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(Self::Landscape),
            "9:16" => Ok(Self::Portrait),
            "1:1" => Ok(Self::Square),
            other => Err(CoreError::Validation(format!(
                "Invalid aspect ratio '{other}'. Must be one of: 16:9, 9:16, 1:1"
            ))),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
