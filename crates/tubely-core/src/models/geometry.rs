use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Coarse aspect-ratio classification used to partition video storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryCategory {
    Landscape,
    Portrait,
    /// Anything that is not close to 16:9 or 9:16, and the fallback when probing fails.
    #[default]
    Other,
}

impl GeometryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryCategory::Landscape => "landscape",
            GeometryCategory::Portrait => "portrait",
            GeometryCategory::Other => "other",
        }
    }

    /// Key prefix (with trailing slash) for objects in this category.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            GeometryCategory::Landscape => "landscape/",
            GeometryCategory::Portrait => "portrait/",
            GeometryCategory::Other => "other/",
        }
    }
}

impl Display for GeometryCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
