use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Caller-selected answering mode. Each mode maps to one generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    #[default]
    General,
    Fast,
    Deep,
}

impl QueryMode {
    pub const ALL: [QueryMode; 3] = [Self::General, Self::Fast, Self::Deep];

    /// Parse a raw mode selector. Unknown or absent values fall back to `General`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("fast") => Self::Fast,
            Some("deep") => Self::Deep,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Fast => "fast",
            Self::Deep => "deep",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any JSON value: a string selects a mode, everything else is unrecognized.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMode {
    Text(String),
    Other(IgnoredAny),
}

// Unknown strings, null, numbers, arrays and objects all deserialize to
// `General`, never to an error.
impl<'de> Deserialize<'de> for QueryMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawMode::deserialize(deserializer)? {
            RawMode::Text(raw) => Self::parse(Some(&raw)),
            RawMode::Other(_) => Self::parse(None),
        })
    }
}
