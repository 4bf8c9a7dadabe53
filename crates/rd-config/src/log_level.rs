use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Log level filter that never fails to load: unknown names and non-string
/// values fall back to the default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLevel")]
pub struct LogLevel(pub LevelFilter);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Name(String),
    Other(IgnoredAny),
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl From<RawLevel> for LogLevel {
    fn from(raw: RawLevel) -> Self {
        match raw {
            RawLevel::Name(name) => name.parse().unwrap_or_default(),
            RawLevel::Other(_) => LogLevel::default(),
        }
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    /// Case-insensitive level name, as accepted by `log`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LevelFilter::from_str(s.trim())
            .map(LogLevel)
            .unwrap_or_default())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
