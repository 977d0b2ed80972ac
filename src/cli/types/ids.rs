//! ID types for the NBA stats API.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Read a numeric identifier out of a JSON cell.
///
/// The API sends ids as integers, but string and integral float forms are
/// accepted too so ids survive a trip through CSV.
pub fn numeric_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Type-safe wrapper for NBA player ids.
///
/// # Examples
///
/// ```rust
/// use nba_stats_merge::PlayerId;
///
/// let id = PlayerId::new(203999);
/// assert_eq!(id.as_u64(), 203999);
/// assert_eq!(id.to_string(), "203999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        numeric_id(value).map(Self)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for NBA team ids (e.g. `1610612747`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        numeric_id(value).map(Self)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TeamId> for Value {
    fn from(id: TeamId) -> Self {
        Value::from(id.0)
    }
}

/// Game identifier, kept as the API's zero-padded string (`0021900001`).
///
/// See [`crate::nba::game_id`] for the season information encoded in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            // Integer ids have lost their leading zeros.
            other => numeric_id(other).map(|n| Self(format!("{:010}", n))),
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

impl From<GameId> for Value {
    fn from(id: GameId) -> Self {
        Value::String(id.0)
    }
}
