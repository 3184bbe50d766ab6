use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RangeError;

/// En-dash, the only accepted separator between inclusive bounds.
pub const RANGE_SEPARATOR: char = '–';

/// Parsed form of an interpretation range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeToken {
    /// `"a–b"`, both ends inclusive.
    Between { min: u32, max: u32 },
    /// `"a+"`
    AtLeast { min: u32 },
    /// bare `"a"`
    Exactly { value: u32 },
}

impl RangeToken {
    pub fn parse(token: &str) -> Result<Self, RangeError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(RangeError::Empty);
        }

        if let Some((lo, hi)) = token.split_once(RANGE_SEPARATOR) {
            let min = parse_bound(token, lo)?;
            let max = parse_bound(token, hi)?;
            if min > max {
                return Err(RangeError::Inverted {
                    token: token.to_string(),
                    min,
                    max,
                });
            }
            return Ok(RangeToken::Between { min, max });
        }

        if let Some(lo) = token.strip_suffix('+') {
            let min = parse_bound(token, lo)?;
            return Ok(RangeToken::AtLeast { min });
        }

        let value = parse_bound(token, token)?;
        Ok(RangeToken::Exactly { value })
    }

    pub fn contains(&self, score: u32) -> bool {
        match *self {
            RangeToken::Between { min, max } => min <= score && score <= max,
            RangeToken::AtLeast { min } => score >= min,
            RangeToken::Exactly { value } => score == value,
        }
    }
}

impl FromStr for RangeToken {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeToken::parse(s)
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeToken::Between { min, max } => write!(f, "{min}{RANGE_SEPARATOR}{max}"),
            RangeToken::AtLeast { min } => write!(f, "{min}+"),
            RangeToken::Exactly { value } => write!(f, "{value}"),
        }
    }
}

fn parse_bound(token: &str, part: &str) -> Result<u32, RangeError> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::NotAnInteger(token.to_string()));
    }
    part.parse::<u32>()
        .map_err(|_| RangeError::NotAnInteger(token.to_string()))
}

/// Whether `score` falls inside the range written as `token`.
pub fn check_score_range(token: &str, score: u32) -> Result<bool, RangeError> {
    Ok(RangeToken::parse(token)?.contains(score))
}

#[cfg(test)]
#[path = "../../tests/src_inline/instruments/range.rs"]
mod tests;
