//! Calendar-day scoping key.
//!
//! # Responsibility
//! - Validate and carry ISO `YYYY-MM-DD` day stamps.
//!
//! # Invariants
//! - A constructed `DayStamp` always holds a syntactically valid calendar
//!   date string with in-range month and day components.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static DAY_STAMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid day stamp regex"));

/// Error for inputs that do not form a calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStampError {
    input: String,
}

impl Display for DayStampError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid day stamp `{}`; expected YYYY-MM-DD", self.input)
    }
}

impl Error for DayStampError {}

/// ISO calendar-date string (`YYYY-MM-DD`).
///
/// The sole scoping key for day-based task queries. The selected day itself
/// comes from a calendar collaborator outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayStamp(String);

impl DayStamp {
    /// Parses a trimmed `YYYY-MM-DD` string into a day stamp.
    ///
    /// # Errors
    /// - Returns `DayStampError` when the shape does not match or the month
    ///   or day component is out of range.
    pub fn parse(input: &str) -> Result<Self, DayStampError> {
        let trimmed = input.trim();
        let reject = || DayStampError {
            input: input.to_string(),
        };

        let caps = DAY_STAMP_RE.captures(trimmed).ok_or_else(|| reject())?;
        let month: u32 = caps[2].parse().map_err(|_| reject())?;
        let day: u32 = caps[3].parse().map_err(|_| reject())?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(reject());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the stamp as its canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DayStamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DayStamp {
    type Err = DayStampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DayStamp {
    type Error = DayStampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DayStamp> for String {
    fn from(value: DayStamp) -> Self {
        value.0
    }
}
