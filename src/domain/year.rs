//! Year - Supported Imagery Year

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_YEAR, MIN_YEAR};
use crate::error::{Error, Result};

/// A calendar year with night-light imagery available (2012-2023)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Year(u16);

impl Year {
    pub const MIN: Year = Year(MIN_YEAR);
    pub const MAX: Year = Year(MAX_YEAR);

    /// Validate a raw year against the supported range
    pub fn new(year: i64) -> Result<Self> {
        if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            Ok(Self(year as u16))
        } else {
            Err(Error::InvalidYear {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            })
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// All supported years, newest first (selector order)
    pub fn all_descending() -> impl Iterator<Item = Year> {
        (MIN_YEAR..=MAX_YEAR).rev().map(Year)
    }
}

impl TryFrom<i64> for Year {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Year::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl FromStr for Year {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw: i64 = s.trim().parse().map_err(|_| Error::Invalid {
            message: format!("not a year: {s:?}"),
        })?;
        Year::new(raw)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
