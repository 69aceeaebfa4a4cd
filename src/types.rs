use crate::ValidationError;
use crate::consts::{
    CENTURY_CYCLE, CENTURY_OFFSET_1900, CENTURY_OFFSET_2000, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_CENTURY_DIGIT, MAX_MONTH,
    MIN_CENTURY_DIGIT, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A birth date decoded from the first six digits of an IIN, guaranteed to
/// be a real calendar date (leap years honored).
///
/// The year is the resolved 4-digit year when the century digit defines an
/// offset; for the reserved century digits 5 and 6 it is the raw 2-digit
/// year taken at face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct BirthDate {
    year: u16,
    month: u8,
    day: u8,
}

impl BirthDate {
    /// Creates a new `BirthDate`, validating that year/month/day form a real
    /// calendar date.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDate` if the month is outside 1-12 or
    /// the day is outside the month's range for the given year.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValidationError> {
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(ValidationError::InvalidDate { year, month, day });
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(ValidationError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month component
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

/// The century digit of an IIN (7th character), guaranteed to be in the
/// range `1..=6`.
///
/// Digits 1-4 determine the century of the embedded 2-digit year; digits 5
/// and 6 pass the range check but are reserved and carry no year offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Century(u8);

impl Century {
    /// Creates a new `Century`, validating the digit is in `1..=6`.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidCentury` if the digit is out of range.
    pub fn new(digit: u8) -> Result<Self, ValidationError> {
        if !(MIN_CENTURY_DIGIT..=MAX_CENTURY_DIGIT).contains(&digit) {
            return Err(ValidationError::InvalidCentury(digit));
        }
        Ok(Self(digit))
    }

    /// Returns the century digit as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Year offset implied by this century digit.
    ///
    /// Returns `None` for the reserved digits 5 and 6, which have no defined
    /// offset; callers fall back to the raw 2-digit year.
    pub const fn year_offset(self) -> Option<u16> {
        match self.0 {
            1 | 2 => Some(CENTURY_OFFSET_1900),
            3 | 4 => Some(CENTURY_OFFSET_2000),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Century {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Century> for u8 {
    fn from(century: Century) -> Self {
        century.0
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
