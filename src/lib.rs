//! Validation of Kazakhstani Individual Identification Numbers (IIN).
//!
//! An IIN is a 12-digit string laid out as `YYMMDD C SSSS K`: six digits of
//! birth date, a century digit, a four-digit sequence number, and a trailing
//! control digit computed from the first eleven digits with a two-pass
//! weighted mod-11 checksum.
//!
//! ```
//! use kz_iin::{Iin, ValidationError, is_valid, validate};
//!
//! assert!(is_valid("901209300017"));
//! assert_eq!(
//!     validate("990101700123"),
//!     Err(ValidationError::InvalidCentury(7))
//! );
//!
//! let iin: Iin = "901209300017".parse()?;
//! assert_eq!(iin.birth_date().to_string(), "2090-12-09");
//! # Ok::<(), kz_iin::ValidationError>(())
//! ```

mod checksum;
mod consts;
mod prelude;
mod types;

pub use consts::*;
pub use types::{BirthDate, Century, days_in_month, is_leap_year};

use crate::consts::PAYLOAD_LENGTH;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The reason a candidate string failed validation.
///
/// The variants are mutually exclusive and first-match-wins: validation
/// stops at the first failing rule, so only one reason is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input length is not exactly 12 (measured in bytes, as the wire form
    /// is ASCII).
    #[error("IIN must contain exactly 12 digits, found {0}")]
    InvalidLength(usize),

    /// A character outside `'0'..='9'` is present.
    #[error("IIN must contain only digits, found {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },

    /// The 7th character is not in `1..=6`.
    #[error("invalid century digit {0} (expected 1-6)")]
    InvalidCentury(u8),

    /// The decoded year/month/day is not a real calendar date.
    #[error("invalid birth date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    /// The checksum does not match the trailing digit, or the payload admits
    /// no control digit at all (both checksum passes collide on 10).
    #[error("control digit does not match the checksum")]
    InvalidControlDigit,
}

/// Checks a candidate string against all IIN rules.
///
/// Operates on the raw input: no trimming or normalization is performed.
///
/// # Errors
/// Returns the first failing rule as a [`ValidationError`].
pub fn validate(candidate: &str) -> Result<(), ValidationError> {
    candidate.parse::<Iin>().map(|_| ())
}

/// Returns true if the candidate string is a well-formed IIN.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

/// A parsed, proven-valid IIN.
///
/// Constructing an `Iin` (via [`FromStr`] or [`TryFrom`]) runs the full
/// validation pipeline, so every value of this type satisfies the length,
/// digit, century, calendar, and checksum rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iin {
    digits: [u8; IIN_LENGTH],
    birth_date: BirthDate,
    century: Century,
}

impl Iin {
    /// Returns the birth date embedded in the first six digits, resolved
    /// against the century digit.
    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    /// Returns the century digit (7th character).
    pub const fn century(&self) -> Century {
        self.century
    }

    /// Returns the four-digit registration sequence number (characters 8-11).
    pub fn sequence_number(&self) -> u16 {
        self.digits[7..PAYLOAD_LENGTH]
            .iter()
            .fold(0, |acc, digit| acc * 10 + u16::from(*digit))
    }

    /// Returns the trailing control digit.
    pub const fn control_digit(&self) -> u8 {
        self.digits[IIN_LENGTH - 1]
    }

    /// Returns all twelve digit values.
    pub const fn digits(&self) -> &[u8; IIN_LENGTH] {
        &self.digits
    }
}

impl FromStr for Iin {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != IIN_LENGTH {
            return Err(ValidationError::InvalidLength(s.len()));
        }

        let mut digits = [0u8; IIN_LENGTH];
        for (position, found) in s.char_indices() {
            match found.to_digit(10) {
                // ASCII digits are one byte each, so the byte offset equals
                // the character position for every digit seen so far.
                Some(digit) => digits[position] = digit as u8,
                None => return Err(ValidationError::InvalidCharacter { position, found }),
            }
        }

        let century = Century::new(digits[6])?;
        let two_digit_year = u16::from(digits[0]) * 10 + u16::from(digits[1]);
        let month = digits[2] * 10 + digits[3];
        let day = digits[4] * 10 + digits[5];

        // Reserved century digits (5, 6) define no offset; the 2-digit year
        // is validated at face value.
        let year = two_digit_year + century.year_offset().unwrap_or(0);
        let birth_date = BirthDate::new(year, month, day)?;

        match checksum::control_digit(&digits) {
            Some(check) if check == digits[IIN_LENGTH - 1] => Ok(Self {
                digits,
                birth_date,
                century,
            }),
            _ => Err(ValidationError::InvalidControlDigit),
        }
    }
}

impl TryFrom<&str> for Iin {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Iin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for Iin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Iin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
