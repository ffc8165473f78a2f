use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use icu_calendar::Date;

use crate::consts::DATE_SEPARATOR;
use crate::convert::{iso_date, to_jalali};
use crate::{JalaliDate, ParseError};

/// A proleptic Gregorian calendar date inside the convertible window.
///
/// The window runs from 1 Farvardin 1 (`622-03-21`) to the last day of
/// Jalali year 3176 (`3798-03-19`), so every value converts to a
/// [`JalaliDate`] without failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Gregorian equivalent of [`JalaliDate::MIN`]
    pub const MIN: Self = Self {
        year:  622,
        month: 3,
        day:   21,
    };

    /// Gregorian equivalent of [`JalaliDate::MAX`]
    pub const MAX: Self = Self {
        year:  3798,
        month: 3,
        day:   19,
    };

    /// Creates a validated Gregorian date (month is 1-based).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidGregorian` if the month or day does not
    /// exist, or `ParseError::OutOfRange` if the date cannot be expressed in
    /// the supported Jalali years.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Date::try_new_iso(i32::from(year), month, day)
            .map_err(|_| ParseError::InvalidGregorian { year, month, day })?;
        let date = Self { year, month, day };
        if date < Self::MIN || date > Self::MAX {
            return Err(ParseError::OutOfRange(date.to_string()));
        }
        Ok(date)
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month number, 1 = January
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Fixed day number (Rata Die, 0001-01-01 is day 1)
    pub fn day_number(&self) -> i64 {
        iso_date(self).to_rata_die().to_i64_date()
    }

    /// The same day in the Jalali calendar
    pub fn to_jalali(self) -> JalaliDate {
        to_jalali(self)
    }

    pub(crate) fn from_components(year: i32, month: u8, day: u8) -> Option<Self> {
        Self::new(u16::try_from(year).ok()?, month, day).ok()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses exactly `YYYY-MM-DD`; no other layout is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s) in {trimmed}",
                parts.len()
            )));
        };

        let widths_ok = year.len() == 4 && month.len() == 2 && day.len() == 2;
        if !widths_ok {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        Self::new(parse_digits(year)?, parse_digits(month)?, parse_digits(day)?)
    }
}

/// Parses an all-ASCII-digit field; signs and inner whitespace are rejected.
pub(crate) fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
