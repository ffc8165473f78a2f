use crate::consts::{
    ESFAND_DAYS, ESFAND_DAYS_LEAP, FIRST_HALF_DAYS, LAST_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    MONTH_NAMES, SECOND_HALF_DAYS, SECOND_HALF_START,
};
use crate::ParseError;
use crate::convert::is_persian_leap_year;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Jalali year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=3176)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Earliest supported year
    pub const MIN: Self = Self(NonZeroU16::MIN);
    /// Latest supported year
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(year) => Self(year),
        None => panic!("MAX_YEAR must be non-zero"),
    };

    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside the supported window.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether Esfand has 30 days in this year
    pub fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn succ(self) -> Option<Self> {
        self.get().checked_add(1).and_then(|y| Self::new(y).ok())
    }

    /// The preceding year, or `None` before `MIN_YEAR`
    pub fn pred(self) -> Option<Self> {
        self.get().checked_sub(1).and_then(|y| Self::new(y).ok())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based Jalali month index guaranteed to be in `0..=LAST_MONTH`
/// (0 = Farvardin, 11 = Esfand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Farvardin, the first month
    pub const FARVARDIN: Self = Self(0);
    /// Esfand, the last month
    pub const ESFAND: Self = Self(LAST_MONTH);

    /// Creates a new Month from its zero-based index
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > `LAST_MONTH`.
    pub const fn new(index: u8) -> Result<Self, ParseError> {
        if index > LAST_MONTH {
            return Err(ParseError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Creates a Month from its conventional 1-based number (1 = Farvardin)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the number is 0 or > 12.
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        number
            .checked_sub(1)
            .ok_or(ParseError::InvalidMonth(number))
            .and_then(Self::new)
    }

    /// Returns the zero-based index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the conventional 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Persian name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=LAST_MONTH).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// First day of every month
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    /// Last day of Esfand in a common year
    pub(crate) const ESFAND_COMMON_LAST: Self = match NonZeroU8::new(ESFAND_DAYS) {
        Some(day) => Self(day),
        None => panic!("ESFAND_DAYS must be non-zero"),
    };

    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.index(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the lower bound and the longest month apply
        if !(MIN_DAY..=FIRST_HALF_DAYS).contains(&value) {
            return Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Jalali leap-year rule of the Persian calendar (33-year cycle with
/// astronomical corrections)
pub fn is_leap_year(year: u16) -> bool {
    is_persian_leap_year(year)
}

/// Number of days in the given month: 31, 30, or 29/30 for Esfand
pub fn days_in_month(year: Year, month: Month) -> u8 {
    match month.index() {
        i if i < SECOND_HALF_START => FIRST_HALF_DAYS,
        i if i < LAST_MONTH => SECOND_HALF_DAYS,
        _ if year.is_leap() => ESFAND_DAYS_LEAP,
        _ => ESFAND_DAYS,
    }
}
