mod consts;
mod convert;
mod cursor;
mod gregorian;
mod grid;
mod picker;
mod prelude;
mod range;
mod selection;
mod types;

pub use consts::*;
pub use convert::{to_gregorian, to_jalali};
pub use cursor::CalendarCursor;
pub use gregorian::GregorianDate;
pub use grid::{DayCell, MonthView, build_month_days};
pub use picker::{DatePicker, DropdownItem, PickerConfig};
pub use range::{DateRange, RangeError, RangeState};
pub use selection::{SelectionPolicy, is_disabled, on_day_click};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A day in the Jalali (solar Hijri) calendar.
///
/// The month is stored as a zero-based index, the way the picker grid
/// addresses it, while the text form uses the conventional 1-based number:
/// 19 Azar 1403 has month index 8 and displays as `1403-09-19`.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.number()", "day.get()")]
pub struct JalaliDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", LAST_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month index {month} of {year}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidGregorian { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date {_0} is outside the supported calendar window")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// 1 Farvardin of the first supported year
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::FARVARDIN,
        day:   Day::FIRST,
    };

    /// Last day of the last supported year (a common year)
    pub const MAX: Self = Self {
        year:  Year::MAX,
        month: Month::ESFAND,
        day:   Day::ESFAND_COMMON_LAST,
    };

    /// Creates a validated date from a year, a zero-based month index and a day.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month_index: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month_index)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already-typed components, re-checking the day
    /// against the month it is paired with.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_typed(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Converts a strict `YYYY-MM-DD` Gregorian string.
    ///
    /// # Errors
    /// Returns `ParseError` if the string is malformed or outside the window.
    pub fn from_gregorian_str(s: &str) -> Result<Self, ParseError> {
        s.parse::<GregorianDate>().map(GregorianDate::to_jalali)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Fixed day number (Rata Die); consecutive days differ by exactly one.
    pub fn day_number(&self) -> i64 {
        convert::persian_date(self).to_rata_die().to_i64_date()
    }

    /// Signed number of days from `self` to `other` (positive if `other` is later).
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The same day in the proleptic Gregorian calendar
    pub fn to_gregorian(self) -> GregorianDate {
        to_gregorian(self)
    }

    /// Whether `self` and `other` fall in the same month of the same year
    pub fn same_month(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        gregorian::parse_digits(s)
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        gregorian::parse_digits(s)
    }

    fn parse_parts(parts: &[&str]) -> Result<Self, ParseError> {
        let [year, month, day] = parts else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected year, month and day, found {} part(s)",
                parts.len()
            )));
        };

        let year = Year::new(Self::parse_u16(year)?)?;
        let month = Month::from_number(Self::parse_u8(month)?)?;
        let day = Day::new(Self::parse_u8(day)?, year, month)?;
        Ok(Self { year, month, day })
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD` or `YYYY/MM/DD` with a 1-based month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(SLASH_SEPARATOR);

        let separator = match (has_hyphen, has_slash) {
            (true, true) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {SLASH_SEPARATOR})"
                )));
            },
            (true, false) => DATE_SEPARATOR,
            (false, true) => SLASH_SEPARATOR,
            (false, false) => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        Self::parse_parts(&parts)
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, jalali, month, year};

    #[test]
    fn test_new_and_accessors() {
        let date = JalaliDate::new(1403, 8, 19).unwrap();
        assert_eq!(date.year(), year(1403));
        assert_eq!(date.month(), month(8));
        assert_eq!(date.day().get(), 19);
    }

    #[test]
    fn test_new_rejects_invalid_components() {
        assert!(matches!(
            JalaliDate::new(0, 0, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            JalaliDate::new(1403, 12, 1),
            Err(ParseError::InvalidMonth(12))
        ));
        assert!(matches!(
            JalaliDate::new(1403, 6, 31),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            JalaliDate::new(1404, 11, 30),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_from_typed_rechecks_day() {
        let thirty_one: Day = 31.try_into().unwrap();
        assert!(JalaliDate::from_typed(year(1403), month(0), thirty_one).is_ok());
        assert!(JalaliDate::from_typed(year(1403), month(7), thirty_one).is_err());
    }

    #[test]
    fn test_display_uses_month_number() {
        assert_eq!(jalali(1403, 8, 19).to_string(), "1403-09-19");
        assert_eq!(jalali(1403, 0, 1).to_string(), "1403-01-01");
    }

    #[test]
    fn test_parse_both_separators() {
        assert_eq!("1403-09-19".parse::<JalaliDate>().unwrap(), jalali(1403, 8, 19));
        assert_eq!("1403/09/19".parse::<JalaliDate>().unwrap(), jalali(1403, 8, 19));
        assert_eq!(" 1403 / 9 / 19 ".parse::<JalaliDate>().unwrap(), jalali(1403, 8, 19));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<JalaliDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "1403-09/19".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "14030919".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403-09".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403-13-01".parse::<JalaliDate>(),
            Err(ParseError::InvalidMonth(12))
        ));
        assert!(matches!(
            "1403-00-01".parse::<JalaliDate>(),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            "1403-XX-01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dates = [
            jalali(1402, 11, 29),
            jalali(1403, 0, 1),
            jalali(1403, 0, 31),
            jalali(1403, 1, 1),
            jalali(1403, 8, 19),
            jalali(1403, 9, 18),
        ];
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
            assert!(pair[0].day_number() < pair[1].day_number());
        }
    }

    #[test]
    fn test_days_until() {
        assert_eq!(jalali(1403, 8, 5).days_until(&jalali(1403, 8, 10)), 5);
        assert_eq!(jalali(1403, 8, 10).days_until(&jalali(1403, 8, 5)), -5);
        // Aban has 30 days
        assert_eq!(jalali(1403, 7, 1).days_until(&jalali(1403, 8, 1)), 30);
        // Across a leap Esfand
        assert_eq!(jalali(1403, 11, 29).days_until(&jalali(1404, 0, 1)), 2);
    }

    #[test]
    fn test_from_gregorian_str() {
        assert_eq!(
            JalaliDate::from_gregorian_str("2024-12-09").unwrap(),
            jalali(1403, 8, 19)
        );
        assert!(JalaliDate::from_gregorian_str("09/12/2024").is_err());
        assert_eq!(JalaliDate::from(gregorian(2024, 3, 20)), jalali(1403, 0, 1));
        assert_eq!(jalali(1403, 0, 1).to_gregorian(), gregorian(2024, 3, 20));
    }

    #[test]
    fn test_same_month() {
        assert!(jalali(1403, 8, 1).same_month(&jalali(1403, 8, 30)));
        assert!(!jalali(1403, 8, 1).same_month(&jalali(1403, 9, 1)));
        assert!(!jalali(1403, 8, 1).same_month(&jalali(1402, 8, 1)));
    }

    #[test]
    fn test_serde_string_format() {
        let date = jalali(1403, 8, 19);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1403-09-19""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1404-12-30""#);
        assert!(result.is_err(), "1404 is not a leap year");

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403-12-30""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-3176)"
        );
        assert_eq!(
            ParseError::InvalidGregorian {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid Gregorian date 2023-02-29"
        );
    }

    #[test]
    fn test_min_max_are_valid() {
        assert_eq!(JalaliDate::MIN, jalali(1, 0, 1));
        assert_eq!(JalaliDate::MAX, jalali(MAX_YEAR, 11, 29));
        assert!(!Year::MAX.is_leap());
    }
}
