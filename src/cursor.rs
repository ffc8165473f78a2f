use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MONTH, DEFAULT_YEAR, JalaliDate, LAST_MONTH, Month, ParseError, Year, days_in_month,
};

/// The month currently shown by the picker grid.
///
/// Independent of any selection. Navigation rolls over year boundaries and
/// saturates at the ends of the supported calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarCursor {
    year:  Year,
    month: Month,
}

impl CalendarCursor {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Cursor showing the month that contains `date`
    pub const fn containing(date: &JalaliDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Following month; Esfand rolls to Farvardin of the next year.
    #[must_use]
    pub fn next_month(self) -> Self {
        if self.month.index() < LAST_MONTH {
            return Self {
                month: Month::new(self.month.index() + 1).unwrap_or(Month::ESFAND),
                ..self
            };
        }
        match self.year.succ() {
            Some(year) => Self {
                year,
                month: Month::FARVARDIN,
            },
            None => {
                tracing::debug!(cursor = %self, "cursor already at last supported month");
                self
            },
        }
    }

    /// Preceding month; Farvardin rolls to Esfand of the previous year.
    #[must_use]
    pub fn prev_month(self) -> Self {
        if let Some(index) = self.month.index().checked_sub(1) {
            return Self {
                month: Month::new(index).unwrap_or(Month::FARVARDIN),
                ..self
            };
        }
        match self.year.pred() {
            Some(year) => Self {
                year,
                month: Month::ESFAND,
            },
            None => {
                tracing::debug!(cursor = %self, "cursor already at first supported month");
                self
            },
        }
    }

    #[must_use]
    pub const fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    #[must_use]
    pub const fn with_year(self, year: Year) -> Self {
        Self { year, ..self }
    }

    /// Number of days in the displayed month
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// The date of `day` within the displayed month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the month has no such day.
    pub fn date(&self, day: u8) -> Result<JalaliDate, ParseError> {
        JalaliDate::new(self.year.get(), self.month.index(), day)
    }

    /// Header text: Persian month name followed by the year
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

impl Default for CalendarCursor {
    fn default() -> Self {
        let year = Year::new(DEFAULT_YEAR).unwrap_or(Year::MIN);
        let month = Month::new(DEFAULT_MONTH).unwrap_or(Month::FARVARDIN);
        Self { year, month }
    }
}

impl fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year.get(), self.month.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{cursor, jalali, month, year};

    #[test]
    fn test_next_month_rolls_over_year() {
        assert_eq!(cursor(1403, 11).next_month(), cursor(1404, 0));
        assert_eq!(cursor(1403, 3).next_month(), cursor(1403, 4));
    }

    #[test]
    fn test_prev_month_rolls_over_year() {
        assert_eq!(cursor(1403, 0).prev_month(), cursor(1402, 11));
        assert_eq!(cursor(1403, 4).prev_month(), cursor(1403, 3));
    }

    #[test]
    fn test_navigation_saturates_at_window_edges() {
        let last = CalendarCursor::new(Year::MAX, Month::ESFAND);
        assert_eq!(last.next_month(), last);

        let first = CalendarCursor::new(Year::MIN, Month::FARVARDIN);
        assert_eq!(first.prev_month(), first);
    }

    #[test]
    fn test_full_year_round_trip() {
        let start = cursor(1403, 5);
        let mut current = start;
        for _ in 0..12 {
            current = current.next_month();
        }
        assert_eq!(current, cursor(1404, 5));
        for _ in 0..12 {
            current = current.prev_month();
        }
        assert_eq!(current, start);
    }

    #[test]
    fn test_with_month_and_year() {
        let c = cursor(1403, 1).with_month(month(9)).with_year(year(1405));
        assert_eq!(c, cursor(1405, 9));
    }

    #[test]
    fn test_date_in_month() {
        assert_eq!(cursor(1403, 8).date(19).unwrap(), jalali(1403, 8, 19));
        assert!(matches!(
            cursor(1403, 8).date(31),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(cursor(1403, 8).date(0).is_err());
    }

    #[test]
    fn test_containing() {
        assert_eq!(CalendarCursor::containing(&jalali(1403, 8, 19)), cursor(1403, 8));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(cursor(1403, 0).days_in_month(), 31);
        assert_eq!(cursor(1403, 8).days_in_month(), 30);
        assert_eq!(cursor(1403, 11).days_in_month(), 30);
        assert_eq!(cursor(1404, 11).days_in_month(), 29);
    }

    #[test]
    fn test_default_and_label() {
        let c = CalendarCursor::default();
        assert_eq!(c, cursor(1403, 1));
        assert_eq!(c.label(), "اردیبهشت 1403");
        assert_eq!(c.to_string(), "1403-02");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&cursor(1403, 9)).unwrap();
        assert_eq!(json, r#"{"year":1403,"month":9}"#);
        let parsed: CalendarCursor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cursor(1403, 9));

        let result: Result<CalendarCursor, _> = serde_json::from_str(r#"{"year":1403,"month":12}"#);
        assert!(result.is_err());
    }
}
