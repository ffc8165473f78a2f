use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{JalaliDate, OPEN_END, ParseError, RANGE_SEPARATOR};

/// A two-endpoint selection of Jalali days (inclusive).
///
/// The variants encode the selection invariant directly: an end never
/// exists without a start, and `start <= end` whenever both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RangeRecord", into = "RangeRecord")]
pub enum DateRange {
    /// Nothing selected
    #[default]
    Empty,
    /// Start chosen, waiting for an end
    Open { start: JalaliDate },
    /// Both endpoints chosen
    Closed { start: JalaliDate, end: JalaliDate },
}

/// Which phase of selection a [`DateRange`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeState {
    Empty,
    Open,
    Closed,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: JalaliDate, end: JalaliDate },

    /// An end would exist without a start.
    #[error("Range end ({end}) requires a start date")]
    EndWithoutStart { end: JalaliDate },

    /// Error parsing an endpoint.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a closed range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn closed(start: JalaliDate, end: JalaliDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self::Closed { start, end })
    }

    /// Creates a range with only a start
    pub const fn open(start: JalaliDate) -> Self {
        Self::Open { start }
    }

    /// Returns the start date, if any
    pub const fn start(&self) -> Option<JalaliDate> {
        match *self {
            Self::Empty => None,
            Self::Open { start } | Self::Closed { start, .. } => Some(start),
        }
    }

    /// Returns the end date, if any
    pub const fn end(&self) -> Option<JalaliDate> {
        match *self {
            Self::Closed { end, .. } => Some(end),
            Self::Empty | Self::Open { .. } => None,
        }
    }

    pub const fn state(&self) -> RangeState {
        match self {
            Self::Empty => RangeState::Empty,
            Self::Open { .. } => RangeState::Open,
            Self::Closed { .. } => RangeState::Closed,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Resets to `Empty`
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Replaces (or removes) the start date, keeping any end.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if the new start is after the
    /// current end, and `RangeError::EndWithoutStart` if the start is removed
    /// while an end is set. The range is left untouched on error.
    pub fn set_start(&mut self, start: Option<JalaliDate>) -> Result<(), RangeError> {
        *self = match (start, self.end()) {
            (None, None) => Self::Empty,
            (None, Some(end)) => return Err(RangeError::EndWithoutStart { end }),
            (Some(start), None) => Self::Open { start },
            (Some(start), Some(end)) => Self::closed(start, end)?,
        };
        Ok(())
    }

    /// Replaces (or removes) the end date.
    ///
    /// # Errors
    /// Returns `RangeError::EndWithoutStart` if there is no start, and
    /// `RangeError::InvalidRange` if the end precedes the start. The range is
    /// left untouched on error.
    pub fn set_end(&mut self, end: Option<JalaliDate>) -> Result<(), RangeError> {
        *self = match (self.start(), end) {
            (None, None) => Self::Empty,
            (None, Some(end)) => return Err(RangeError::EndWithoutStart { end }),
            (Some(start), None) => Self::Open { start },
            (Some(start), Some(end)) => Self::closed(start, end)?,
        };
        Ok(())
    }

    /// Checks if the range covers a given date.
    /// An open range covers only its start.
    pub fn contains(&self, date: &JalaliDate) -> bool {
        match self {
            Self::Empty => false,
            Self::Open { start } => start == date,
            Self::Closed { start, end } => start <= date && date <= end,
        }
    }

    /// Whether `date` is one of the chosen endpoints
    pub fn is_endpoint(&self, date: &JalaliDate) -> bool {
        self.start().as_ref() == Some(date) || self.end().as_ref() == Some(date)
    }

    /// Whether the grid should highlight `date`: an endpoint or anything
    /// strictly between the endpoints.
    ///
    /// Compares whole dates rather than day-of-month numbers, so a range
    /// that spans two months highlights only its own days in each month.
    /// Within a single month both readings agree.
    pub fn is_selected(&self, date: &JalaliDate) -> bool {
        self.is_endpoint(date) || self.contains(date)
    }

    /// Number of days from start to end, if closed
    pub fn span_days(&self) -> Option<i64> {
        match self {
            Self::Closed { start, end } => Some(start.days_until(end)),
            Self::Empty | Self::Open { .. } => None,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "{OPEN_END}{RANGE_SEPARATOR}{OPEN_END}"),
            Self::Open { start } => write!(f, "{start}{RANGE_SEPARATOR}{OPEN_END}"),
            Self::Closed { start, end } => write!(f, "{start}{RANGE_SEPARATOR}{end}"),
        }
    }
}

/// Parses the [`Display`](fmt::Display) form: `start/end`, with `..` for a
/// missing endpoint. Endpoints must use the `-` date separator.
impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        let Some((start, end)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if separator_count > 1 {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            )));
        }

        let mut range = Self::Empty;
        range.set_start(parse_endpoint(start.trim())?)?;
        range.set_end(parse_endpoint(end.trim())?)?;
        Ok(range)
    }
}

fn parse_endpoint(s: &str) -> Result<Option<JalaliDate>, ParseError> {
    if s == OPEN_END {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Wire form of a [`DateRange`]: two nullable endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct RangeRecord {
    start: Option<JalaliDate>,
    end:   Option<JalaliDate>,
}

impl From<DateRange> for RangeRecord {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start(),
            end:   range.end(),
        }
    }
}

impl TryFrom<RangeRecord> for DateRange {
    type Error = RangeError;

    fn try_from(record: RangeRecord) -> Result<Self, Self::Error> {
        let mut range = Self::Empty;
        range.set_start(record.start)?;
        range.set_end(record.end)?;
        Ok(range)
    }
}
