//! Day-click handling for the range picker.
//!
//! A click moves the [`DateRange`] through three phases:
//!
//! | current        | click on                           | result                    |
//! |----------------|------------------------------------|---------------------------|
//! | any            | a disabled day                     | `Empty`                   |
//! | `Empty`        | day `d`                            | `Open { d }`              |
//! | `Closed`       | day `d`                            | `Open { d }`              |
//! | `Open { s }`   | `d` more than `limit` days after s | unchanged                 |
//! | `Open { s }`   | `d > s`                            | `Closed { s, d }`         |
//! | `Open { s }`   | `d <= s`                           | `Open { d }`              |

use serde::{Deserialize, Serialize};

use crate::{CalendarCursor, DateRange, JalaliDate, ParseError};

/// Whether `candidate` falls before the selectable window.
///
/// Always `false` without a boundary; otherwise a full chronological
/// comparison, so a later month is never disabled by an earlier day number.
pub fn is_disabled(candidate: &JalaliDate, boundary: Option<&JalaliDate>) -> bool {
    boundary.is_some_and(|boundary| candidate < boundary)
}

/// Applies a click on `day` of the month under `cursor` to `current`.
///
/// # Errors
/// Returns `ParseError::InvalidDay` if the displayed month has no such day.
pub fn on_day_click(
    day: u8,
    cursor: CalendarCursor,
    current: DateRange,
    boundary: Option<JalaliDate>,
    range_limit: Option<u32>,
) -> Result<DateRange, ParseError> {
    let candidate = cursor.date(day)?;
    let policy = SelectionPolicy {
        disabled_before: boundary,
        range_limit,
    };
    Ok(policy.select(current, candidate))
}

/// Fixed rules a picker applies to every click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Days strictly before this are not selectable
    pub disabled_before: Option<JalaliDate>,
    /// Largest allowed distance in days from start to end
    pub range_limit:     Option<u32>,
}

impl SelectionPolicy {
    pub const fn new(disabled_before: Option<JalaliDate>, range_limit: Option<u32>) -> Self {
        Self {
            disabled_before,
            range_limit,
        }
    }

    pub fn is_disabled(&self, candidate: &JalaliDate) -> bool {
        is_disabled(candidate, self.disabled_before.as_ref())
    }

    /// Whether `end` is close enough to `start` under the range limit
    pub fn within_limit(&self, start: &JalaliDate, end: &JalaliDate) -> bool {
        self.range_limit
            .is_none_or(|limit| start.days_until(end) <= i64::from(limit))
    }

    /// The range that results from clicking `candidate`.
    pub fn select(&self, current: DateRange, candidate: JalaliDate) -> DateRange {
        if self.is_disabled(&candidate) {
            tracing::debug!(%candidate, "disabled day clicked, clearing selection");
            return DateRange::Empty;
        }

        let next = match current {
            DateRange::Empty | DateRange::Closed { .. } => DateRange::open(candidate),
            DateRange::Open { start } => {
                if !self.within_limit(&start, &candidate) {
                    tracing::trace!(
                        %start,
                        %candidate,
                        limit = ?self.range_limit,
                        "click beyond range limit ignored"
                    );
                    return current;
                }
                if candidate > start {
                    DateRange::Closed {
                        start,
                        end: candidate,
                    }
                } else {
                    DateRange::open(candidate)
                }
            },
        };

        tracing::debug!(from = %current, to = %next, "selection changed");
        next
    }
}
