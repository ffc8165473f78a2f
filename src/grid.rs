use serde::Serialize;

use crate::types::days_in_month;
use crate::{
    CANCEL_LABEL, CONFIRM_LABEL, CalendarCursor, DateRange, JalaliDate, MIN_DAY, Month,
    SelectionPolicy, WEEKDAY_LABELS, Year,
};

/// Day numbers to render for a month: `1..=days_in_month`, ascending.
///
/// No leading blanks are produced; the first day always sits in the first
/// grid column regardless of its weekday.
pub fn build_month_days(year: Year, month: Month) -> Vec<u8> {
    (MIN_DAY..=days_in_month(year, month)).collect()
}

/// Render state of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date:     JalaliDate,
    /// Not selectable under the policy's boundary
    pub disabled: bool,
    /// Highlighted as part of the current range
    pub selected: bool,
    /// The range's start or end
    pub endpoint: bool,
}

impl DayCell {
    pub const fn day(&self) -> u8 {
        self.date.day().get()
    }
}

/// Everything a front end needs to draw one month of the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub cursor:   CalendarCursor,
    /// Persian month name and year
    pub title:    String,
    pub weekdays: [&'static str; 7],
    pub cells:    Vec<DayCell>,
    /// Confirm and cancel button labels, in that order
    pub actions:  [&'static str; 2],
}

impl MonthView {
    pub fn build(cursor: CalendarCursor, range: &DateRange, policy: &SelectionPolicy) -> Self {
        let cells = build_month_days(cursor.year(), cursor.month())
            .into_iter()
            .filter_map(|day| cursor.date(day).ok())
            .map(|date| DayCell {
                date,
                disabled: policy.is_disabled(&date),
                selected: range.is_selected(&date),
                endpoint: range.is_endpoint(&date),
            })
            .collect();

        Self {
            cursor,
            title: cursor.label(),
            weekdays: WEEKDAY_LABELS,
            cells,
            actions: [CONFIRM_LABEL, CANCEL_LABEL],
        }
    }

    /// Cell for a given day number, if the month has it
    pub fn cell(&self, day: u8) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day() == day)
    }

    /// Cells grouped into rows of seven
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(self.weekdays.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{cursor, jalali, month, year};

    #[test]
    fn test_build_month_days_lengths() {
        assert_eq!(build_month_days(year(1403), month(0)).len(), 31);
        assert_eq!(build_month_days(year(1403), month(6)).len(), 30);
        assert_eq!(build_month_days(year(1403), Month::ESFAND).len(), 30);
        assert_eq!(build_month_days(year(1404), Month::ESFAND).len(), 29);
    }

    #[test]
    fn test_build_month_days_is_contiguous() {
        for index in 0..12 {
            let days = build_month_days(year(1402), month(index));
            assert_eq!(days.first(), Some(&1));
            assert!(days.windows(2).all(|pair| pair[1] == pair[0] + 1));
            assert!(matches!(days.len(), 29..=31));
        }
    }

    #[test]
    fn test_view_marks_disabled_and_selection() {
        let range = DateRange::closed(jalali(1403, 8, 20), jalali(1403, 8, 24)).unwrap();
        let policy = SelectionPolicy::new(Some(jalali(1403, 8, 19)), Some(25));
        let view = MonthView::build(cursor(1403, 8), &range, &policy);

        assert_eq!(view.cells.len(), 30);
        assert_eq!(view.title, "آذر 1403");
        assert_eq!(view.weekdays[0], "ش");
        assert_eq!(view.actions, ["تایید", "انصراف"]);

        let cell = |day| *view.cell(day).unwrap();
        assert!(cell(18).disabled);
        assert!(!cell(19).disabled);
        assert!(cell(20).selected && cell(20).endpoint);
        assert!(cell(22).selected && !cell(22).endpoint);
        assert!(cell(24).endpoint);
        assert!(!cell(25).selected);
        assert!(view.cell(31).is_none());
    }

    #[test]
    fn test_view_of_other_month_ignores_same_day_numbers() {
        let range = DateRange::closed(jalali(1403, 8, 20), jalali(1403, 8, 24)).unwrap();
        let view = MonthView::build(cursor(1403, 9), &range, &SelectionPolicy::default());
        assert!(view.cells.iter().all(|cell| !cell.selected && !cell.disabled));
    }

    #[test]
    fn test_rows_of_seven() {
        let policy = SelectionPolicy::default();
        let view = MonthView::build(cursor(1403, 0), &DateRange::Empty, &policy);
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].len(), 7);
        assert_eq!(rows[4].len(), 3);
    }

    #[test]
    fn test_view_serializes() {
        let policy = SelectionPolicy::default();
        let view = MonthView::build(cursor(1404, 11), &DateRange::Empty, &policy);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "اسفند 1404");
        assert_eq!(json["cells"].as_array().unwrap().len(), 29);
        assert_eq!(json["cells"][0]["date"], "1404-12-01");
    }
}
