use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    CalendarCursor, DateRange, GregorianDate, JalaliDate, Month, MonthView, ParseError, RangeError,
    RangeState, SelectionPolicy, YEAR_WINDOW_END, YEAR_WINDOW_START, Year,
};

/// Construction parameters of a [`DatePicker`].
///
/// Deserializes from the same camelCase keys the widget props use:
///
/// ```json
/// { "disabledBeforeDate": "2024-12-09", "range": 25 }
/// ```
///
/// A malformed `disabledBeforeDate` is dropped with a warning, leaving every
/// day selectable, instead of failing the whole config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Gregorian day before which nothing can be selected
    #[serde(deserialize_with = "lenient_date")]
    pub disabled_before_date: Option<GregorianDate>,
    /// Maximum span in days between start and end
    pub range:                Option<u32>,
    /// Month shown first; defaults to [`CalendarCursor::default`]
    pub initial_cursor:       Option<CalendarCursor>,
}

impl PickerConfig {
    #[must_use]
    pub const fn with_disabled_before(mut self, date: GregorianDate) -> Self {
        self.disabled_before_date = Some(date);
        self
    }

    /// Sets the boundary from a `YYYY-MM-DD` string; a malformed string
    /// clears the boundary.
    #[must_use]
    pub fn with_disabled_before_str(mut self, date: &str) -> Self {
        self.disabled_before_date = parse_boundary(date);
        self
    }

    #[must_use]
    pub const fn with_range(mut self, days: u32) -> Self {
        self.range = Some(days);
        self
    }

    #[must_use]
    pub const fn with_initial_cursor(mut self, cursor: CalendarCursor) -> Self {
        self.initial_cursor = Some(cursor);
        self
    }

    /// Click rules derived from this config
    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(
            self.disabled_before_date.map(GregorianDate::to_jalali),
            self.range,
        )
    }
}

fn parse_boundary(raw: &str) -> Option<GregorianDate> {
    match raw.parse() {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::warn!(input = raw, %error, "ignoring malformed disabled-before date");
            None
        },
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<GregorianDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_boundary))
}

/// One entry of the month or year dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropdownItem {
    Month(Month),
    Year(Year),
}

impl DropdownItem {
    /// The twelve months, Farvardin first
    pub fn months() -> impl Iterator<Item = Self> {
        Month::all().map(Self::Month)
    }

    /// The fixed year window offered by the year dropdown
    pub fn years() -> impl Iterator<Item = Self> {
        (YEAR_WINDOW_START..=YEAR_WINDOW_END)
            .filter_map(|y| Year::new(y).ok())
            .map(Self::Year)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Month(month) => month.name().to_owned(),
            Self::Year(year) => year.to_string(),
        }
    }

    /// Cursor after choosing this item
    pub const fn apply(self, cursor: CalendarCursor) -> CalendarCursor {
        match self {
            Self::Month(month) => cursor.with_month(month),
            Self::Year(year) => cursor.with_year(year),
        }
    }

    /// Whether this item is what `cursor` currently shows
    pub fn is_current(&self, cursor: &CalendarCursor) -> bool {
        match self {
            Self::Month(month) => *month == cursor.month(),
            Self::Year(year) => *year == cursor.year(),
        }
    }
}

impl fmt::Display for DropdownItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

type ConfirmCallback = Box<dyn FnMut(DateRange)>;

/// A Jalali range picker: owns the displayed month, the selection and the
/// click rules, and is the only writer of its [`DateRange`].
pub struct DatePicker {
    policy:     SelectionPolicy,
    cursor:     CalendarCursor,
    range:      DateRange,
    visible:    bool,
    on_confirm: Option<ConfirmCallback>,
}

impl DatePicker {
    pub fn new(config: &PickerConfig) -> Self {
        let policy = config.policy();
        let cursor = config.initial_cursor.unwrap_or_default();
        tracing::debug!(
            %cursor,
            disabled_before = ?policy.disabled_before.map(|d| d.to_string()),
            range_limit = ?policy.range_limit,
            "date picker created"
        );
        Self {
            policy,
            cursor,
            range: DateRange::Empty,
            visible: true,
            on_confirm: None,
        }
    }

    /// Registers the handler that receives the range on confirm.
    #[must_use]
    pub fn with_on_confirm(mut self, callback: impl FnMut(DateRange) + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub const fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    pub const fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub const fn range(&self) -> DateRange {
        self.range
    }

    pub const fn start(&self) -> Option<JalaliDate> {
        self.range.start()
    }

    pub const fn end(&self) -> Option<JalaliDate> {
        self.range.end()
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// # Errors
    /// See [`DateRange::set_start`].
    pub fn set_start(&mut self, start: Option<JalaliDate>) -> Result<(), RangeError> {
        self.range.set_start(start)
    }

    /// # Errors
    /// See [`DateRange::set_end`].
    pub fn set_end(&mut self, end: Option<JalaliDate>) -> Result<(), RangeError> {
        self.range.set_end(end)
    }

    /// Handles a click on `day` of the displayed month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the displayed month has no such day;
    /// the selection is unchanged in that case.
    pub fn click_day(&mut self, day: u8) -> Result<RangeState, ParseError> {
        let candidate = self.cursor.date(day)?;
        self.range = self.policy.select(self.range, candidate);
        Ok(self.range.state())
    }

    /// Whether `day` of the displayed month is before the boundary
    pub fn is_disabled(&self, day: u8) -> bool {
        self.cursor
            .date(day)
            .is_ok_and(|date| self.policy.is_disabled(&date))
    }

    /// Whether `day` of the displayed month is highlighted
    pub fn is_selected(&self, day: u8) -> bool {
        self.cursor
            .date(day)
            .is_ok_and(|date| self.range.is_selected(&date))
    }

    pub fn next_month(&mut self) {
        self.move_cursor(self.cursor.next_month());
    }

    pub fn prev_month(&mut self) {
        self.move_cursor(self.cursor.prev_month());
    }

    /// Jumps the displayed month using a dropdown choice
    pub fn select(&mut self, item: DropdownItem) {
        self.move_cursor(item.apply(self.cursor));
    }

    fn move_cursor(&mut self, cursor: CalendarCursor) {
        tracing::debug!(from = %self.cursor, to = %cursor, "cursor moved");
        self.cursor = cursor;
    }

    /// Clears the selection and closes the picker.
    pub fn cancel(&mut self) {
        tracing::debug!(discarded = %self.range, "picker cancelled");
        self.range.clear();
        self.visible = false;
    }

    /// Closes the picker and hands the current selection to the confirm
    /// handler, if any. The selection is kept.
    pub fn confirm(&mut self) -> DateRange {
        tracing::debug!(range = %self.range, "picker confirmed");
        self.visible = false;
        if let Some(callback) = self.on_confirm.as_mut() {
            callback(self.range);
        }
        self.range
    }

    /// Shows the picker again after confirm or cancel
    pub fn reopen(&mut self) {
        self.visible = true;
    }

    /// Render model of the displayed month
    pub fn view(&self) -> MonthView {
        MonthView::build(self.cursor, &self.range, &self.policy)
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("policy", &self.policy)
            .field("cursor", &self.cursor)
            .field("range", &self.range)
            .field("visible", &self.visible)
            .field("on_confirm", &self.on_confirm.is_some())
            .finish()
    }
}
