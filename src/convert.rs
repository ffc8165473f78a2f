//! Gregorian ↔ Jalali conversion through ICU4X's Persian calendar.
//!
//! Dates cross between calendars as [`icu_calendar::Date`] values and their
//! fixed day numbers (Rata Die). Leap years follow ICU4X's 33-year rule with
//! its astronomical correction table.

use icu_calendar::cal::Persian;
use icu_calendar::types::RataDie;
use icu_calendar::{Date, Iso};

use crate::consts::MIN_DAY;
use crate::gregorian::GregorianDate;
use crate::types::{Day, Month, Year};
use crate::JalaliDate;

/// ICU4X view of a Jalali date.
pub(crate) fn persian_date(date: &JalaliDate) -> Date<Persian> {
    Date::try_new_persian(
        i32::from(date.year().get()),
        date.month().number(),
        date.day().get(),
    )
    .unwrap_or_else(|err| {
        debug_assert!(false, "{date} rejected by the Persian calendar: {err:?}");
        Date::from_rata_die(RataDie::new(0), Persian)
    })
}

/// ICU4X view of a Gregorian date.
pub(crate) fn iso_date(date: &GregorianDate) -> Date<Iso> {
    Date::try_new_iso(i32::from(date.year()), date.month(), date.day()).unwrap_or_else(|err| {
        debug_assert!(false, "{date} rejected by the ISO calendar: {err:?}");
        Date::from_rata_die(RataDie::new(0), Iso)
    })
}

/// Whether Esfand has 30 days in the given Jalali year
pub(crate) fn is_persian_leap_year(year: u16) -> bool {
    Date::try_new_persian(i32::from(year), 1, MIN_DAY).is_ok_and(|date| date.is_in_leap_year())
}

/// Converts a Gregorian date to the same day in the Jalali calendar.
///
/// Total over [`GregorianDate`], whose constructor already rejects days
/// outside the supported Jalali years.
pub fn to_jalali(date: GregorianDate) -> JalaliDate {
    let persian = iso_date(&date).to_calendar(Persian);
    let (year, month, day) = (
        persian.extended_year(),
        persian.month().ordinal,
        persian.day_of_month().0,
    );
    JalaliDate::from_components(year, month, day).unwrap_or_else(|| {
        debug_assert!(false, "converted date out of range: {year}-{month}-{day}");
        if date <= GregorianDate::MIN { JalaliDate::MIN } else { JalaliDate::MAX }
    })
}

/// Converts a Jalali date to the same day in the proleptic Gregorian calendar.
pub fn to_gregorian(date: JalaliDate) -> GregorianDate {
    let iso = persian_date(&date).to_iso();
    let (year, month, day) = (iso.extended_year(), iso.month().ordinal, iso.day_of_month().0);
    GregorianDate::from_components(year, month, day).unwrap_or_else(|| {
        debug_assert!(false, "converted date out of range: {year}-{month}-{day}");
        if date == JalaliDate::MIN { GregorianDate::MIN } else { GregorianDate::MAX }
    })
}

impl JalaliDate {
    /// Builds a date from calendar output (month 1-based).
    pub(crate) fn from_components(year: i32, month: u8, day: u8) -> Option<Self> {
        let year = Year::new(u16::try_from(year).ok()?).ok()?;
        let month = Month::from_number(month).ok()?;
        let day = Day::new(day, year, month).ok()?;
        Some(Self { year, month, day })
    }
}
