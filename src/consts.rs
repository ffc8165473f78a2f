/// Earliest supported Jalali year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Latest supported Jalali year (inclusive)
pub const MAX_YEAR: u16 = 3176;

/// Number of months in a Jalali year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Zero-based index of the last month (Esfand)
pub const LAST_MONTH: u8 = MONTHS_PER_YEAR - 1;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Months 0..=5 have 31 days
pub const FIRST_HALF_DAYS: u8 = 31;
/// Months 6..=10 have 30 days
pub const SECOND_HALF_DAYS: u8 = 30;
/// Index of the first 30-day month (Mehr)
pub const SECOND_HALF_START: u8 = 6;

/// Esfand in a common year
pub const ESFAND_DAYS: u8 = 29;
/// Esfand in a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator common in Persian text (`1403/09/19`)
pub const SLASH_SEPARATOR: char = '/';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Marks an open range end (ISO 8601-2)
pub const OPEN_END: &str = "..";

/// Month names in Persian, Farvardin first
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday column headers, Saturday first
pub const WEEKDAY_LABELS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Label of the confirm action
pub const CONFIRM_LABEL: &str = "تایید";
/// Label of the cancel action
pub const CANCEL_LABEL: &str = "انصراف";

/// First year offered by the year dropdown
pub const YEAR_WINDOW_START: u16 = 1400;
/// Last year offered by the year dropdown (inclusive)
pub const YEAR_WINDOW_END: u16 = 1410;

/// Year shown when no initial cursor is configured
pub const DEFAULT_YEAR: u16 = 1403;
/// Month index shown when no initial cursor is configured (Ordibehesht)
pub const DEFAULT_MONTH: u8 = 1;
