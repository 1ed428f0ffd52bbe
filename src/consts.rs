/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month for a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Digits in the year field of an ISO date
pub const YEAR_DIGITS: usize = 4;
/// Digits in the month field of an ISO date
pub const MONTH_DIGITS: usize = 2;
/// Digits in the day field of an ISO date
pub const DAY_DIGITS: usize = 2;

/// Separator between the two endpoints of a busy range in text form
pub const RANGE_SEPARATOR: char = '/';
/// Separator used by the booking form's date field between check-in and check-out
pub const STAY_SEPARATOR: &str = " → ";

/// Days in a week, the width of the month grid
pub const DAYS_PER_WEEK: u8 = 7;

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers of the month grid, Sunday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK as usize] =
    ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Message shown to the user when a selected stay overlaps booked days
pub const CONFLICT_MESSAGE: &str =
    "The selected range includes booked dates. Please choose a different range.";
