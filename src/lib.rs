//! Availability calendar core for a vacation rental booking page.
//!
//! A static list of [`BusyRange`]s describes the nights that are already taken.
//! [`AvailabilityCalendar`] owns the guest's stay selection, checks every
//! candidate stay against the busy ranges and hands the result to the booking
//! form as [`StayDates`].

mod booking;
mod busy;
mod config;
mod consts;
mod month;
mod prelude;
mod range;
mod selection;
mod types;

pub use booking::{BookingForm, StayDates};
pub use busy::BusyCalendar;
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use month::{DayCell, DayStatus, MonthCursor, MonthView};
pub use range::{BusyRange, RangeError};
pub use selection::{AvailabilityCalendar, Selection, SelectionError, Update};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar day with no time component.
///
/// Ordering is chronological: by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Builds a date from raw numbers.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// First day of the given month.
    pub const fn first_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
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

    /// Components as plain numbers.
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// The next calendar day, or `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        if let Ok(day) = Day::new(self.day.get() + 1, self.year, self.month) {
            return Some(Self { day, ..*self });
        }
        let (month, rolled) = self.month.next();
        let year = if rolled { self.year.succ()? } else { self.year };
        Some(Self::first_of_month(year, month))
    }

    /// The previous calendar day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        if let Ok(day) = Day::new(self.day.get() - 1, self.year, self.month) {
            return Some(Self { day, ..*self });
        }
        let (month, rolled) = self.month.previous();
        let year = if rolled { self.year.pred()? } else { self.year };
        let day = Day::new(month.days_in(year), year, month).ok()?;
        Some(Self { year, month, day })
    }

    /// Day of the week, `0` for Sunday through `6` for Saturday.
    pub fn weekday(&self) -> u8 {
        const MONTH_OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let (year, month, day) = self.ymd();
        let y = u32::from(year) - u32::from(month < 3);
        let offset = MONTH_OFFSETS[usize::from(month - 1)];
        let weekday =
            (y + y / 4 - y / 100 + y / 400 + offset + u32::from(day)) % u32::from(DAYS_PER_WEEK);
        // always < 7
        weekday as u8
    }

    /// Iterates every day from `self` through `end` inclusive.
    pub fn days_through(self, end: Self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self).filter(|start| *start <= end), move |date| {
            date.succ().filter(|next| *next <= end)
        })
    }

    /// Parses a fixed-width run of ASCII digits.
    fn parse_component<T: FromStr>(s: &str, width: usize) -> Result<T, ParseError> {
        if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses a strict ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY-MM-DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        Self::from_ymd(
            Self::parse_component(year, YEAR_DIGITS)?,
            Self::parse_component(month, MONTH_DIGITS)?,
            Self::parse_component(day, DAY_DIGITS)?,
        )
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
