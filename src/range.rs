use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// A closed interval of days that cannot be booked.
/// Both endpoints are busy and `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "RawBusyRange", into = "RawBusyRange")]
pub struct BusyRange {
    start: CalendarDate,
    end: CalendarDate,
}

/// Error type for busy range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing one of the endpoints.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Unvalidated `{ "start": ..., "end": ... }` shape used on the config surface.
#[derive(Serialize, Deserialize)]
struct RawBusyRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl TryFrom<RawBusyRange> for BusyRange {
    type Error = RangeError;

    fn try_from(raw: RawBusyRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<BusyRange> for RawBusyRange {
    fn from(range: BusyRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl BusyRange {
    /// Creates a busy range.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// True if `date` lies in the range, endpoints included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True if the closed span `[start, end]` shares at least one day with this range.
    /// Callers pass `start <= end`.
    pub fn overlaps(&self, start: CalendarDate, end: CalendarDate) -> bool {
        debug_assert!(start <= end);
        start <= self.end && self.start <= end
    }
}

impl FromStr for BusyRange {
    type Err = RangeError;

    /// Parses `YYYY-MM-DD/YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found: {s}"
                    ))
                })?;
                Self::new(start.trim().parse()?, end.trim().parse()?)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}
