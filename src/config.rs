use serde::{Deserialize, Serialize};

use crate::{BusyCalendar, BusyRange, RangeError};

/// Static configuration of an availability calendar.
///
/// ```json
/// {
///   "busy_ranges": [
///     { "start": "2025-10-12", "end": "2025-10-18" },
///     { "start": "2025-12-20", "end": "2026-01-04" }
///   ],
///   "restrict_past_months": true
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Booked stays, each inclusive of both endpoints.
    pub busy_ranges: Vec<BusyRange>,
    /// Refuse navigating to months before the one containing "today".
    pub restrict_past_months: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid calendar config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Range(#[from] RangeError),
}

impl CalendarConfig {
    pub fn new(busy_ranges: impl IntoIterator<Item = BusyRange>) -> Self {
        Self {
            busy_ranges: busy_ranges.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Builds a config from `start/end` range strings.
    ///
    /// # Errors
    /// Returns `ConfigError::Range` for the first string that is not a valid range.
    pub fn from_range_strs<'a>(
        ranges: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ConfigError> {
        let busy_ranges = ranges
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<BusyRange>, RangeError>>()?;
        Ok(Self::new(busy_ranges))
    }

    /// Parses a JSON config document.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` if the document is malformed, a date is not
    /// ISO `YYYY-MM-DD`, or a range ends before it starts.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::info!(
            busy_ranges = config.busy_ranges.len(),
            restrict_past_months = config.restrict_past_months,
            "loaded calendar config"
        );
        Ok(config)
    }

    #[must_use]
    pub fn with_restrict_past_months(mut self, restrict: bool) -> Self {
        self.restrict_past_months = restrict;
        self
    }

    pub fn busy_calendar(&self) -> BusyCalendar {
        self.busy_ranges.iter().copied().collect()
    }
}
