use crate::{BusyRange, CalendarDate};

/// The static set of busy ranges a calendar checks selections against.
///
/// Ranges are kept sorted by start, then end. Nothing mutates the set after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyCalendar {
    ranges: Vec<BusyRange>,
}

impl BusyCalendar {
    pub fn new(ranges: impl IntoIterator<Item = BusyRange>) -> Self {
        let mut ranges: Vec<BusyRange> = ranges.into_iter().collect();
        ranges.sort_unstable();
        Self { ranges }
    }

    pub fn ranges(&self) -> &[BusyRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// True if `date` falls within any busy range, endpoints included.
    pub fn is_busy(&self, date: CalendarDate) -> bool {
        self.ranges.iter().any(|range| range.contains(date))
    }

    /// True if any day of `[start, end]` is busy.
    pub fn overlaps(&self, start: CalendarDate, end: CalendarDate) -> bool {
        self.first_conflict(start, end).is_some()
    }

    /// Day-by-day form of [`Self::overlaps`]. Agrees with it for every `start <= end`.
    pub fn overlaps_by_scan(&self, start: CalendarDate, end: CalendarDate) -> bool {
        start.days_through(end).any(|day| self.is_busy(day))
    }

    /// The earliest busy range sharing a day with `[start, end]`.
    pub fn first_conflict(&self, start: CalendarDate, end: CalendarDate) -> Option<BusyRange> {
        // sorted by start, so nothing past `end` can overlap
        self.ranges
            .iter()
            .take_while(|range| range.start() <= end)
            .find(|range| range.overlaps(start, end))
            .copied()
    }
}

impl FromIterator<BusyRange> for BusyCalendar {
    fn from_iter<I: IntoIterator<Item = BusyRange>>(iter: I) -> Self {
        Self::new(iter)
    }
}
