use crate::{
    BusyCalendar, BusyRange, CONFLICT_MESSAGE, CalendarConfig, CalendarDate, MonthCursor, MonthView,
    StayDates,
};

/// The guest's stay selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Empty,
    /// Check-in picked, check-out not yet.
    Anchored(CalendarDate),
    /// A validated stay with no busy day in `[start, end]`.
    Committed { start: CalendarDate, end: CalendarDate },
}

impl Selection {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn start(&self) -> Option<CalendarDate> {
        match *self {
            Self::Empty => None,
            Self::Anchored(start) | Self::Committed { start, .. } => Some(start),
        }
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        match *self {
            Self::Committed { end, .. } => Some(end),
            Self::Empty | Self::Anchored(_) => None,
        }
    }

    /// True if `date` is the anchor or lies inside the committed stay.
    pub fn covers(&self, date: CalendarDate) -> bool {
        match *self {
            Self::Empty => false,
            Self::Anchored(start) => start == date,
            Self::Committed { start, end } => start <= date && date <= end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The stay `[start, end]` contains at least one day of `busy`.
    #[error("{}", CONFLICT_MESSAGE)]
    Conflict {
        start: CalendarDate,
        end: CalendarDate,
        busy: BusyRange,
    },
}

/// Result of an event that changed the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub selection: Selection,
    /// Selection-changed notification for the booking form.
    pub dates: StayDates,
    /// Set when a stay was rejected; the message is meant to be shown to the user.
    pub conflict: Option<SelectionError>,
}

impl Update {
    fn new(selection: Selection, conflict: Option<SelectionError>) -> Self {
        Self {
            selection,
            dates: StayDates::from(&selection),
            conflict,
        }
    }
}

/// An availability calendar widget: busy days, the displayed month and the
/// guest's selection.
///
/// Clicking an earlier day while only a check-in is picked swaps the two
/// dates, so the earlier day becomes check-in. Clicking the check-in again
/// deselects it.
#[derive(Debug, Clone)]
pub struct AvailabilityCalendar {
    busy: BusyCalendar,
    selection: Selection,
    cursor: MonthCursor,
    earliest: Option<MonthCursor>,
}

impl AvailabilityCalendar {
    /// Creates a calendar showing the month of `today` with nothing selected.
    pub fn new(config: &CalendarConfig, today: CalendarDate) -> Self {
        let cursor = MonthCursor::containing(today);
        Self {
            busy: config.busy_calendar(),
            selection: Selection::Empty,
            cursor,
            earliest: config.restrict_past_months.then_some(cursor),
        }
    }

    pub const fn busy(&self) -> &BusyCalendar {
        &self.busy
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Current selection as booking-form strings.
    pub fn get_selection(&self) -> StayDates {
        StayDates::from(&self.selection)
    }

    pub const fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// Handles a click on `date`.
    ///
    /// Busy days are not filtered here; a stay touching one is rejected when
    /// it is committed.
    pub fn day_clicked(&mut self, date: CalendarDate) -> Update {
        let current = self.selection;
        match current {
            Selection::Empty | Selection::Committed { .. } => {
                self.transition(Selection::Anchored(date), None)
            }
            Selection::Anchored(start) if date == start => self.transition(Selection::Empty, None),
            Selection::Anchored(start) => {
                let (start, end) = if date < start { (date, start) } else { (start, date) };
                self.commit(start, end)
            }
        }
    }

    /// Clears the selection.
    pub fn reset(&mut self) -> Update {
        self.transition(Selection::Empty, None)
    }

    fn commit(&mut self, start: CalendarDate, end: CalendarDate) -> Update {
        match self.busy.first_conflict(start, end) {
            Some(busy) => {
                tracing::warn!(%start, %end, %busy, "selected stay overlaps booked dates");
                let conflict = SelectionError::Conflict { start, end, busy };
                self.transition(Selection::Empty, Some(conflict))
            }
            None => self.transition(Selection::Committed { start, end }, None),
        }
    }

    fn transition(&mut self, next: Selection, conflict: Option<SelectionError>) -> Update {
        tracing::debug!(from = ?self.selection, to = ?next, "selection changed");
        self.selection = next;
        Update::new(next, conflict)
    }

    /// Shows the following month. Returns `None` past the last representable month.
    pub fn next_month(&mut self) -> Option<MonthCursor> {
        let next = self.cursor.next()?;
        self.cursor = next;
        tracing::debug!(month = %next, "navigated forward");
        Some(next)
    }

    /// Shows the preceding month. Returns `None`, leaving the view unchanged,
    /// when that month is before the configured earliest month.
    pub fn previous_month(&mut self) -> Option<MonthCursor> {
        let previous = self.cursor.previous()?;
        if self.earliest.is_some_and(|earliest| previous < earliest) {
            tracing::warn!(month = %previous, "refusing to navigate before the current month");
            return None;
        }
        self.cursor = previous;
        tracing::debug!(month = %previous, "navigated back");
        Some(previous)
    }

    /// Grid model of the displayed month.
    pub fn view(&self) -> MonthView {
        MonthView::build(self.cursor, &self.busy, &self.selection)
    }
}
