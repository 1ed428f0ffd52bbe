use serde::Serialize;

use crate::{
    BusyCalendar, CalendarDate, DAYS_PER_WEEK, Month, Selection, WEEKDAY_LABELS, Year, prelude::*,
};

/// The month currently shown by the calendar.
///
/// Navigation only moves this cursor. It never touches the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}")]
pub struct MonthCursor {
    year: Year,
    month: Month,
}

impl MonthCursor {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub const fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Header text, e.g. `October 2025`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year.get())
    }

    pub const fn first_day(&self) -> CalendarDate {
        CalendarDate::first_of_month(self.year, self.month)
    }

    /// The following month, or `None` past December 9999.
    pub fn next(&self) -> Option<Self> {
        let (month, rolled) = self.month.next();
        let year = if rolled { self.year.succ()? } else { self.year };
        Some(Self { year, month })
    }

    /// The preceding month, or `None` before January of year 1.
    pub fn previous(&self) -> Option<Self> {
        let (month, rolled) = self.month.previous();
        let year = if rolled { self.year.pred()? } else { self.year };
        Some(Self { year, month })
    }

    /// Every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let first = self.first_day();
        let (year, month) = (self.year, self.month);
        std::iter::successors(Some(first), move |date| {
            date.succ().filter(|next| next.year() == year && next.month() == month)
        })
    }
}

/// How a day cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Inside a busy range; the cell is disabled.
    Busy,
    /// Part of the current selection.
    Selected,
    /// Available to click.
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub status: DayStatus,
}

impl DayCell {
    pub const fn is_clickable(&self) -> bool {
        !matches!(self.status, DayStatus::Busy)
    }
}

/// Snapshot of one month's grid, Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub label: String,
    pub weekdays: [&'static str; DAYS_PER_WEEK as usize],
    /// Empty cells before the 1st of the month.
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

impl MonthView {
    pub fn build(cursor: MonthCursor, busy: &BusyCalendar, selection: &Selection) -> Self {
        let days = cursor
            .days()
            .map(|date| {
                let status = if busy.is_busy(date) {
                    DayStatus::Busy
                } else if selection.covers(date) {
                    DayStatus::Selected
                } else {
                    DayStatus::Free
                };
                DayCell { date, status }
            })
            .collect();

        Self {
            label: cursor.label(),
            weekdays: WEEKDAY_LABELS,
            leading_blanks: cursor.first_day().weekday(),
            days,
        }
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.days.iter().find(|cell| cell.date == date)
    }

    pub fn count(&self, status: DayStatus) -> usize {
        self.days.iter().filter(|cell| cell.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use crate::{BusyRange, types::days_in_month};

    fn cursor(year: u16, month: u8) -> MonthCursor {
        MonthCursor::new(Year::new(year).unwrap(), Month::new(month).unwrap())
    }

    #[test]
    fn test_label() {
        assert_eq!(cursor(2025, 10).label(), "October 2025");
        assert_eq!(cursor(2026, 1).label(), "January 2026");
        assert_eq!(cursor(2025, 10).to_string(), "2025-10");
    }

    #[test]
    fn test_next_and_previous_cross_year() {
        assert_eq!(cursor(2025, 12).next(), Some(cursor(2026, 1)));
        assert_eq!(cursor(2026, 1).previous(), Some(cursor(2025, 12)));
        assert_eq!(cursor(2025, 6).next(), Some(cursor(2025, 7)));
        assert_eq!(cursor(9999, 12).next(), None);
        assert_eq!(cursor(1, 1).previous(), None);
    }

    #[test]
    fn test_twelve_steps_forward_advance_one_year() {
        for month in 1..=12 {
            let start = cursor(2025, month);
            let mut current = start;
            for _ in 0..12 {
                current = current.next().unwrap();
            }
            assert_eq!(current, cursor(2026, month));

            for _ in 0..12 {
                current = current.previous().unwrap();
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn test_days_cover_whole_month() {
        for (year, month) in [(2025, 10), (2025, 2), (2024, 2), (2025, 12)] {
            let c = cursor(year, month);
            let days: Vec<_> = c.days().collect();
            assert_eq!(days.len(), usize::from(days_in_month(year, month)));
            assert_eq!(days.first(), Some(&c.first_day()));
            assert_eq!(days.last().map(CalendarDate::month), Some(c.month()));
        }
    }

    #[test]
    fn test_view_marks_busy_and_selected_days() {
        let range = BusyRange::new(date("2025-10-12"), date("2025-10-18")).unwrap();
        let busy = BusyCalendar::new([range]);
        let selection = Selection::Committed {
            start: date("2025-10-01"),
            end: date("2025-10-05"),
        };

        let view = MonthView::build(cursor(2025, 10), &busy, &selection);

        assert_eq!(view.label, "October 2025");
        assert_eq!(view.weekdays[0], "Su");
        // 2025-10-01 is a Wednesday
        assert_eq!(view.leading_blanks, 3);
        assert_eq!(view.days.len(), 31);
        assert_eq!(view.count(DayStatus::Busy), 7);
        assert_eq!(view.count(DayStatus::Selected), 5);
        assert_eq!(view.count(DayStatus::Free), 19);

        let busy_cell = view.cell(date("2025-10-12")).unwrap();
        assert!(!busy_cell.is_clickable());
        assert_eq!(view.cell(date("2025-10-05")).unwrap().status, DayStatus::Selected);
        assert_eq!(view.cell(date("2025-10-06")).unwrap().status, DayStatus::Free);
    }

    #[test]
    fn test_view_marks_anchor_only() {
        let view = MonthView::build(
            cursor(2025, 10),
            &BusyCalendar::default(),
            &Selection::Anchored(date("2025-10-20")),
        );
        assert_eq!(view.count(DayStatus::Selected), 1);
        assert_eq!(view.cell(date("2025-10-20")).unwrap().status, DayStatus::Selected);
    }

    #[test]
    fn test_view_serializes_statuses() {
        let view = MonthView::build(cursor(2025, 2), &BusyCalendar::default(), &Selection::Empty);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["label"], "February 2025");
        assert_eq!(json["days"][0]["date"], "2025-02-01");
        assert_eq!(json["days"][0]["status"], "free");
        assert_eq!(json["leading_blanks"], 6);
    }
}
