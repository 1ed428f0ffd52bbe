use serde::{Deserialize, Serialize};

use crate::{AvailabilityCalendar, CalendarDate, STAY_SEPARATOR, Selection};

/// Selection-changed notification: ISO dates, empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    pub checkin: String,
    pub checkout: String,
}

impl StayDates {
    /// Value of the booking form's date field: `checkin → checkout`, just
    /// `checkin`, or empty.
    pub fn field_value(&self) -> String {
        match (self.checkin.is_empty(), self.checkout.is_empty()) {
            (false, false) => format!("{}{STAY_SEPARATOR}{}", self.checkin, self.checkout),
            (false, true) => self.checkin.clone(),
            (true, _) => String::new(),
        }
    }
}

impl From<&Selection> for StayDates {
    fn from(selection: &Selection) -> Self {
        Self {
            checkin: iso(selection.start()),
            checkout: iso(selection.end()),
        }
    }
}

fn iso(date: Option<CalendarDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// State of the reservation inquiry form that consumes calendar selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    hidden_date: String,
    display_date: String,
    thank_you: bool,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value submitted with the form.
    pub fn hidden_date(&self) -> &str {
        &self.hidden_date
    }

    /// Read-only date field shown to the guest.
    pub fn display_date(&self) -> &str {
        &self.display_date
    }

    pub const fn thank_you_visible(&self) -> bool {
        self.thank_you
    }

    /// Updates both date fields from a selection-changed notification.
    pub fn apply(&mut self, dates: &StayDates) {
        self.set_date(dates.field_value());
    }

    /// Empties the date fields. The calendar keeps its selection.
    pub fn clear(&mut self) {
        self.set_date(String::new());
    }

    /// Starts over: hides the thank-you message, clears the form and resets
    /// the calendar selection.
    pub fn new_request(&mut self, calendar: &mut AvailabilityCalendar) {
        self.thank_you = false;
        self.clear();
        let update = calendar.reset();
        self.apply(&update.dates);
        tracing::debug!("started new booking request");
    }

    /// Prepares the form for submission and returns the date value to send.
    ///
    /// Falls back to the calendar's current selection when no notification
    /// has filled the field yet.
    pub fn prepare_submit(&mut self, calendar: &AvailabilityCalendar) -> String {
        if self.hidden_date.is_empty() {
            let fallback = calendar.get_selection().field_value();
            if !fallback.is_empty() {
                tracing::debug!(date = %fallback, "filling booking date from calendar selection");
                self.hidden_date = fallback;
            }
            self.display_date.clone_from(&self.hidden_date);
        }
        self.thank_you = true;
        self.hidden_date.clone()
    }

    fn set_date(&mut self, value: String) {
        self.display_date.clone_from(&value);
        self.hidden_date = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarConfig;
    use crate::test_utils::date;

    fn stay(checkin: &str, checkout: &str) -> StayDates {
        StayDates {
            checkin: checkin.to_owned(),
            checkout: checkout.to_owned(),
        }
    }

    fn calendar() -> AvailabilityCalendar {
        let config = CalendarConfig::from_range_strs(["2025-10-12/2025-10-18"]).unwrap();
        AvailabilityCalendar::new(&config, date("2025-10-01"))
    }

    #[test]
    fn test_field_value_cases() {
        struct TestCase {
            dates: StayDates,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                dates: stay("2025-10-01", "2025-10-05"),
                expected: "2025-10-01 → 2025-10-05",
            },
            TestCase {
                dates: stay("2025-10-01", ""),
                expected: "2025-10-01",
            },
            TestCase {
                dates: stay("", ""),
                expected: "",
            },
        ];

        for case in &cases {
            assert_eq!(case.dates.field_value(), case.expected);
        }
    }

    #[test]
    fn test_from_selection() {
        assert_eq!(StayDates::from(&Selection::Empty), stay("", ""));
        assert_eq!(
            StayDates::from(&Selection::Anchored(date("2025-10-01"))),
            stay("2025-10-01", "")
        );
        assert_eq!(
            StayDates::from(&Selection::Committed {
                start: date("2025-10-01"),
                end: date("2025-10-05"),
            }),
            stay("2025-10-01", "2025-10-05")
        );
    }

    #[test]
    fn test_serializes_as_event_detail() {
        let json = serde_json::to_string(&stay("2025-10-01", "2025-10-05")).unwrap();
        assert_eq!(json, r#"{"checkin":"2025-10-01","checkout":"2025-10-05"}"#);
    }

    #[test]
    fn test_apply_follows_calendar_updates() {
        let mut calendar = calendar();
        let mut form = BookingForm::new();

        form.apply(&calendar.day_clicked(date("2025-10-01")).dates);
        assert_eq!(form.hidden_date(), "2025-10-01");
        assert_eq!(form.display_date(), "2025-10-01");

        form.apply(&calendar.day_clicked(date("2025-10-05")).dates);
        assert_eq!(form.hidden_date(), "2025-10-01 → 2025-10-05");

        form.apply(&calendar.day_clicked(date("2025-10-20")).dates);
        let update = calendar.day_clicked(date("2025-10-10"));
        assert!(update.conflict.is_some());
        form.apply(&update.dates);
        assert_eq!(form.hidden_date(), "");
        assert_eq!(form.display_date(), "");
    }

    #[test]
    fn test_clear_keeps_calendar_selection() {
        let mut calendar = calendar();
        let mut form = BookingForm::new();
        calendar.day_clicked(date("2025-10-01"));
        form.apply(&calendar.day_clicked(date("2025-10-05")).dates);

        form.clear();
        assert_eq!(form.hidden_date(), "");
        assert!(!calendar.selection().is_empty());
    }

    #[test]
    fn test_submit_falls_back_to_calendar_selection() {
        let mut calendar = calendar();
        calendar.day_clicked(date("2025-10-01"));
        calendar.day_clicked(date("2025-10-05"));

        let mut form = BookingForm::new();
        assert_eq!(form.prepare_submit(&calendar), "2025-10-01 → 2025-10-05");
        assert_eq!(form.display_date(), "2025-10-01 → 2025-10-05");
        assert!(form.thank_you_visible());
    }

    #[test]
    fn test_submit_keeps_existing_field() {
        let mut calendar = calendar();
        let mut form = BookingForm::new();
        form.apply(&calendar.day_clicked(date("2025-10-01")).dates);
        calendar.day_clicked(date("2025-10-05"));

        assert_eq!(form.prepare_submit(&calendar), "2025-10-01");
    }

    #[test]
    fn test_submit_without_selection_sends_empty_date() {
        let calendar = calendar();
        let mut form = BookingForm::new();
        assert_eq!(form.prepare_submit(&calendar), "");
        assert!(form.thank_you_visible());
    }

    #[test]
    fn test_new_request_resets_everything() {
        let mut calendar = calendar();
        let mut form = BookingForm::new();
        calendar.day_clicked(date("2025-10-01"));
        form.apply(&calendar.day_clicked(date("2025-10-05")).dates);
        form.prepare_submit(&calendar);

        form.new_request(&mut calendar);
        assert!(!form.thank_you_visible());
        assert_eq!(form.hidden_date(), "");
        assert_eq!(form.display_date(), "");
        assert_eq!(calendar.selection(), Selection::Empty);
    }
}
