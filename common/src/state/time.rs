//! Display-ready time fields.
//!
//! The host delivers a timestamp once per minute; everything shown on
//! the face is derived here and never mutated directly. Formatting
//! follows the face's rules rather than any locale:
//!
//! - 24-hour mode: hour always two digits, no meridiem.
//! - 12-hour mode: hour 1-12 with no leading zero, meridiem "AM"/"PM".
//! - Date: two-digit day of month plus a three-letter weekday
//!   abbreviation forced to upper case.

use core::fmt::Write;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use heapless::String;

/// Derived text fields for the face. Mutated only via [`TimeModel::update`].
#[derive(Debug, Default)]
pub struct TimeModel {
    hour_text: String<4>,
    minute_text: String<4>,
    meridiem_text: String<4>,
    date_text: String<8>,
}

impl TimeModel {
    pub const fn new() -> Self {
        Self {
            hour_text: String::new(),
            minute_text: String::new(),
            meridiem_text: String::new(),
            date_text: String::new(),
        }
    }

    /// Re-derive all fields from a timestamp and the 12/24h flag.
    pub fn update(
        &mut self,
        now: NaiveDateTime,
        use_24h: bool,
    ) {
        self.hour_text.clear();
        if use_24h {
            let _ = write!(self.hour_text, "{:02}", now.hour());
        } else {
            // hour12() is 1..=12, which is the zero-padded 12-hour
            // value with the leading zero already stripped.
            let (_, hour12) = now.hour12();
            let _ = write!(self.hour_text, "{hour12}");
        }

        self.minute_text.clear();
        let _ = write!(self.minute_text, "{:02}", now.minute());

        self.meridiem_text.clear();
        if !use_24h {
            let (is_pm, _) = now.hour12();
            let _ = self.meridiem_text.push_str(if is_pm { "PM" } else { "AM" });
        }

        self.date_text.clear();
        let _ = write!(self.date_text, "{:02} ", now.day());
        for c in weekday_abbrev(now.weekday()).chars() {
            let _ = self.date_text.push(c.to_ascii_uppercase());
        }
    }

    /// Hour field. Two digits in 24-hour mode, 1-2 digits in 12-hour mode.
    #[inline]
    pub fn hour_text(&self) -> &str { self.hour_text.as_str() }

    /// Minute field, always two digits.
    #[inline]
    pub fn minute_text(&self) -> &str { self.minute_text.as_str() }

    /// "AM"/"PM" in 12-hour mode, empty in 24-hour mode.
    #[inline]
    pub fn meridiem_text(&self) -> &str { self.meridiem_text.as_str() }

    /// Day of month and upper-cased weekday, e.g. "09 SAT".
    #[inline]
    pub fn date_text(&self) -> &str { self.date_text.as_str() }
}

/// Three-letter weekday abbreviation. Mixed case on purpose: the
/// uppercase rule in [`TimeModel::update`] applies regardless of how
/// the source text is cased.
fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(
        hour: u32,
        minute: u32,
    ) -> NaiveDateTime {
        // 2024-03-09 is a Saturday
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_24h_afternoon() {
        let mut time = TimeModel::new();
        time.update(at(13, 5), true);
        assert_eq!(time.hour_text(), "13");
        assert_eq!(time.minute_text(), "05");
        assert_eq!(time.meridiem_text(), "", "no meridiem in 24-hour mode");
    }

    #[test]
    fn test_12h_early_morning_strips_leading_zero() {
        let mut time = TimeModel::new();
        time.update(at(1, 5), false);
        assert_eq!(time.hour_text(), "1");
        assert_eq!(time.minute_text(), "05");
        assert_eq!(time.meridiem_text(), "AM");
    }

    #[test]
    fn test_12h_hour_never_has_leading_zero() {
        let mut time = TimeModel::new();
        for hour in 0..24 {
            time.update(at(hour, 0), false);
            assert!(
                !time.hour_text().starts_with('0'),
                "12h hour {:?} must not start with '0'",
                time.hour_text()
            );
        }
    }

    #[test]
    fn test_24h_hour_always_two_digits() {
        let mut time = TimeModel::new();
        for hour in 0..24 {
            time.update(at(hour, 0), true);
            assert_eq!(time.hour_text().len(), 2, "24h hour must be two digits");
        }
    }

    #[test]
    fn test_12h_noon_and_midnight() {
        let mut time = TimeModel::new();
        time.update(at(0, 30), false);
        assert_eq!(time.hour_text(), "12");
        assert_eq!(time.meridiem_text(), "AM");

        time.update(at(12, 30), false);
        assert_eq!(time.hour_text(), "12");
        assert_eq!(time.meridiem_text(), "PM");
    }

    #[test]
    fn test_date_weekday_upper_cased() {
        let mut time = TimeModel::new();
        time.update(at(13, 5), true);
        assert_eq!(time.date_text(), "09 SAT");

        let (day_part, weekday_part) = time.date_text().split_once(' ').unwrap();
        assert_eq!(day_part.len(), 2, "day of month is zero-padded");
        assert!(
            weekday_part.chars().all(|c| c.is_ascii_uppercase()),
            "weekday must be fully upper-case"
        );
    }

    #[test]
    fn test_meridiem_cleared_when_switching_to_24h() {
        let mut time = TimeModel::new();
        time.update(at(15, 0), false);
        assert_eq!(time.meridiem_text(), "PM");

        time.update(at(15, 0), true);
        assert_eq!(time.meridiem_text(), "", "stale meridiem must not survive a mode switch");
        assert_eq!(time.hour_text(), "15");
    }
}
