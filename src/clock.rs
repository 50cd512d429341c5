//! Wall-clock text for the clock face and the date line.

use std::fmt;

use chrono::{Datelike, Month, Timelike, Weekday};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Clock face split into the digits and the AM/PM suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    /// `None` in 24-hour mode.
    pub suffix: Option<&'static str>,
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix {
            Some(suffix) => write!(f, "{} {}", self.time, suffix),
            None => f.write_str(&self.time),
        }
    }
}

pub fn clock_face<T: Timelike>(time: &T, use_24h: bool) -> ClockFace {
    let mut hour = time.hour();
    let mut suffix = None;

    if !use_24h {
        suffix = Some(if hour >= 12 { "PM" } else { "AM" });
        hour %= 12;
        if hour == 0 {
            hour = 12;
        }
    }

    ClockFace {
        time: format!("{:02} : {:02} : {:02}", hour, time.minute(), time.second()),
        suffix,
    }
}

pub fn format_clock<T: Timelike>(time: &T, use_24h: bool) -> String {
    clock_face(time, use_24h).to_string()
}

/// English ordinal suffix: 11th, 12th, 13th, otherwise by the last digit.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// `"Tuesday, March 21st, 2024"`.
pub fn compose_date(weekday: Weekday, month: Month, day: u32, year: i32) -> String {
    format!(
        "{}, {} {}{}, {}",
        weekday_name(weekday),
        month.name(),
        day,
        ordinal_suffix(day),
        year
    )
}

pub fn format_date<D: Datelike>(date: &D) -> String {
    // month() is always 1..=12
    let month = Month::try_from(date.month() as u8).unwrap_or(Month::January);
    compose_date(date.weekday(), month, date.day(), date.year())
}

/// Display-mode flag for the clock. The only state the clock carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockState {
    pub use_24h: bool,
}

impl ClockState {
    pub fn new(use_24h: bool) -> Self {
        Self { use_24h }
    }

    pub fn toggle(&mut self) {
        self.use_24h = !self.use_24h;
    }

    pub fn face<T: Timelike>(&self, time: &T) -> ClockFace {
        clock_face(time, self.use_24h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_toggle_changes_afternoon_display() {
        let time = at(13, 5, 9);
        let mut clock = ClockState::default();

        let face = clock.face(&time);
        assert_eq!(face.time, "01 : 05 : 09");
        assert_eq!(face.suffix, Some("PM"));

        clock.toggle();
        let face = clock.face(&time);
        assert_eq!(face.time, "13 : 05 : 09");
        assert_eq!(face.suffix, None);
        assert_eq!(face.to_string(), "13 : 05 : 09");
    }

    #[test]
    fn test_midnight_and_noon_in_12h() {
        assert_eq!(format_clock(&at(0, 0, 0), false), "12 : 00 : 00 AM");
        assert_eq!(format_clock(&at(12, 30, 0), false), "12 : 30 : 00 PM");
        assert_eq!(format_clock(&at(0, 0, 0), true), "00 : 00 : 00");
    }

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_compose_date() {
        assert_eq!(
            compose_date(Weekday::Tue, Month::March, 21, 2024),
            "Tuesday, March 21st, 2024"
        );
        assert_eq!(
            compose_date(Weekday::Mon, Month::March, 11, 2024),
            "Monday, March 11th, 2024"
        );
    }

    #[test]
    fn test_format_date_uses_calendar_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
        assert_eq!(format_date(&date), "Thursday, March 21st, 2024");
        let date = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();
        assert_eq!(format_date(&date), "Tuesday, March 19th, 2024");
    }
}
