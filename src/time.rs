use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Clock time in minutes since midnight.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, PartialOrd)]
pub struct Time(pub u16);

#[derive(Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

impl Time {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    pub(crate) const fn hm(hours: u16, minutes: u16) -> Time {
        Time(hours * 60 + minutes)
    }

    pub fn hours(self) -> u16 {
        self.0 / 60
    }

    pub fn minutes(self) -> u16 {
        self.0 % 60
    }

    /// False for values at or past midnight of the next day.
    pub fn is_clock_time(self) -> bool {
        self.0 < Self::MINUTES_PER_DAY
    }

    /// Closed intervals: touching endpoints overlap.
    pub(crate) fn is_overlapping(time: &(Time, Time), window: &(Time, Time)) -> bool {
        time.0 <= window.1 && time.1 >= window.0
    }
}

/// Parses a 12-hour clock string such as `"1:32pm"` or `"7:05 AM"`.
pub fn normalize_time(raw: &str) -> Result<Time, ParseError> {
    let lower = raw.trim().to_ascii_lowercase();
    let (clock, meridiem) = if let Some(clock) = lower.strip_suffix("am") {
        (clock, Meridiem::Am)
    } else if let Some(clock) = lower.strip_suffix("pm") {
        (clock, Meridiem::Pm)
    } else {
        return Err(ParseError::MissingMarker(raw.to_string()));
    };

    let (hour, minute) = clock
        .trim_end()
        .split_once(':')
        .ok_or_else(|| ParseError::Malformed(raw.to_string()))?;
    let is_number = |s: &str, max_len: usize| {
        !s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_number(hour, 2) || !is_number(minute, 2) || minute.len() != 2 {
        return Err(ParseError::Malformed(raw.to_string()));
    }

    let hour: u16 = hour
        .parse()
        .map_err(|_| ParseError::Malformed(raw.to_string()))?;
    let minute: u16 = minute
        .parse()
        .map_err(|_| ParseError::Malformed(raw.to_string()))?;
    if !(1..=12).contains(&hour) {
        return Err(ParseError::HourOutOfRange(raw.to_string()));
    }
    if minute > 59 {
        return Err(ParseError::MinuteOutOfRange(raw.to_string()));
    }

    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };
    Ok(Time::hm(hour, minute))
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_time(s)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn norm(s: &str) -> String {
        normalize_time(s).unwrap().to_string()
    }

    #[test]
    fn test_basic_conversion() {
        assert_eq!("13:32", norm("1:32pm"));
        assert_eq!("13:00", norm("1:00 pm"));
        assert_eq!("03:00", norm("3:00 am"));
        assert_eq!("15:00", norm("3:00 pm"));
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!("00:00", norm("12:00am"));
        assert_eq!("12:00", norm("12:00pm"));
        assert_eq!("00:45", norm("12:45 am"));
        assert_eq!("12:45", norm("12:45 PM"));
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!("07:05", norm("7:05am"));
        assert_eq!("19:05", norm("7:05pm"));
        assert_eq!("03:09", norm("3:09 am"));
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!("09:30", norm("  9:30 AM "));
        assert_eq!("21:30", norm("9:30Pm"));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            Err(ParseError::MissingMarker("9:30".into())),
            normalize_time("9:30")
        );
        assert_eq!(Err(ParseError::Malformed("930am".into())), normalize_time("930am"));
        assert_eq!(Err(ParseError::Malformed("9:5am".into())), normalize_time("9:5am"));
        assert_eq!(Err(ParseError::Malformed("am".into())), normalize_time("am"));
        assert_eq!(
            Err(ParseError::HourOutOfRange("13:00pm".into())),
            normalize_time("13:00pm")
        );
        assert_eq!(
            Err(ParseError::HourOutOfRange("0:15am".into())),
            normalize_time("0:15am")
        );
        assert_eq!(
            Err(ParseError::MinuteOutOfRange("10:60am".into())),
            normalize_time("10:60am")
        );
    }

    #[test]
    fn test_every_clock_value_is_unique() {
        let mut seen = HashSet::new();
        for marker in ["am", "pm"] {
            for hour in 1..=12 {
                for minute in 0..60 {
                    let t = normalize_time(&format!("{}:{:02}{}", hour, minute, marker)).unwrap();
                    assert!(t.is_clock_time());
                    assert_eq!(5, t.to_string().len());
                    assert!(seen.insert(t));
                }
            }
        }
        assert_eq!(24 * 60, seen.len());
    }

    #[test]
    fn test_touching_intervals_overlap() {
        let a = (Time::hm(14, 0), Time::hm(15, 0));
        assert!(Time::is_overlapping(&a, &(Time::hm(15, 0), Time::hm(16, 0))));
        assert!(Time::is_overlapping(&a, &(Time::hm(13, 0), Time::hm(14, 0))));
        assert!(!Time::is_overlapping(&a, &(Time::hm(15, 1), Time::hm(16, 0))));
    }

    proptest! {
        #[test]
        fn test_display_matches_clock(hour in 1..=12u16, minute in 0..60u16, pm in any::<bool>()) {
            let raw = format!("{}:{:02} {}", hour, minute, if pm { "pm" } else { "am" });
            let t = normalize_time(&raw).unwrap();
            prop_assert_eq!(minute, t.minutes());
            prop_assert_eq!(pm, t.hours() >= 12);
            prop_assert_eq!(hour % 12, t.hours() % 12);
        }
    }
}
