use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn abbrev(self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
            Day::Saturday => "Sat",
            Day::Sunday => "Sun",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for Day {
    type Err = ParseError;

    /// Accepts full names, `Mon`, `Mo` and the single letter registrar codes
    /// (`R` for Thursday, `U` for Sunday).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" | "mo" | "m" => Day::Monday,
            "tuesday" | "tue" | "tues" | "tu" | "t" => Day::Tuesday,
            "wednesday" | "wed" | "we" | "w" => Day::Wednesday,
            "thursday" | "thu" | "thur" | "thurs" | "th" | "r" => Day::Thursday,
            "friday" | "fri" | "fr" | "f" => Day::Friday,
            "saturday" | "sat" | "sa" | "s" => Day::Saturday,
            "sunday" | "sun" | "su" | "u" => Day::Sunday,
            _ => return Err(ParseError::UnknownDay(s.to_string())),
        };
        Ok(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Set of weekdays, fixed once built.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySet(u8);

impl DaySet {
    pub fn new(days: impl IntoIterator<Item = Day>) -> DaySet {
        DaySet(days.into_iter().fold(0, |acc, d| acc | d.bit()))
    }

    /// Parses comma and/or whitespace delimited day tokens, e.g. `"M, W, F"`.
    pub fn parse(raw: &str) -> Result<DaySet, ParseError> {
        Self::parse_tokens(raw.split(|c: char| c == ',' || c.is_whitespace()))
    }

    pub fn parse_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<DaySet, ParseError> {
        tokens
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Day::from_str)
            .collect()
    }

    pub fn contains(self, day: Day) -> bool {
        self.0 & day.bit() != 0
    }

    pub fn intersects(self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Day> {
        Day::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        DaySet::new(iter)
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Day::abbrev).collect();
        f.write_str(&names.join(","))
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
