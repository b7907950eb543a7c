//! Time-of-day value carried separately from the appointment date.
//!
//! # Invariants
//! - Text form is always `HH:MM` with zero padding, so lexicographic order
//!   and chronological order agree within a day.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Start or end time of an appointment, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

/// Rejected `HH:MM` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTimeError {
    input: String,
}

impl Display for ClockTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid time `{}`; expected zero-padded HH:MM", self.input)
    }
}

impl Error for ClockTimeError {}

impl ClockTime {
    /// Builds a time from hour and minute, `None` when out of range.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Parses strict `HH:MM` text.
    pub fn parse(input: &str) -> Result<Self, ClockTimeError> {
        let invalid = || ClockTimeError {
            input: input.to_string(),
        };

        let bytes = input.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let hour = two_digits(bytes[0], bytes[1]).ok_or_else(invalid)?;
        let minute = two_digits(bytes[3], bytes[4]).ok_or_else(invalid)?;
        Self::new(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

fn two_digits(high: u8, low: u8) -> Option<u8> {
    if !high.is_ascii_digit() || !low.is_ascii_digit() {
        return None;
    }
    Some((high - b'0') * 10 + (low - b'0'))
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::ClockTime;

    #[test]
    fn parse_accepts_zero_padded_values() {
        let time = ClockTime::parse("07:05").unwrap();
        assert_eq!(time.hour(), 7);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn parse_rejects_unpadded_and_out_of_range() {
        for input in ["7:05", "24:00", "12:60", "12-30", "", "ab:cd", "12:300"] {
            assert!(ClockTime::parse(input).is_err(), "accepted `{input}`");
        }
    }

    #[test]
    fn ordering_matches_text_ordering() {
        let mut values = ["15:00", "09:30", "09:05", "23:59", "00:00"];
        let mut times: Vec<ClockTime> = values
            .iter()
            .map(|value| ClockTime::parse(value).unwrap())
            .collect();
        values.sort();
        times.sort();
        let rendered: Vec<String> = times.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, values);
    }
}
