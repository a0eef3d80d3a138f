//! Travel duration handling.
//!
//! The ticketing service reports durations as "H:MM" strings where the hour
//! count is not wrapped at 24, so multi-day journeys show up as e.g. "26:15".

use std::fmt;

/// Error returned when parsing an invalid duration string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration {input:?}: {reason}")]
pub struct DurationError {
    input: String,
    reason: &'static str,
}

impl DurationError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Total travel time of a train between the queried stations.
///
/// Displays in Chinese units. Journeys of a day or more end in "分", shorter
/// ones in "钟"; this matches what the ticketing site has always shown.
///
/// # Examples
///
/// ```
/// use tickets::domain::TravelDuration;
///
/// assert_eq!(TravelDuration::parse("0:05").unwrap().to_string(), "5钟");
/// assert_eq!(TravelDuration::parse("2:30").unwrap().to_string(), "2时30钟");
/// assert_eq!(TravelDuration::parse("26:15").unwrap().to_string(), "1天2时15分");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TravelDuration {
    hours: u32,
    minutes: u32,
}

impl TravelDuration {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Parse a duration from "H:MM" format.
    ///
    /// Both parts must be unsigned integers. Hours may exceed 24.
    pub fn parse(s: &str) -> Result<Self, DurationError> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| DurationError::new(s, "expected H:MM format"))?;

        let hours = hours
            .parse::<u32>()
            .map_err(|_| DurationError::new(s, "invalid hours"))?;
        let minutes = minutes
            .parse::<u32>()
            .map_err(|_| DurationError::new(s, "invalid minutes"))?;

        Ok(Self { hours, minutes })
    }

    /// Whole days.
    pub fn days(&self) -> u32 {
        self.hours / 24
    }

    /// Hours left over after whole days.
    pub fn remaining_hours(&self) -> u32 {
        self.hours % 24
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Total hours as reported (not wrapped at 24).
    pub fn total_hours(&self) -> u32 {
        self.hours
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.days();
        let hours = self.remaining_hours();
        if days > 0 {
            write!(f, "{}天{}时{}分", days, hours, self.minutes)
        } else if hours > 0 {
            write!(f, "{}时{}钟", hours, self.minutes)
        } else {
            write!(f, "{}钟", self.minutes)
        }
    }
}
