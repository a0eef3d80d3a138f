//! Travel date validation.

use std::fmt;

use chrono::NaiveDate;

use super::error::InputError;

/// A validated travel date: "YYYY-MM-DD", not in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse a travel date, rejecting dates before `today`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tickets::domain::TravelDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// assert!(TravelDate::parse("2024-03-15", today).is_ok());
    /// assert!(TravelDate::parse("2024-03-14", today).is_err());
    /// assert!(TravelDate::parse("15/03/2024", today).is_err());
    /// ```
    pub fn parse(s: &str, today: NaiveDate) -> Result<Self, InputError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| InputError::InvalidDate(s.to_string()))?;

        if date < today {
            return Err(InputError::InvalidDate(s.to_string()));
        }

        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
