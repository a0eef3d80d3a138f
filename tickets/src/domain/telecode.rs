//! Station telecode type.

use std::fmt;

/// Error returned when parsing an invalid telecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid telecode: {reason}")]
pub struct InvalidTelecode {
    reason: &'static str,
}

/// A station telecode as used by the ticketing service (e.g. "BJP").
///
/// Telecodes are one or more uppercase ASCII letters. This type guarantees
/// that any `Telecode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use tickets::domain::Telecode;
///
/// let bjp = Telecode::parse("BJP").unwrap();
/// assert_eq!(bjp.as_str(), "BJP");
///
/// // Lowercase is rejected
/// assert!(Telecode::parse("bjp").is_err());
///
/// // Empty is rejected
/// assert!(Telecode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Telecode(String);

impl Telecode {
    /// Parse a telecode from a string.
    ///
    /// The input must be non-empty and contain only uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidTelecode> {
        if s.is_empty() {
            return Err(InvalidTelecode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidTelecode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Telecode(s.to_string()))
    }

    /// Returns the telecode as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Telecode {
    type Error = InvalidTelecode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Telecode> for String {
    fn from(code: Telecode) -> Self {
        code.0
    }
}

impl fmt::Debug for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Telecode({})", self.0)
    }
}

impl fmt::Display for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_telecodes() {
        assert!(Telecode::parse("BJP").is_ok());
        assert!(Telecode::parse("SHH").is_ok());
        assert!(Telecode::parse("A").is_ok());
        assert!(Telecode::parse("ABCDE").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Telecode::parse("bjp").is_err());
        assert!(Telecode::parse("Bjp").is_err());
    }

    #[test]
    fn reject_empty() {
        assert!(Telecode::parse("").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Telecode::parse("B1P").is_err());
        assert!(Telecode::parse("B P").is_err());
        assert!(Telecode::parse("北京").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = Telecode::parse("SHH").unwrap();
        assert_eq!(format!("{}", code), "SHH");
        assert_eq!(format!("{:?}", code), "Telecode(SHH)");
    }

    #[test]
    fn serde_validates() {
        let code: Telecode = serde_json::from_str("\"BJP\"").unwrap();
        assert_eq!(code.as_str(), "BJP");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"BJP\"");
        assert!(serde_json::from_str::<Telecode>("\"bjp\"").is_err());
    }
}
