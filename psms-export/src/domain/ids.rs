//! Identifier types for stations, problem banks and projects.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Error returned when an identifier is empty or zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

/// An id as it appears on the wire: the API mixes JSON numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_text(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

macro_rules! api_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal, zero_is_absent = $zero_is_absent:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Create an id from its textual form.
            ///
            /// Empty text is rejected. Where the API uses `0` to mean "no such
            /// record", `0` is rejected too.
            pub fn new(s: impl Into<String>) -> Result<Self, InvalidId> {
                let s = s.into();
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(InvalidId {
                        kind: $kind,
                        reason: "cannot be empty",
                    });
                }
                if $zero_is_absent && trimmed == "0" {
                    return Err(InvalidId {
                        kind: $kind,
                        reason: "zero is not a record id",
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<RawId> for $name {
            type Error = InvalidId;

            fn try_from(raw: RawId) -> Result<Self, Self::Error> {
                Self::new(raw.into_text())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = RawId::deserialize(deserializer)?;
                Self::try_from(raw).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

api_id!(
    /// Identifier of an allotted station (an employer placement slot).
    StationId,
    "station",
    zero_is_absent = false
);

api_id!(
    /// Identifier of the problem bank that groups a station's projects.
    ProblemBankId,
    "problem bank",
    zero_is_absent = true
);

api_id!(
    /// Identifier of a single project inside a problem bank.
    ProjectId,
    "project",
    zero_is_absent = false
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_strings() {
        let a: StationId = serde_json::from_str("1234").unwrap();
        let b: StationId = serde_json::from_str("\"1234\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "1234");
    }

    #[test]
    fn rejects_empty_and_zero() {
        assert!(ProblemBankId::new("").is_err());
        assert!(ProblemBankId::new("   ").is_err());
        assert!(ProblemBankId::new("0").is_err());
        assert!(serde_json::from_str::<ProblemBankId>("0").is_err());
    }

    #[test]
    fn zero_is_a_valid_station_and_project_id() {
        let station: StationId = serde_json::from_str("0").unwrap();
        assert_eq!(station.as_str(), "0");
        assert_eq!(ProjectId::new("0").unwrap().as_str(), "0");
        assert!(StationId::new("").is_err());
        assert!(ProjectId::new("").is_err());
    }

    #[test]
    fn raw_id_conversion() {
        let id = ProjectId::try_from(RawId::Number(77)).unwrap();
        assert_eq!(id.as_str(), "77");
        assert!(ProjectId::try_from(RawId::Text(String::new())).is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::new("42").unwrap();
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "StationId(42)");
    }

    #[test]
    fn error_display() {
        let err = StationId::new("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station id: cannot be empty");
    }
}
