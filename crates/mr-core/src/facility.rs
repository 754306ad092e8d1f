//! Facility category enum.
//!
//! The three built-in variants cover the facility kinds the network is
//! normally seeded with.  Anything else parses into `Other`, so new kinds do
//! not require a code change.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of medical facility a node represents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Hospital,
    UrgentCare,
    EmergencyRoom,
    /// Free-form category, stored as given.
    Other(String),
}

impl Category {
    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Hospital      => "hospital",
            Category::UrgentCare    => "urgent-care",
            Category::EmergencyRoom => "emergency-room",
            Category::Other(s)      => s,
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    /// Case-insensitive; `_` and `-` are interchangeable.  Never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Ok(match key.as_str() {
            "hospital"       => Category::Hospital,
            "urgent-care"    => Category::UrgentCare,
            "emergency-room" => Category::EmergencyRoom,
            _                => Category::Other(s.trim().to_string()),
        })
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(c) => c,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
