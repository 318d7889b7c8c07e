use serde::{Serialize, Serializer};
use std::fmt;
use strum::EnumString;

/// Subscription state reported by the backend status check.
///
/// Values are matched exactly (case-sensitive); anything else is kept verbatim in
/// [`CustomerStatus::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    /// New customer, no portal yet.
    Available,
    /// A portal already exists.
    Fulfilled,
    /// Registered, portal creation still pending.
    Registered,
    /// A previous creation attempt failed; the customer may retry.
    CreationFailed,
    /// Registration went stale; start over.
    StaleRegistration,
    #[strum(default)]
    Unknown(String),
}

impl CustomerStatus {
    /// Reads a status as sent by the backend; unrecognized values land in [`Self::Unknown`].
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| Self::Unknown(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Fulfilled => "FULFILLED",
            Self::Registered => "REGISTERED",
            Self::CreationFailed => "CREATION_FAILED",
            Self::StaleRegistration => "STALE_REGISTRATION",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CustomerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
