//! Publishing status of a manga instance.
//!
//! Stored as its display string in the `manga_instances.status` column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceStatus {
    #[default]
    #[serde(rename = "Currently Publishing")]
    CurrentlyPublishing,
    #[serde(rename = "Finished Publishing")]
    FinishedPublishing,
}

impl InstanceStatus {
    /// Every status, in the order offered by the instance form.
    pub const ALL: [InstanceStatus; 2] = [Self::CurrentlyPublishing, Self::FinishedPublishing];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentlyPublishing => "Currently Publishing",
            Self::FinishedPublishing => "Finished Publishing",
        }
    }

    /// The status the catalog home counts as available: a finished run is
    /// complete on the shelf.
    pub const AVAILABLE: InstanceStatus = Self::FinishedPublishing;

    pub fn is_available(self) -> bool {
        self == Self::AVAILABLE
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown instance status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for InstanceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for InstanceStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
