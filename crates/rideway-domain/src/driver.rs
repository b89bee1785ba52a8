//! Driver domain types.

use serde::{Deserialize, Serialize};

/// Review state of a driver profile.
///
/// Wire format: lowercase string, matching the `driver_profiles.approval_status`
/// column. New profiles start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Convert from the stored string value. Returns `None` for unknown values.
    pub fn from_name(v: &str) -> Option<Self> {
        match v {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        Self::Pending
    }
}
