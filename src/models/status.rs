use std::fmt;

/// Derived operating status of the tracker. Never stored: always recomputed
/// from the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    /// No open entry for the user.
    Idle,
    /// Exactly one open entry exists.
    ClockedIn,
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Idle => "clocked out",
            TrackingStatus::ClockedIn => "clocked in",
        }
    }

    pub fn is_clocked_in(&self) -> bool {
        matches!(self, TrackingStatus::ClockedIn)
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
