//! Booking Status Model

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Guest-submitted request awaiting operator review
    #[default]
    Pending,
    Confirmed,
    Declined,
    /// Operator-created booking not yet confirmed (legacy entry state)
    ManualBooking,
    ManualConfirmed,
    /// Calendar block with no guest attached
    Blocked,
    /// Payment confirmed by the checkout provider; terminal
    Paid,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Declined => "declined",
            BookingStatus::ManualBooking => "manual booking",
            BookingStatus::ManualConfirmed => "manual confirmed",
            BookingStatus::Blocked => "blocked",
            BookingStatus::Paid => "paid",
        };
        f.write_str(name)
    }
}

/// How the record entered the system
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// Guest-submitted booking request
    #[default]
    Request,
    /// Operator-created booking (starts pre-confirmed)
    ManualBooking,
    /// Operator-created calendar block
    Blocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::ManualConfirmed).unwrap(),
            "\"MANUAL_CONFIRMED\""
        );
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"PAID\"").unwrap(),
            BookingStatus::Paid
        );
    }

    #[test]
    fn test_entry_kind_wire_format() {
        assert_eq!(
            serde_json::to_string(&EntryKind::ManualBooking).unwrap(),
            "\"MANUAL_BOOKING\""
        );
    }
}
