//! Booking Status Transitions
//!
//! Pure state machine, separate from persistence and invoice math so it is
//! testable in isolation.

use shared::{BookingStatus, EntryKind};

/// Status a record lands in after invoice finalization.
///
/// Already-paid and already-manual-confirmed records keep their status;
/// manual-booking entries are forced to `ManualConfirmed`; everything else
/// to `Confirmed`.
pub fn status_after_invoice(current: BookingStatus, kind: EntryKind) -> BookingStatus {
    match current {
        BookingStatus::Paid | BookingStatus::ManualConfirmed => current,
        _ => match kind {
            EntryKind::ManualBooking => BookingStatus::ManualConfirmed,
            _ => BookingStatus::Confirmed,
        },
    }
}

/// Whether an operator approve/decline action may move `from` to `to`.
///
/// Re-applying the current status is allowed (no-op in effect). A declined
/// booking may be re-approved. Paid records are frozen against operator
/// status changes; payment confirmation has its own path.
pub fn operator_transition_allowed(from: BookingStatus, to: BookingStatus) -> bool {
    use BookingStatus::*;
    match (from, to) {
        (Paid, _) => false,
        (f, t) if f == t => true,
        (Pending | Declined, Confirmed) => true,
        (Pending | Confirmed, Declined) => true,
        _ => false,
    }
}

/// Whether an operator may hard-delete a record with this status.
///
/// Only operator-created entries are deletable; guest-facing records
/// (pending/confirmed/declined/paid) never are.
pub fn deletable(status: BookingStatus) -> bool {
    matches!(
        status,
        BookingStatus::Blocked | BookingStatus::ManualBooking | BookingStatus::ManualConfirmed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BookingStatus::*;

    #[test]
    fn test_invoice_confirms_guest_records() {
        assert_eq!(status_after_invoice(Pending, EntryKind::Request), Confirmed);
        assert_eq!(
            status_after_invoice(Confirmed, EntryKind::Request),
            Confirmed
        );
        assert_eq!(
            status_after_invoice(Declined, EntryKind::Request),
            Confirmed
        );
    }

    #[test]
    fn test_invoice_on_manual_booking_confirms_manually() {
        assert_eq!(
            status_after_invoice(ManualBooking, EntryKind::ManualBooking),
            ManualConfirmed
        );
    }

    #[test]
    fn test_invoice_never_demotes_paid() {
        assert_eq!(status_after_invoice(Paid, EntryKind::Request), Paid);
        assert_eq!(status_after_invoice(Paid, EntryKind::ManualBooking), Paid);
    }

    #[test]
    fn test_invoice_keeps_manual_confirmed() {
        assert_eq!(
            status_after_invoice(ManualConfirmed, EntryKind::ManualBooking),
            ManualConfirmed
        );
    }

    #[test]
    fn test_approve_decline_lattice() {
        assert!(operator_transition_allowed(Pending, Confirmed));
        assert!(operator_transition_allowed(Pending, Declined));
        assert!(operator_transition_allowed(Confirmed, Declined));
        assert!(operator_transition_allowed(Declined, Confirmed));
    }

    #[test]
    fn test_reapply_is_allowed() {
        assert!(operator_transition_allowed(Confirmed, Confirmed));
        assert!(operator_transition_allowed(Declined, Declined));
    }

    #[test]
    fn test_paid_is_frozen_for_operators() {
        assert!(!operator_transition_allowed(Paid, Declined));
        assert!(!operator_transition_allowed(Paid, Confirmed));
    }

    #[test]
    fn test_no_operator_path_into_manual_states() {
        assert!(!operator_transition_allowed(Pending, ManualConfirmed));
        assert!(!operator_transition_allowed(Blocked, Confirmed));
    }

    #[test]
    fn test_delete_guard() {
        assert!(deletable(Blocked));
        assert!(deletable(ManualBooking));
        assert!(deletable(ManualConfirmed));
        for status in [Pending, Confirmed, Declined, Paid] {
            assert!(!deletable(status), "{status} must not be deletable");
        }
    }
}
