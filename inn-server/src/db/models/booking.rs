//! Booking Record Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{BookingStatus, EntryKind, InvoiceSnapshot, StayInterval};
use surrealdb::RecordId;

/// Booking entity: a guest reservation or an operator-created calendar entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Guest name, or a label for manual/blocked entries
    pub name: String,
    /// Contact email; absent for blocked entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
    pub kind: EntryKind,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Finalized invoice, set once an operator confirms the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceSnapshot>,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}

impl BookingRecord {
    pub fn stay(&self) -> StayInterval {
        StayInterval::new(self.check_in, self.check_out, self.guest_count)
    }

    /// Full record id as "booking:key", if persisted
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }

    /// Bare record key (without the table prefix), if persisted
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.key().to_string())
    }
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub name: String,
    pub email: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
    pub kind: EntryKind,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

/// Status-only merge patch
#[derive(Debug, Clone, Serialize)]
pub struct BookingStatusPatch {
    pub status: BookingStatus,
    pub updated_at: i64,
}

/// Invoice finalization merge patch: snapshot, derived status and the
/// (possibly operator-edited) stay fields
#[derive(Debug, Clone, Serialize)]
pub struct BookingInvoicePatch {
    pub status: BookingStatus,
    pub invoice: InvoiceSnapshot,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
    pub updated_at: i64,
}
