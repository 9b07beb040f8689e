//! BookingManager - booking lifecycle orchestration
//!
//! Coordinates validation, the status state machine, persistence and the
//! best-effort guest notification.
//!
//! # Failure policy
//!
//! Every operation returns an [`ActionResponse`] instead of an error:
//! store failures are caught at the operation boundary and converted into
//! `{success: false, message}`, email failures are downgraded to a
//! `notice` on an otherwise-successful result. The invoice email is sent
//! strictly after the durable write and never rolls it back — losing a
//! persisted invoice over a failed SMTP call would be the worse outcome.

use super::transitions;
use crate::db::models::{BookingCreate, BookingInvoicePatch, BookingRecord};
use crate::db::repository::{BookingRepository, RateTableRepository, RepoError, RepoResult};
use crate::notify::{Mailer, template};
use crate::payments;
use crate::pricing;
use shared::{
    ActionResponse, BookingStatus, EntryKind, InvoiceCalculation, InvoiceSnapshot, StayInterval,
};
use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Guest-submitted booking request
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub stay: StayInterval,
    pub notes: Option<String>,
}

/// Operator-created calendar entry (manual booking or block)
#[derive(Debug, Clone)]
pub struct ManualEntry {
    pub kind: EntryKind,
    pub name: String,
    pub email: Option<String>,
    pub stay: StayInterval,
    pub notes: Option<String>,
}

/// Booking lifecycle manager
///
/// Dependencies are injected at construction; no ambient globals. One
/// instance per server, cheap to clone via the shared database handle.
pub struct BookingManager {
    bookings: BookingRepository,
    rates: RateTableRepository,
    mailer: Arc<dyn Mailer>,
    checkout_base_url: String,
}

impl std::fmt::Debug for BookingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingManager")
            .field("checkout_base_url", &self.checkout_base_url)
            .finish()
    }
}

impl BookingManager {
    pub fn new(
        db: Surreal<Db>,
        mailer: Arc<dyn Mailer>,
        checkout_base_url: impl Into<String>,
    ) -> Self {
        Self {
            bookings: BookingRepository::new(db.clone()),
            rates: RateTableRepository::new(db),
            mailer,
            checkout_base_url: checkout_base_url.into(),
        }
    }

    /// Accept a guest booking request; the record starts `Pending`.
    ///
    /// No retry on persistence failure: the guest is asked to try again.
    pub async fn submit_request(&self, req: BookingRequest) -> ActionResponse {
        if !req.stay.is_billable() {
            return ActionResponse::failed(
                "Check-out must be after check-in and at least one guest is required",
            );
        }

        let create = BookingCreate {
            name: req.name,
            email: Some(req.email),
            check_in: req.stay.check_in,
            check_out: req.stay.check_out,
            guest_count: req.stay.guests,
            kind: EntryKind::Request,
            status: BookingStatus::Pending,
            notes: req.notes,
        };
        match self.bookings.create(create).await {
            Ok(record) => ActionResponse::ok_with_id(
                "Booking request received",
                record.id_string().unwrap_or_default(),
            ),
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist booking request");
                ActionResponse::failed("Could not submit your request, please try again")
            }
        }
    }

    /// Create an operator entry: blocks start `Blocked`, manual bookings
    /// start pre-confirmed (`ManualConfirmed`).
    pub async fn create_manual_entry(&self, entry: ManualEntry) -> ActionResponse {
        let status = match entry.kind {
            EntryKind::Blocked => BookingStatus::Blocked,
            EntryKind::ManualBooking => BookingStatus::ManualConfirmed,
            EntryKind::Request => {
                return ActionResponse::failed("Guest requests go through the booking form");
            }
        };
        if entry.stay.nights() < 1 {
            return ActionResponse::failed("Check-out must be after check-in");
        }

        let create = BookingCreate {
            name: entry.name,
            email: entry.email,
            check_in: entry.stay.check_in,
            check_out: entry.stay.check_out,
            guest_count: entry.stay.guests,
            kind: entry.kind,
            status,
            notes: entry.notes,
        };
        match self.bookings.create(create).await {
            Ok(record) => ActionResponse::ok_with_id(
                "Calendar entry created",
                record.id_string().unwrap_or_default(),
            ),
            Err(e) => Self::store_failure(e),
        }
    }

    /// Operator approve/decline action
    pub async fn set_status(&self, id: &str, new_status: BookingStatus) -> ActionResponse {
        let record = match self.bookings.find_by_id(id).await {
            Ok(Some(record)) => record,
            Ok(None) => return ActionResponse::failed(format!("Booking {} not found", id)),
            Err(e) => return Self::store_failure(e),
        };

        if !transitions::operator_transition_allowed(record.status, new_status) {
            return ActionResponse::failed(format!(
                "A {} booking cannot be changed to {}",
                record.status, new_status
            ));
        }

        match self.bookings.update_status(id, new_status).await {
            Ok(updated) => ActionResponse::ok(format!("Booking is now {}", updated.status)),
            Err(e) => Self::store_failure(e),
        }
    }

    /// Price a stay against the current rate table without persisting.
    ///
    /// Used for the interactive recalculate in the admin workflow; the
    /// calculation itself is pure.
    pub async fn quote(&self, stay: &StayInterval) -> RepoResult<InvoiceCalculation> {
        let rates = self.rates.get_current().await?;
        Ok(pricing::compute_invoice(stay, &rates))
    }

    /// Finalize the invoice on a booking.
    ///
    /// Recomputes the total from the (possibly operator-edited) stay and
    /// the current rate table; `override_amount`, when given, wins over
    /// the computed total. Derives the post-invoice status, persists the
    /// snapshot, then attempts the payment email as a best-effort step
    /// whose outcome lands in `notice`.
    pub async fn finalize_invoice(
        &self,
        id: &str,
        stay: StayInterval,
        recipient: &str,
        override_amount: Option<f64>,
    ) -> ActionResponse {
        let record = match self.bookings.find_by_id(id).await {
            Ok(Some(record)) => record,
            Ok(None) => return ActionResponse::failed(format!("Booking {} not found", id)),
            Err(e) => return Self::store_failure(e),
        };

        let rates = match self.rates.get_current().await {
            Ok(rates) => rates,
            Err(e) => return Self::store_failure(e),
        };
        let calc = pricing::compute_invoice(&stay, &rates);
        if calc.is_error() {
            return ActionResponse::failed(format!(
                "{}: the stay cannot be invoiced",
                calc.breakdown
            ));
        }

        let amount = override_amount.unwrap_or(calc.total);
        let now = chrono::Utc::now().timestamp_millis();
        let invoice = InvoiceSnapshot {
            amount,
            currency: calc.currency.clone(),
            breakdown: calc.breakdown.clone(),
            strategy: calc.strategy,
            recipient: recipient.to_string(),
            finalized_at: now,
        };
        let patch = BookingInvoicePatch {
            status: transitions::status_after_invoice(record.status, record.kind),
            invoice: invoice.clone(),
            check_in: stay.check_in,
            check_out: stay.check_out,
            guest_count: stay.guests,
            updated_at: now,
        };
        let updated = match self.bookings.set_invoice(id, patch).await {
            Ok(updated) => updated,
            Err(e) => return Self::store_failure(e),
        };

        // Best-effort notification, strictly after the durable write
        let pay_link = payments::checkout_link(
            &self.checkout_base_url,
            &updated.key().unwrap_or_default(),
            amount,
            &invoice.currency,
        );
        let (subject, body) = template::invoice_email(&updated.name, &invoice, &pay_link);
        let notice = match self.mailer.send(recipient, &subject, &body).await {
            Ok(()) => format!("Payment email sent to {}", recipient),
            Err(e) => {
                tracing::warn!(error = %e, recipient = %recipient, "Invoice email failed");
                format!(
                    "Invoice saved, but the email could not be sent ({}). Share the payment link manually.",
                    e
                )
            }
        };

        ActionResponse::ok_with_id("Invoice finalized", updated.id_string().unwrap_or_default())
            .with_notice(notice)
    }

    /// Payment-provider callback after a verified charge.
    ///
    /// Sets `Paid` unconditionally — the provider is the source of truth
    /// for payment success. A persistence failure is logged and reported
    /// but the payment is not re-triggered.
    pub async fn mark_paid(&self, id: &str) -> ActionResponse {
        match self.bookings.update_status(id, BookingStatus::Paid).await {
            Ok(_) => ActionResponse::ok("Booking marked as paid"),
            Err(e) => {
                tracing::error!(error = %e, booking = %id, "Failed to persist paid status");
                Self::store_failure(e)
            }
        }
    }

    /// Operator deletion, permitted only for non-guest-initiated entries
    pub async fn delete_entry(&self, id: &str) -> ActionResponse {
        let record = match self.bookings.find_by_id(id).await {
            Ok(Some(record)) => record,
            Ok(None) => return ActionResponse::failed(format!("Booking {} not found", id)),
            Err(e) => return Self::store_failure(e),
        };

        if !transitions::deletable(record.status) {
            return ActionResponse::failed(format!(
                "A {} booking cannot be deleted",
                record.status
            ));
        }

        match self.bookings.delete(id).await {
            Ok(_) => ActionResponse::ok("Entry deleted"),
            Err(e) => Self::store_failure(e),
        }
    }

    /// Fetch one booking
    pub async fn get(&self, id: &str) -> RepoResult<Option<BookingRecord>> {
        self.bookings.find_by_id(id).await
    }

    /// All bookings, ordered by check-in
    pub async fn list(&self) -> RepoResult<Vec<BookingRecord>> {
        self.bookings.find_all().await
    }

    /// Bookings whose status is in the given set (admin calendar views)
    pub async fn list_by_status(
        &self,
        statuses: &[BookingStatus],
    ) -> RepoResult<Vec<BookingRecord>> {
        self.bookings.find_by_status(statuses).await
    }

    fn store_failure(e: RepoError) -> ActionResponse {
        match e {
            RepoError::NotFound(msg) | RepoError::Validation(msg) => ActionResponse::failed(msg),
            e => {
                tracing::error!(error = %e, "Store operation failed");
                ActionResponse::failed("Storage error, please try again")
            }
        }
    }
}
