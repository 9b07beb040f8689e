//! Booking Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{BookingCreate, BookingInvoicePatch, BookingRecord, BookingStatusPatch};
use shared::BookingStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid booking ID: {}", id)))
    }

    /// Find all bookings ordered by check-in date
    pub async fn find_all(&self) -> RepoResult<Vec<BookingRecord>> {
        let bookings: Vec<BookingRecord> = self
            .base
            .db()
            .query("SELECT * FROM booking ORDER BY check_in")
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Find bookings whose status is in the given set
    pub async fn find_by_status(
        &self,
        statuses: &[BookingStatus],
    ) -> RepoResult<Vec<BookingRecord>> {
        let statuses = statuses.to_vec();
        let bookings: Vec<BookingRecord> = self
            .base
            .db()
            .query("SELECT * FROM booking WHERE status IN $statuses ORDER BY check_in")
            .bind(("statuses", statuses))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Find booking by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<BookingRecord>> {
        let thing = Self::parse_id(id)?;
        let booking: Option<BookingRecord> = self.base.db().select(thing).await?;
        Ok(booking)
    }

    /// Create a new booking record
    pub async fn create(&self, data: BookingCreate) -> RepoResult<BookingRecord> {
        let now = chrono::Utc::now().timestamp_millis();
        let record = BookingRecord {
            id: None,
            name: data.name,
            email: data.email,
            check_in: data.check_in,
            check_out: data.check_out,
            guest_count: data.guest_count,
            kind: data.kind,
            status: data.status,
            notes: data.notes,
            invoice: None,
            created_at: now,
            updated_at: now,
        };

        let created: Option<BookingRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Update only the status
    pub async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> RepoResult<BookingRecord> {
        let patch = BookingStatusPatch {
            status,
            updated_at: chrono::Utc::now().timestamp_millis(),
        };
        self.merge(id, patch).await
    }

    /// Persist the finalized invoice snapshot (plus derived status and edited stay)
    pub async fn set_invoice(
        &self,
        id: &str,
        patch: BookingInvoicePatch,
    ) -> RepoResult<BookingRecord> {
        self.merge(id, patch).await
    }

    async fn merge<P: serde::Serialize + Send + Sync + 'static>(
        &self,
        id: &str,
        patch: P,
    ) -> RepoResult<BookingRecord> {
        let thing = Self::parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", patch))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Booking {} not found", id)))
    }

    /// Hard delete a booking record
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = Self::parse_id(id)?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use chrono::NaiveDate;
    use shared::EntryKind;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    async fn repo() -> BookingRepository {
        let db = DbService::open_memory().await.unwrap();
        BookingRepository::new(db.handle())
    }

    fn request(name: &str, check_in: &str, check_out: &str) -> BookingCreate {
        BookingCreate {
            name: name.to_string(),
            email: Some(format!("{}@example.com", name)),
            check_in: d(check_in),
            check_out: d(check_out),
            guest_count: 2,
            kind: EntryKind::Request,
            status: BookingStatus::Pending,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_roundtrip() {
        let repo = repo().await;
        let created = repo
            .create(request("alice", "2024-06-01", "2024-06-04"))
            .await
            .unwrap();
        let id = created.id_string().unwrap();

        let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "alice");
        assert_eq!(fetched.status, BookingStatus::Pending);
        assert_eq!(fetched.stay().nights(), 3);
        assert!(fetched.invoice.is_none());
    }

    #[tokio::test]
    async fn test_find_by_status_set_membership() {
        let repo = repo().await;
        let a = repo
            .create(request("a", "2024-06-01", "2024-06-02"))
            .await
            .unwrap();
        repo.create(request("b", "2024-06-03", "2024-06-05"))
            .await
            .unwrap();
        repo.update_status(&a.id_string().unwrap(), BookingStatus::Confirmed)
            .await
            .unwrap();

        let confirmed = repo
            .find_by_status(&[BookingStatus::Confirmed, BookingStatus::Paid])
            .await
            .unwrap();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].name, "a");

        let pending = repo.find_by_status(&[BookingStatus::Pending]).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "b");
    }

    #[tokio::test]
    async fn test_update_status_bumps_updated_at() {
        let repo = repo().await;
        let created = repo
            .create(request("c", "2024-06-01", "2024-06-02"))
            .await
            .unwrap();
        let id = created.id_string().unwrap();

        let updated = repo
            .update_status(&id, BookingStatus::Declined)
            .await
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Declined);
        assert!(updated.updated_at >= created.updated_at);
        // Unrelated fields survive the merge
        assert_eq!(updated.name, "c");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = repo().await;
        let created = repo
            .create(request("d", "2024-06-01", "2024-06-02"))
            .await
            .unwrap();
        let id = created.id_string().unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_id_is_validation_error() {
        let repo = repo().await;
        let err = repo.find_by_id("not a record id").await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
