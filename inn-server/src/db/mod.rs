//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB-backed on disk, in-memory for tests).

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "yado";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Db>,
}

impl DbService {
    /// Open a RocksDB-backed database under the given working directory
    pub async fn open(work_dir: &str) -> Result<Self, AppError> {
        let path = format!("{}/data.db", work_dir);
        let db = Surreal::new::<RocksDb>(path.as_str())
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %path, "Database opened");
        Ok(Self { db })
    }

    /// Open an in-memory database (tests and ephemeral tooling)
    pub async fn open_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::Database(format!("Failed to select namespace: {e}")))?;
        Ok(Self { db })
    }

    pub fn handle(&self) -> Surreal<Db> {
        self.db.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::BookingCreate;
    use crate::db::repository::BookingRepository;
    use shared::{BookingStatus, EntryKind};

    #[tokio::test]
    async fn test_disk_database_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().to_str().unwrap().to_string();

        let db = DbService::open(&work_dir).await.unwrap();
        let repo = BookingRepository::new(db.handle());
        let created = repo
            .create(BookingCreate {
                name: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
                check_in: "2024-06-01".parse().unwrap(),
                check_out: "2024-06-04".parse().unwrap(),
                guest_count: 1,
                kind: EntryKind::Request,
                status: BookingStatus::Pending,
                notes: None,
            })
            .await
            .unwrap();

        let fetched = repo
            .find_by_id(&created.id_string().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "alice");
        assert!(dir.path().join("data.db").exists());
    }
}
