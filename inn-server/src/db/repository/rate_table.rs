//! Rate Table Repository
//!
//! The rate table is a singleton document (`rate_table:current`). The
//! pricing engine reads whatever snapshot is current at call time; edits
//! concurrent with an in-flight calculation are last-write-wins.

use super::{BaseRepository, RepoError, RepoResult};
use shared::RateTable;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "rate_table";
const CURRENT: &str = "current";

#[derive(Clone)]
pub struct RateTableRepository {
    base: BaseRepository,
}

impl RateTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch the current rate table
    pub async fn get_current(&self) -> RepoResult<RateTable> {
        let rates: Option<RateTable> = self.base.db().select((TABLE, CURRENT)).await?;
        rates.ok_or_else(|| RepoError::NotFound("Rate table is not configured".to_string()))
    }

    /// Replace the current rate table
    pub async fn save(&self, rates: RateTable) -> RepoResult<RateTable> {
        rates.validate().map_err(RepoError::Validation)?;

        let saved: Option<RateTable> = self
            .base
            .db()
            .upsert((TABLE, CURRENT))
            .content(rates)
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save rate table".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn jpy_table() -> RateTable {
        RateTable {
            nightly_single: 8000.0,
            weekly_single: 50000.0,
            monthly_single: 180000.0,
            nightly_double: 12000.0,
            weekly_double: 75000.0,
            monthly_double: 270000.0,
            currency: "JPY".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_table_is_not_found() {
        let db = DbService::open_memory().await.unwrap();
        let repo = RateTableRepository::new(db.handle());
        assert!(matches!(
            repo.get_current().await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_save_then_get_roundtrip() {
        let db = DbService::open_memory().await.unwrap();
        let repo = RateTableRepository::new(db.handle());

        repo.save(jpy_table()).await.unwrap();
        let fetched = repo.get_current().await.unwrap();
        assert_eq!(fetched, jpy_table());
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let db = DbService::open_memory().await.unwrap();
        let repo = RateTableRepository::new(db.handle());

        repo.save(jpy_table()).await.unwrap();
        let mut revised = jpy_table();
        revised.nightly_single = 9000.0;
        repo.save(revised.clone()).await.unwrap();

        assert_eq!(repo.get_current().await.unwrap(), revised);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_rates() {
        let db = DbService::open_memory().await.unwrap();
        let repo = RateTableRepository::new(db.handle());

        let mut bad = jpy_table();
        bad.monthly_double = -1.0;
        assert!(matches!(
            repo.save(bad).await.unwrap_err(),
            RepoError::Validation(_)
        ));
    }
}
