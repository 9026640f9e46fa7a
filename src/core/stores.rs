use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BloodRequest, Donor, GroupCount, MatchHistoryEntry, MatchRecord};

/// Errors surfaced by the persistence collaborators
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Field a request aggregate groups on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestGroupField {
    Priority,
    Location,
}

/// Persistence contract for donor records
#[async_trait]
pub trait DonorStore: Send + Sync {
    async fn insert(&self, donor: &Donor) -> Result<(), StoreError>;
    async fn find_by_blood_group(&self, blood_group: &str) -> Result<Vec<Donor>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Donor>, StoreError>;
}

/// Persistence contract for blood requests
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn insert(&self, request: &BloodRequest) -> Result<(), StoreError>;
    /// All requests, newest first
    async fn find_all_sorted(&self) -> Result<Vec<BloodRequest>, StoreError>;
    async fn count_grouped_by(
        &self,
        field: RequestGroupField,
    ) -> Result<Vec<GroupCount>, StoreError>;
}

/// Persistence contract for match records
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn insert(&self, record: &MatchRecord) -> Result<(), StoreError>;
    /// Joined match history, newest first
    async fn find_history(&self) -> Result<Vec<MatchHistoryEntry>, StoreError>;
}
