use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::core::stores::{
    DonorStore, MatchStore, RequestGroupField, RequestStore, StoreError,
};
use crate::models::{
    BloodRequest, Donor, GroupCount, MatchHistoryEntry, MatchRecord, MatchedDonor, MatchedRequest,
};

/// PostgreSQL client backing all three store contracts
///
/// Owns one connection pool and runs migrations on startup. Each store
/// contract is implemented over the same pool; writes are serialized per
/// record by the database, with no cross-record transactions.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn donor_from_row(row: &PgRow) -> Donor {
    Donor {
        id: row.get("id"),
        name: row.get("name"),
        blood_group: row.get("blood_group"),
        last_donation: row.get("last_donation"),
        health_conditions: row.get("health_conditions"),
        email: row.get("email"),
        phone: row.get("phone"),
    }
}

fn request_from_row(row: &PgRow) -> BloodRequest {
    BloodRequest {
        id: row.get("id"),
        hospital: row.get("hospital"),
        blood_group: row.get("blood_group"),
        units: row.get("units"),
        priority: row.get("priority"),
        location: row.get("location"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

/// GROUP BY query per aggregate field, ordered to match `core::count_by`
fn group_query(field: RequestGroupField) -> &'static str {
    match field {
        RequestGroupField::Priority => {
            r#"
            SELECT priority::TEXT AS key, COUNT(*) AS count
            FROM blood_requests
            GROUP BY priority
            ORDER BY count DESC, key ASC
            "#
        }
        RequestGroupField::Location => {
            r#"
            SELECT location AS key, COUNT(*) AS count
            FROM blood_requests
            GROUP BY location
            ORDER BY count DESC, key ASC
            "#
        }
    }
}

#[async_trait]
impl DonorStore for PostgresClient {
    async fn insert(&self, donor: &Donor) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO donors (id, name, blood_group, last_donation, health_conditions, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(query)
            .bind(donor.id)
            .bind(&donor.name)
            .bind(&donor.blood_group)
            .bind(donor.last_donation)
            .bind(&donor.health_conditions)
            .bind(&donor.email)
            .bind(&donor.phone)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Inserted donor {} (group {})", donor.id, donor.blood_group);

        Ok(())
    }

    async fn find_by_blood_group(&self, blood_group: &str) -> Result<Vec<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, blood_group, last_donation, health_conditions, email, phone
            FROM donors
            WHERE blood_group = $1
        "#;

        let rows = sqlx::query(query)
            .bind(blood_group)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(donor_from_row).collect())
    }

    async fn find_all(&self) -> Result<Vec<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, blood_group, last_donation, health_conditions, email, phone
            FROM donors
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(donor_from_row).collect())
    }
}

#[async_trait]
impl RequestStore for PostgresClient {
    async fn insert(&self, request: &BloodRequest) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO blood_requests (id, hospital, blood_group, units, priority, location, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(query)
            .bind(request.id)
            .bind(&request.hospital)
            .bind(&request.blood_group)
            .bind(request.units)
            .bind(request.priority)
            .bind(&request.location)
            .bind(request.status)
            .bind(request.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Inserted request {} from {}", request.id, request.hospital);

        Ok(())
    }

    async fn find_all_sorted(&self) -> Result<Vec<BloodRequest>, StoreError> {
        let query = r#"
            SELECT id, hospital, blood_group, units, priority, location, status, created_at
            FROM blood_requests
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(request_from_row).collect())
    }

    async fn count_grouped_by(
        &self,
        field: RequestGroupField,
    ) -> Result<Vec<GroupCount>, StoreError> {
        let rows = sqlx::query(group_query(field)).fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| GroupCount {
                key: row.get("key"),
                count: row.get("count"),
            })
            .collect())
    }
}

#[async_trait]
impl MatchStore for PostgresClient {
    async fn insert(&self, record: &MatchRecord) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO match_records (id, donor_id, request_id, matched_at)
            VALUES ($1, $2, $3, $4)
        "#;

        sqlx::query(query)
            .bind(record.id)
            .bind(record.donor_id)
            .bind(record.request_id)
            .bind(record.matched_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Recorded match {}: donor {} for request {}",
            record.id,
            record.donor_id,
            record.request_id
        );

        Ok(())
    }

    async fn find_history(&self) -> Result<Vec<MatchHistoryEntry>, StoreError> {
        let query = r#"
            SELECT m.id, m.matched_at,
                   d.id AS donor_id, d.name AS donor_name, d.blood_group AS donor_blood_group,
                   r.id AS request_id, r.hospital AS request_hospital, r.status AS request_status
            FROM match_records m
            JOIN donors d ON d.id = m.donor_id
            JOIN blood_requests r ON r.id = m.request_id
            ORDER BY m.matched_at DESC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| MatchHistoryEntry {
                id: row.get("id"),
                donor: MatchedDonor {
                    id: row.get("donor_id"),
                    name: row.get("donor_name"),
                    blood_group: row.get("donor_blood_group"),
                },
                request: MatchedRequest {
                    id: row.get("request_id"),
                    hospital: row.get("request_hospital"),
                    status: row.get("request_status"),
                },
                matched_at: row.get("matched_at"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_query_selects_field() {
        assert!(group_query(RequestGroupField::Priority).contains("GROUP BY priority"));
        assert!(group_query(RequestGroupField::Location).contains("GROUP BY location"));
    }
}
