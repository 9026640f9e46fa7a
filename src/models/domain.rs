use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered donor with contact and eligibility data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    pub id: Uuid,
    pub name: String,
    pub blood_group: String,
    pub last_donation: NaiveDate,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request priority as submitted by the hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_priority")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle state of a blood request
///
/// Only `Pending` is produced by request creation; the other states are
/// reachable through out-of-scope update paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status")]
pub enum RequestStatus {
    Pending,
    Fulfilled,
    Cancelled,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Fulfilled => "Fulfilled",
            RequestStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Blood request submitted by a hospital
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: Uuid,
    pub hospital: String,
    pub blood_group: String,
    pub units: i32,
    pub priority: Priority,
    pub location: String,
    pub status: RequestStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new blood request, ready for the orchestrator
#[derive(Debug, Clone)]
pub struct NewBloodRequest {
    pub hospital: String,
    pub blood_group: String,
    pub units: i32,
    pub priority: Priority,
    pub location: String,
}

/// Recorded donor/request pairing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    #[serde(rename = "donorId")]
    pub donor_id: Uuid,
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
}

/// Match record joined with donor and request details for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    pub id: Uuid,
    #[serde(rename = "donorId")]
    pub donor: MatchedDonor,
    #[serde(rename = "requestId")]
    pub request: MatchedRequest,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedDonor {
    pub id: Uuid,
    pub name: String,
    pub blood_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedRequest {
    pub id: Uuid,
    pub hospital: String,
    pub status: RequestStatus,
}

/// One row of a grouped count aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub count: i64,
}
