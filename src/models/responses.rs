use serde::{Deserialize, Serialize};

use crate::models::domain::{BloodRequest, Donor, GroupCount};

/// Single summary message per top-level operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for request creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestResponse {
    pub message: String,
    pub request: BloodRequest,
    #[serde(rename = "notifiedCount")]
    pub notified_count: usize,
}

/// Response for smart match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartMatchResponse {
    pub matches: Vec<Donor>,
}

/// Grouped counts over donors and requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    #[serde(rename = "totalDonors")]
    pub total_donors: Vec<GroupCount>,
    #[serde(rename = "activeRequests")]
    pub active_requests: Vec<GroupCount>,
    #[serde(rename = "requestsByLocation")]
    pub requests_by_location: Vec<GroupCount>,
}

/// Per-channel tallies for a bulk send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastResponse {
    pub message: String,
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}
