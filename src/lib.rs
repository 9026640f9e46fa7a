//! LifeLink - Donor coordination and notification service
//!
//! Donors register contact and eligibility data, hospitals submit blood
//! requests, and the service filters eligible donors, notifies them over the
//! configured email/SMS gateways, records the resulting matches, and exposes
//! aggregate analytics.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    filter_eligible, is_eligible, NotificationDispatcher, RequestOrchestrator, RequestOutcome,
};
pub use crate::models::{BloodRequest, Donor, MatchRecord, NewBloodRequest, Priority, RequestStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[test]
    fn test_library_exports() {
        let donor = Donor {
            id: Uuid::new_v4(),
            name: "Export Check".to_string(),
            blood_group: "O+".to_string(),
            last_donation: (Utc::now() - Duration::days(120)).date_naive(),
            health_conditions: vec![],
            email: None,
            phone: None,
        };

        assert!(is_eligible(&donor, Utc::now()));
    }
}
