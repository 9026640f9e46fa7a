use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Donor, NewBloodRequest, Priority};
use uuid::Uuid;

/// Request to register a donor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDonorRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub blood_group: String,
    pub last_donation: NaiveDate,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl RegisterDonorRequest {
    /// Build the donor record with a fresh id
    pub fn into_donor(self) -> Donor {
        Donor {
            id: Uuid::new_v4(),
            name: self.name,
            blood_group: self.blood_group,
            last_donation: self.last_donation,
            health_conditions: self.health_conditions,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Request to create a blood request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBloodRequest {
    #[validate(length(min = 1))]
    pub hospital: String,
    #[validate(length(min = 1))]
    pub blood_group: String,
    #[validate(range(min = 1))]
    pub units: i32,
    #[serde(default)]
    pub priority: Priority,
    #[validate(length(min = 1))]
    pub location: String,
}

impl From<CreateBloodRequest> for NewBloodRequest {
    fn from(req: CreateBloodRequest) -> Self {
        NewBloodRequest {
            hospital: req.hospital,
            blood_group: req.blood_group,
            units: req.units,
            priority: req.priority,
            location: req.location,
        }
    }
}

/// Request to run a read-only smart match for a blood group
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SmartMatchRequest {
    #[validate(length(min = 1))]
    pub blood_group: String,
}

/// Request to send a bulk SMS to donors of a blood group
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotifyDonorsRequest {
    #[validate(length(min = 1))]
    pub blood_group: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Request to send a bulk email to donors of a blood group
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailDonorsRequest {
    #[validate(length(min = 1))]
    pub blood_group: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}
