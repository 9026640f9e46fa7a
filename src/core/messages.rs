use crate::models::{BloodRequest, Donor};

/// Subject line for urgent request notifications
pub const REQUEST_EMAIL_SUBJECT: &str = "Urgent Blood Requirement - LifeLink";

/// Subject used for bulk emails when the caller does not supply one
pub const DEFAULT_BROADCAST_SUBJECT: &str = "Blood Donation Alert";

/// Compose the email body for an urgent request notification
pub fn request_email_body(donor: &Donor, request: &BloodRequest) -> String {
    format!(
        "Dear {},\n\n\
         A hospital ({}) needs {} units of {} blood urgently.\n\
         Priority: {}\n\
         Location: {}\n\n\
         Please consider donating.\n\
         - LifeLink Team",
        donor.name,
        request.hospital,
        request.units,
        request.blood_group,
        request.priority,
        request.location,
    )
}

/// Compose the SMS text for an urgent request notification
pub fn request_sms_body(request: &BloodRequest) -> String {
    format!(
        "Urgent: {} units of {} blood needed at {}, {}. Priority: {}. - LifeLink",
        request.units, request.blood_group, request.hospital, request.location, request.priority,
    )
}
