use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::dispatcher::{BroadcastSummary, DispatchStatus, DonorDispatch, NotificationDispatcher};
use crate::core::eligibility::filter_eligible;
use crate::core::stores::{DonorStore, MatchStore, RequestStore, StoreError};
use crate::models::{BloodRequest, Donor, MatchRecord, NewBloodRequest, RequestStatus};

/// Result of an orchestrated request creation
#[derive(Debug)]
pub struct RequestOutcome {
    pub request: BloodRequest,
    /// Per-donor dispatch outcomes, one entry per eligible donor considered
    pub dispatches: Vec<DonorDispatch>,
}

impl RequestOutcome {
    pub fn notified_count(&self) -> usize {
        self.dispatches.len()
    }
}

/// The one multi-step workflow in the system
///
/// On a new request: persist it, fetch donors of the matching blood group,
/// filter eligible ones, notify each over the available channels, and record
/// a match per eligible donor. Dispatch failures are swallowed per donor;
/// persistence failures abort and surface. Prior writes are not rolled back.
pub struct RequestOrchestrator {
    donors: Arc<dyn DonorStore>,
    requests: Arc<dyn RequestStore>,
    matches: Arc<dyn MatchStore>,
    dispatcher: NotificationDispatcher,
}

impl RequestOrchestrator {
    pub fn new(
        donors: Arc<dyn DonorStore>,
        requests: Arc<dyn RequestStore>,
        matches: Arc<dyn MatchStore>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            donors,
            requests,
            matches,
            dispatcher,
        }
    }

    /// Create a blood request and notify eligible donors
    ///
    /// The request is persisted before any eligibility check; zero matching
    /// donors is a normal outcome, not an error. For each eligible donor the
    /// match record is written after that donor's dispatch attempts, and it is
    /// written regardless of dispatch outcome.
    pub async fn handle_new_request(
        &self,
        input: NewBloodRequest,
    ) -> Result<RequestOutcome, StoreError> {
        let now = Utc::now();
        let request = BloodRequest {
            id: Uuid::new_v4(),
            hospital: input.hospital,
            blood_group: input.blood_group,
            units: input.units,
            priority: input.priority,
            location: input.location,
            status: RequestStatus::Pending,
            created_at: now,
        };

        self.requests.insert(&request).await?;

        tracing::info!(
            "Created request {} for {} units of {} at {}",
            request.id,
            request.units,
            request.blood_group,
            request.hospital
        );

        let candidates = self.donors.find_by_blood_group(&request.blood_group).await?;
        let candidate_count = candidates.len();
        let eligible = filter_eligible(candidates, now);

        tracing::debug!(
            "Request {}: {} of {} donors with group {} are eligible",
            request.id,
            eligible.len(),
            candidate_count,
            request.blood_group
        );

        let mut dispatches = Vec::with_capacity(eligible.len());
        for donor in &eligible {
            let dispatch = self.dispatcher.notify_request(donor, &request).await;

            let record = MatchRecord {
                id: Uuid::new_v4(),
                donor_id: donor.id,
                request_id: request.id,
                matched_at: Utc::now(),
            };
            self.matches.insert(&record).await?;

            dispatches.push(dispatch);
        }

        tracing::info!(
            "Request {}: notified {} eligible donors",
            request.id,
            dispatches.len()
        );

        Ok(RequestOutcome {
            request,
            dispatches,
        })
    }

    /// Read-only match: eligible donors for a blood group, no side effects
    pub async fn smart_match(&self, blood_group: &str) -> Result<Vec<Donor>, StoreError> {
        let donors = self.donors.find_by_blood_group(blood_group).await?;
        Ok(filter_eligible(donors, Utc::now()))
    }

    /// All currently eligible donors across every blood group
    pub async fn eligible_donors(&self) -> Result<Vec<Donor>, StoreError> {
        let donors = self.donors.find_all().await?;
        Ok(filter_eligible(donors, Utc::now()))
    }

    /// Bulk SMS to every donor of a blood group with a phone number
    ///
    /// No eligibility filter here: the bulk channels reach all donors of the
    /// group, matching the manual-broadcast behavior of the product.
    pub async fn broadcast_sms(
        &self,
        blood_group: &str,
        message: &str,
    ) -> Result<BroadcastSummary, StoreError> {
        let donors = self.donors.find_by_blood_group(blood_group).await?;

        let mut summary = BroadcastSummary::default();
        for donor in &donors {
            let status = match &donor.phone {
                Some(phone) => self.dispatcher.send_sms(phone, message).await,
                None => DispatchStatus::Skipped,
            };
            summary.record(&status);
        }

        tracing::info!(
            "SMS broadcast to group {}: {} sent, {} failed, {} skipped",
            blood_group,
            summary.sent,
            summary.failed,
            summary.skipped
        );

        Ok(summary)
    }

    /// Bulk email to every donor of a blood group with an email address
    pub async fn broadcast_email(
        &self,
        blood_group: &str,
        subject: &str,
        message: &str,
    ) -> Result<BroadcastSummary, StoreError> {
        let donors = self.donors.find_by_blood_group(blood_group).await?;

        let mut summary = BroadcastSummary::default();
        for donor in &donors {
            let status = match &donor.email {
                Some(address) => self.dispatcher.send_email(address, subject, message).await,
                None => DispatchStatus::Skipped,
            };
            summary.record(&status);
        }

        tracing::info!(
            "Email broadcast to group {}: {} sent, {} failed, {} skipped",
            blood_group,
            summary.sent,
            summary.failed,
            summary.skipped
        );

        Ok(summary)
    }
}
