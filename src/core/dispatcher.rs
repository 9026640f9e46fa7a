use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::messages::{request_email_body, request_sms_body, REQUEST_EMAIL_SUBJECT};
use crate::models::{BloodRequest, Donor};
use uuid::Uuid;

/// Errors raised by an outbound messaging channel
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned error: {0}")]
    Api(String),
}

/// Outbound email channel contract
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ChannelError>;
}

/// Outbound SMS channel contract
#[async_trait]
pub trait SmsChannel: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError>;
}

/// Outcome of one dispatch attempt on one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStatus {
    Sent,
    Failed(String),
    /// No destination on the donor, or the channel is not configured
    Skipped,
}

impl DispatchStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchStatus::Sent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DispatchStatus::Failed(_))
    }
}

/// Per-donor dispatch outcomes for one orchestrated request
#[derive(Debug, Clone)]
pub struct DonorDispatch {
    pub donor_id: Uuid,
    pub email: DispatchStatus,
    pub sms: DispatchStatus,
}

/// Tallies for a bulk send over one channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastSummary {
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BroadcastSummary {
    pub fn record(&mut self, status: &DispatchStatus) {
        match status {
            DispatchStatus::Sent => self.sent += 1,
            DispatchStatus::Failed(_) => self.failed += 1,
            DispatchStatus::Skipped => self.skipped += 1,
        }
    }
}

/// Best-effort notification dispatch over the configured channels
///
/// Every send here converts channel errors into a `DispatchStatus` instead of
/// propagating them, so a failure for one donor can never abort iteration over
/// the remaining donors. SMS is optional; without a configured channel every
/// SMS attempt reports `Skipped`.
#[derive(Clone)]
pub struct NotificationDispatcher {
    email: Arc<dyn EmailChannel>,
    sms: Option<Arc<dyn SmsChannel>>,
}

impl NotificationDispatcher {
    pub fn new(email: Arc<dyn EmailChannel>, sms: Option<Arc<dyn SmsChannel>>) -> Self {
        Self { email, sms }
    }

    pub fn sms_configured(&self) -> bool {
        self.sms.is_some()
    }

    /// Send one email, swallowing failures
    pub async fn send_email(&self, to: &str, subject: &str, body: &str) -> DispatchStatus {
        match self.email.send(to, subject, body).await {
            Ok(()) => DispatchStatus::Sent,
            Err(e) => {
                tracing::warn!("Email dispatch to {} failed: {}", to, e);
                DispatchStatus::Failed(e.to_string())
            }
        }
    }

    /// Send one SMS, swallowing failures
    pub async fn send_sms(&self, to: &str, body: &str) -> DispatchStatus {
        let Some(channel) = &self.sms else {
            return DispatchStatus::Skipped;
        };

        match channel.send(to, body).await {
            Ok(()) => DispatchStatus::Sent,
            Err(e) => {
                tracing::warn!("SMS dispatch to {} failed: {}", to, e);
                DispatchStatus::Failed(e.to_string())
            }
        }
    }

    /// Notify one donor about an urgent request on every available channel
    ///
    /// Email and SMS are attempted independently of each other's outcome.
    pub async fn notify_request(&self, donor: &Donor, request: &BloodRequest) -> DonorDispatch {
        let email = match &donor.email {
            Some(address) => {
                let body = request_email_body(donor, request);
                self.send_email(address, REQUEST_EMAIL_SUBJECT, &body).await
            }
            None => DispatchStatus::Skipped,
        };

        let sms = match &donor.phone {
            Some(phone) => {
                let body = request_sms_body(request);
                self.send_sms(phone, &body).await
            }
            None => DispatchStatus::Skipped,
        };

        DonorDispatch {
            donor_id: donor.id,
            email,
            sms,
        }
    }
}
