// Core workflow exports
pub mod analytics;
pub mod dispatcher;
pub mod eligibility;
pub mod messages;
pub mod orchestrator;
pub mod stores;

pub use analytics::count_by;
pub use dispatcher::{
    BroadcastSummary, ChannelError, DispatchStatus, DonorDispatch, EmailChannel,
    NotificationDispatcher, SmsChannel,
};
pub use eligibility::{filter_eligible, is_eligible, DEFER_TAG, MIN_DAYS_SINCE_DONATION};
pub use orchestrator::{RequestOrchestrator, RequestOutcome};
pub use stores::{DonorStore, MatchStore, RequestGroupField, RequestStore, StoreError};
