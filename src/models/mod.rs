// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BloodRequest, Donor, GroupCount, MatchHistoryEntry, MatchRecord, MatchedDonor, MatchedRequest,
    NewBloodRequest, Priority, RequestStatus,
};
pub use requests::{
    CreateBloodRequest, EmailDonorsRequest, NotifyDonorsRequest, RegisterDonorRequest,
    SmartMatchRequest,
};
pub use responses::{
    AnalyticsResponse, BroadcastResponse, CreateRequestResponse, ErrorResponse, HealthResponse,
    MessageResponse, SmartMatchResponse,
};
