// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{StudentRecord, StudentSummary};
pub use requests::AboveThresholdRequest;
pub use responses::{ErrorResponse, HealthResponse, InternalErrorResponse, ThresholdMatches};
