pub mod api_response;
pub mod collaboration_request_source;
pub mod dashboard_service;
pub mod error;
pub mod logger;
pub mod startup;

pub use api_response::ApiResponse;
pub use collaboration_request_source::CollaborationRequestSource;
pub use dashboard_service::{DashboardService, pending_count};
pub use error::{DashboardError, DashboardResult};

#[cfg(test)]
mod tests;
