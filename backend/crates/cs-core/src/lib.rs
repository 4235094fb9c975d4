pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::collaboration_request_dashboard_dto::CollaborationRequestDashboardDto;
pub use models::collaboration_request_dashboard_dto_builder::CollaborationRequestDashboardDtoBuilder;
pub use models::collaboration_request_status::CollaborationRequestStatus;

#[cfg(test)]
mod tests;
