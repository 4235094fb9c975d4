pub mod collaboration_request_dashboard_dto;
pub mod collaboration_request_dashboard_dto_builder;
pub mod collaboration_request_status;
