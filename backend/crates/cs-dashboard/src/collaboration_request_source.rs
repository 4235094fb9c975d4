use crate::DashboardResult;

use cs_core::CollaborationRequestDashboardDto;

/// Producer of dashboard rows, typically backed by the persistence layer.
pub trait CollaborationRequestSource {
    /// Requests a student has submitted to other people's projects
    fn requests_by_student(
        &self,
        student_id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>>;

    /// Requests received on projects the user owns
    fn requests_for_owner(
        &self,
        owner_id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>>;
}
