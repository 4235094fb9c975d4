use crate::CollaborationRequestDashboardDto;

use chrono::NaiveDateTime;

/// Fluent builder for [`CollaborationRequestDashboardDto`].
///
/// Each step sets one field; fields never set stay absent in the built value.
#[derive(Debug, Clone, Default)]
pub struct CollaborationRequestDashboardDtoBuilder {
    request_id: Option<i64>,
    project_id: Option<i64>,
    project_title: Option<String>,
    status: Option<String>,
    applied_at: Option<NaiveDateTime>,
    owner_name: Option<String>,
}

impl CollaborationRequestDashboardDtoBuilder {
    pub fn request_id(mut self, request_id: i64) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn project_id(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn project_title(mut self, project_title: impl Into<String>) -> Self {
        self.project_title = Some(project_title.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn applied_at(mut self, applied_at: NaiveDateTime) -> Self {
        self.applied_at = Some(applied_at);
        self
    }

    pub fn owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = Some(owner_name.into());
        self
    }

    pub fn build(self) -> CollaborationRequestDashboardDto {
        CollaborationRequestDashboardDto::new(
            self.request_id,
            self.project_id,
            self.project_title,
            self.status,
            self.applied_at,
            self.owner_name,
        )
    }
}
