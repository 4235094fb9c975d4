
use crate::{CollaborationRequestSource, DashboardError, DashboardResult};

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use cs_core::CollaborationRequestDashboardDto;

/// Request source backed by in-memory maps keyed by user id
#[derive(Default)]
pub(crate) struct InMemoryRequestSource {
    by_student: HashMap<i64, Vec<CollaborationRequestDashboardDto>>,
    for_owner: HashMap<i64, Vec<CollaborationRequestDashboardDto>>,
    unavailable: bool,
}

impl InMemoryRequestSource {
    pub(crate) fn with_student(
        mut self,
        student_id: i64,
        requests: Vec<CollaborationRequestDashboardDto>,
    ) -> Self {
        self.by_student.insert(student_id, requests);
        self
    }

    pub(crate) fn with_owner(
        mut self,
        owner_id: i64,
        requests: Vec<CollaborationRequestDashboardDto>,
    ) -> Self {
        self.for_owner.insert(owner_id, requests);
        self
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn lookup(
        &self,
        map: &HashMap<i64, Vec<CollaborationRequestDashboardDto>>,
        id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>> {
        if self.unavailable {
            return Err(DashboardError::request_source("database offline"));
        }
        Ok(map.get(&id).cloned().unwrap_or_default())
    }
}

impl CollaborationRequestSource for InMemoryRequestSource {
    fn requests_by_student(
        &self,
        student_id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>> {
        self.lookup(&self.by_student, student_id)
    }

    fn requests_for_owner(
        &self,
        owner_id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>> {
        self.lookup(&self.for_owner, owner_id)
    }
}

pub(crate) fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub(crate) fn request(
    request_id: i64,
    status: &str,
    applied_at: Option<NaiveDateTime>,
) -> CollaborationRequestDashboardDto {
    let mut dto = CollaborationRequestDashboardDto::builder()
        .request_id(request_id)
        .project_id(7)
        .project_title("Atlas")
        .status(status)
        .owner_name("Dana")
        .build();
    dto.set_applied_at(applied_at);
    dto
}
