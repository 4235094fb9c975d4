//! Assembles collaboration request dashboards from a request source.

use crate::{CollaborationRequestSource, DashboardResult};

use std::cmp::Reverse;

use cs_config::{DashboardConfig, StatusPolicy};
use cs_core::{CollaborationRequestDashboardDto, CollaborationRequestStatus};
use log::{debug, warn};

pub struct DashboardService<S> {
    source: S,
    config: DashboardConfig,
}

impl<S: CollaborationRequestSource> DashboardService<S> {
    pub fn new(source: S, config: DashboardConfig) -> Self {
        Self { source, config }
    }

    /// Requests the student has sent out
    pub fn student_dashboard(
        &self,
        student_id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>> {
        let requests = self.source.requests_by_student(student_id)?;
        debug!(
            "student {} dashboard: {} requests from source",
            student_id,
            requests.len()
        );
        self.assemble(requests)
    }

    /// Requests received on the owner's projects
    pub fn owner_dashboard(
        &self,
        owner_id: i64,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>> {
        let requests = self.source.requests_for_owner(owner_id)?;
        debug!(
            "owner {} dashboard: {} requests from source",
            owner_id,
            requests.len()
        );
        self.assemble(requests)
    }

    fn assemble(
        &self,
        mut requests: Vec<CollaborationRequestDashboardDto>,
    ) -> DashboardResult<Vec<CollaborationRequestDashboardDto>> {
        for request in &requests {
            self.check_status(request)?;
        }

        if self.config.newest_first {
            // Stable sort; absent timestamps sink to the end
            requests.sort_by_key(|r| (r.applied_at().is_none(), Reverse(r.applied_at())));
        }

        if requests.len() > self.config.max_requests {
            debug!(
                "truncating dashboard from {} to {} requests",
                requests.len(),
                self.config.max_requests
            );
            requests.truncate(self.config.max_requests);
        }

        Ok(requests)
    }

    fn check_status(&self, request: &CollaborationRequestDashboardDto) -> DashboardResult<()> {
        match (request.parsed_status(), self.config.status_policy) {
            (Ok(_), _) => Ok(()),
            (Err(e), StatusPolicy::Strict) => Err(e.into()),
            (Err(_), StatusPolicy::Lenient) => {
                warn!(
                    "request {:?} has unrecognized status {:?}, keeping it",
                    request.request_id(),
                    request.status()
                );
                Ok(())
            }
        }
    }
}

/// Number of requests still waiting on the owner
pub fn pending_count(requests: &[CollaborationRequestDashboardDto]) -> usize {
    requests
        .iter()
        .filter(|r| matches!(r.parsed_status(), Ok(Some(CollaborationRequestStatus::Pending))))
        .count()
}
