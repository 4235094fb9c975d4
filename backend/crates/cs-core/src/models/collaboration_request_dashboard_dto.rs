//! Collaboration request row shown on the student and owner dashboards.

use crate::{CollaborationRequestDashboardDtoBuilder, CollaborationRequestStatus, CoreResult};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Collaboration request DTO for JSON serialization.
///
/// Every field is optional and independently settable. Nothing here checks
/// that the values agree with each other; the producer is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollaborationRequestDashboardDto {
    request_id: Option<i64>,
    project_id: Option<i64>,
    project_title: Option<String>,
    /// Untyped on purpose, see [`Self::parsed_status`]
    status: Option<String>,
    /// Local date-time, no offset on the wire
    applied_at: Option<NaiveDateTime>,
    owner_name: Option<String>,
}

impl CollaborationRequestDashboardDto {
    /// Create a DTO from all six values, stored as given
    pub fn new(
        request_id: Option<i64>,
        project_id: Option<i64>,
        project_title: Option<String>,
        status: Option<String>,
        applied_at: Option<NaiveDateTime>,
        owner_name: Option<String>,
    ) -> Self {
        Self {
            request_id,
            project_id,
            project_title,
            status,
            applied_at,
            owner_name,
        }
    }

    /// Start a step-by-step builder with every field unset
    pub fn builder() -> CollaborationRequestDashboardDtoBuilder {
        CollaborationRequestDashboardDtoBuilder::default()
    }

    pub fn request_id(&self) -> Option<i64> {
        self.request_id
    }

    pub fn project_id(&self) -> Option<i64> {
        self.project_id
    }

    pub fn project_title(&self) -> Option<&str> {
        self.project_title.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn applied_at(&self) -> Option<NaiveDateTime> {
        self.applied_at
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    pub fn set_request_id(&mut self, request_id: Option<i64>) {
        self.request_id = request_id;
    }

    pub fn set_project_id(&mut self, project_id: Option<i64>) {
        self.project_id = project_id;
    }

    pub fn set_project_title(&mut self, project_title: Option<String>) {
        self.project_title = project_title;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn set_applied_at(&mut self, applied_at: Option<NaiveDateTime>) {
        self.applied_at = applied_at;
    }

    pub fn set_owner_name(&mut self, owner_name: Option<String>) {
        self.owner_name = owner_name;
    }

    /// Interpret the status text against the known request states.
    ///
    /// Returns `Ok(None)` when no status is set and an error when the text is
    /// not one of `PENDING`, `ACCEPTED`, `APPROVED` or `REJECTED`. The error
    /// location points at the caller.
    #[track_caller]
    pub fn parsed_status(&self) -> CoreResult<Option<CollaborationRequestStatus>> {
        match self.status.as_deref() {
            Some(status) => CollaborationRequestStatus::from_str(status).map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Display for CollaborationRequestDashboardDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollaborationRequestDashboardDto(")?;
        write!(f, "requestId={}", NullOr(&self.request_id))?;
        write!(f, ", projectId={}", NullOr(&self.project_id))?;
        write!(f, ", projectTitle={}", NullOr(&self.project_title))?;
        write!(f, ", status={}", NullOr(&self.status))?;
        write!(f, ", appliedAt={}", NullOr(&self.applied_at.map(IsoDateTime)))?;
        write!(f, ", ownerName={}", NullOr(&self.owner_name))?;
        write!(f, ")")
    }
}

/// Writes the inner value, or `null` when absent
struct NullOr<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for NullOr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// Same `T`-separated layout the serializer emits
struct IsoDateTime(NaiveDateTime);

impl fmt::Display for IsoDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
