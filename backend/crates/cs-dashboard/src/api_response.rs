use crate::{DashboardError, DashboardResult};

use serde::{Deserialize, Serialize};

/// Envelope every dashboard payload travels in; clients read `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok<S: Into<String>>(message: S, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> DashboardResult<String> {
        serde_json::to_string(self).map_err(|e| DashboardError::Json { source: e })
    }
}
