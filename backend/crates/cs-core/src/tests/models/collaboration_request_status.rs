use crate::{CollaborationRequestStatus, CoreError};

use std::str::FromStr;

#[test]
fn test_request_status_as_str() {
    assert_eq!(CollaborationRequestStatus::Pending.as_str(), "PENDING");
    assert_eq!(CollaborationRequestStatus::Accepted.as_str(), "ACCEPTED");
    assert_eq!(CollaborationRequestStatus::Approved.as_str(), "APPROVED");
    assert_eq!(CollaborationRequestStatus::Rejected.as_str(), "REJECTED");
}

#[test]
fn test_request_status_from_str() {
    assert_eq!(
        CollaborationRequestStatus::from_str("PENDING").unwrap(),
        CollaborationRequestStatus::Pending
    );
    assert_eq!(
        CollaborationRequestStatus::from_str("ACCEPTED").unwrap(),
        CollaborationRequestStatus::Accepted
    );
    assert_eq!(
        CollaborationRequestStatus::from_str("APPROVED").unwrap(),
        CollaborationRequestStatus::Approved
    );
    assert_eq!(
        CollaborationRequestStatus::from_str("REJECTED").unwrap(),
        CollaborationRequestStatus::Rejected
    );
}

#[test]
fn test_request_status_from_str_is_case_sensitive() {
    let err = CollaborationRequestStatus::from_str("pending").unwrap_err();

    match err {
        CoreError::InvalidRequestStatus { value, .. } => assert_eq!(value, "pending"),
    }
    assert!(CollaborationRequestStatus::from_str("approved").is_err());
    assert!(CollaborationRequestStatus::from_str("ONGOING").is_err());
    assert!(CollaborationRequestStatus::from_str("").is_err());
}

#[test]
fn test_request_status_default_and_decided() {
    assert_eq!(
        CollaborationRequestStatus::default(),
        CollaborationRequestStatus::Pending
    );
    assert!(!CollaborationRequestStatus::Pending.is_decided());
    assert!(CollaborationRequestStatus::Accepted.is_decided());
    assert!(CollaborationRequestStatus::Approved.is_decided());
    assert!(CollaborationRequestStatus::Rejected.is_decided());
}

#[test]
fn test_request_status_serde_uses_wire_strings() {
    let json = serde_json::to_string(&CollaborationRequestStatus::Accepted).unwrap();
    assert_eq!(json, "\"ACCEPTED\"");

    let parsed: CollaborationRequestStatus = serde_json::from_str("\"REJECTED\"").unwrap();
    assert_eq!(parsed, CollaborationRequestStatus::Rejected);
    assert_eq!(parsed.to_string(), "REJECTED");
}
