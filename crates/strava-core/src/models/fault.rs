// ABOUTME: Error body returned by the Strava resource API on non-success responses
// ABOUTME: Parsed opportunistically by the request pipeline and surfaced inside ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Encapsulates the errors that may be returned from the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// The message of the fault
    pub message: String,
    /// The set of specific errors associated with this fault, if any
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<FaultError>,
}

/// One specific error inside a [`Fault`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultError {
    /// The code associated with this error
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// The specific field or aspect of the resource associated with this error
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    /// The type of resource associated with this error
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_parses_remote_shape() {
        let body = r#"{
            "message": "Authorization Error",
            "errors": [{"resource": "Athlete", "field": "access_token", "code": "invalid"}]
        }"#;
        let fault: Fault = serde_json::from_str(body).unwrap();
        assert_eq!(fault.message, "Authorization Error");
        assert_eq!(fault.errors[0].field, "access_token");
    }

    #[test]
    fn test_fault_without_errors() {
        let fault: Fault = serde_json::from_str(r#"{"message": "Not Found"}"#).unwrap();
        assert!(fault.errors.is_empty());
    }

    #[test]
    fn test_fault_with_null_members() {
        let body = r#"{
            "message": "Bad Request",
            "errors": [{"resource": "Activity", "field": null, "code": "invalid"}]
        }"#;
        let fault: Fault = serde_json::from_str(body).unwrap();
        assert!(fault.errors[0].field.is_empty());

        let fault: Fault = serde_json::from_str(r#"{"message": "Not Found", "errors": null}"#).unwrap();
        assert!(fault.errors.is_empty());
    }
}
