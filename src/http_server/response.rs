//! # Response Envelopes
//!
//! Every body carries a `success` flag. Successful bodies add `data`
//! (plus `count` for lists or `message` for creates); failures add `message`
//! and, for server faults, an `error` detail.

use serde::Serialize;

/// List-shaped success body
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            count,
            data,
        }
    }
}

/// Single-item success body
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Creation success body
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Failure body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_counts_data() {
        let response = ListResponse::new(vec![json!({"id": 1}), json!({"id": 2})]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 2);
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_list_response_field_order() {
        let json = serde_json::to_string(&ListResponse::<u8>::new(vec![])).unwrap();
        assert_eq!(json, r#"{"success":true,"count":0,"data":[]}"#);
    }

    #[test]
    fn test_error_response_omits_missing_detail() {
        let json = serde_json::to_string(&ErrorResponse::new("Route not found", None)).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"Route not found"}"#);

        let value =
            serde_json::to_value(ErrorResponse::new("Error adding user", Some("disk full".into())))
                .unwrap();
        assert_eq!(value["error"], "disk full");
    }
}
