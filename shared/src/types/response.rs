//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Success envelope: `{ message, status, metadata }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    /// Human-readable outcome
    pub message: String,

    /// HTTP status code mirrored in the body
    pub status: u16,

    /// Payload
    pub metadata: T,
}

impl<T> SuccessResponse<T> {
    /// 200 OK envelope
    pub fn ok(message: impl Into<String>, metadata: T) -> Self {
        Self {
            message: message.into(),
            status: 200,
            metadata,
        }
    }

    /// 201 Created envelope
    pub fn created(message: impl Into<String>, metadata: T) -> Self {
        Self {
            message: message.into(),
            status: 201,
            metadata,
        }
    }

    /// Map the payload to a different type
    pub fn map<U, F>(self, f: F) -> SuccessResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        SuccessResponse {
            message: self.message,
            status: self.status,
            metadata: f(self.metadata),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_envelope_serialization() {
        let response = SuccessResponse::created("Registered OK!", serde_json::json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], 201);
        assert_eq!(value["message"], "Registered OK!");
        assert_eq!(value["metadata"]["id"], 1);
    }

    #[test]
    fn test_map_keeps_status() {
        let response = SuccessResponse::ok("ok", 2).map(|n| n * 21);
        assert_eq!(response.status, 200);
        assert_eq!(response.metadata, 42);
    }
}
