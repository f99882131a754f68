//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::store::Ttl;

/// Response body for the SET operation (POST /api/store/set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            message: "Value set successfully".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for the GET operation (GET /api/store/get)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value, present only when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Whether the key was found
    pub found: bool,
    /// Explanation when the key was not found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GetResponse {
    /// Response for a key holding `value`.
    pub fn found(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            found: true,
            message: None,
        }
    }

    /// Response for an absent or expired key.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            found: false,
            message: Some("Key not found".to_string()),
        }
    }
}

/// Response body for the DELETE operation (DELETE /api/store/delete)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// The key that was targeted
    pub key: String,
    /// Whether a key was actually removed
    pub deleted: bool,
    /// Outcome message
    pub message: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>, deleted: bool) -> Self {
        let message = if deleted {
            "Key deleted successfully"
        } else {
            "Key not found"
        };
        Self {
            key: key.into(),
            deleted,
            message: message.to_string(),
        }
    }
}

/// Response body for the EXISTS operation (GET /api/store/exists)
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    /// The requested key
    pub key: String,
    /// Whether the key exists
    pub exists: bool,
}

impl ExistsResponse {
    /// Creates a new ExistsResponse
    pub fn new(key: impl Into<String>, exists: bool) -> Self {
        Self {
            key: key.into(),
            exists,
        }
    }
}

/// Response body for the TTL operation (GET /api/store/ttl)
#[derive(Debug, Clone, Serialize)]
pub struct TtlResponse {
    /// The requested key
    pub key: String,
    /// `-2` absent, `-1` no expiration, otherwise remaining seconds
    pub ttl: i64,
    /// Human-readable description of `ttl`
    pub message: String,
}

impl TtlResponse {
    /// Creates a new TtlResponse
    pub fn new(key: impl Into<String>, ttl: Ttl) -> Self {
        let message = match ttl {
            Ttl::Missing => "Key does not exist".to_string(),
            Ttl::Persistent => "Key exists but has no expiration".to_string(),
            Ttl::Expires(secs) => format!("TTL in seconds: {}", secs),
        };
        Self {
            key: key.into(),
            ttl: ttl.as_seconds(),
            message,
        }
    }
}

/// Response body for the EXPIRE operation (POST /api/store/expire)
#[derive(Debug, Clone, Serialize)]
pub struct ExpireResponse {
    /// The targeted key
    pub key: String,
    /// Whether an expiration was applied
    pub updated: bool,
    /// Outcome message
    pub message: String,
}

impl ExpireResponse {
    /// Creates a new ExpireResponse
    pub fn new(key: impl Into<String>, updated: bool) -> Self {
        let message = if updated {
            "Expiration set successfully"
        } else {
            "Key not found"
        };
        Self {
            key: key.into(),
            updated,
            message: message.to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Backend that answered the probe
    pub backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: backend.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_response_shape() {
        let resp = serde_json::to_value(SetResponse::new("my_key")).unwrap();
        assert_eq!(
            resp,
            json!({"message": "Value set successfully", "key": "my_key"})
        );
    }

    #[test]
    fn test_get_response_found_shape() {
        let resp = serde_json::to_value(GetResponse::found("k", json!("v"))).unwrap();
        assert_eq!(resp, json!({"key": "k", "value": "v", "found": true}));
    }

    #[test]
    fn test_get_response_not_found_shape() {
        let resp = serde_json::to_value(GetResponse::not_found("k")).unwrap();
        assert_eq!(
            resp,
            json!({"key": "k", "found": false, "message": "Key not found"})
        );
    }

    #[test]
    fn test_delete_response_messages() {
        assert_eq!(
            DeleteResponse::new("k", true).message,
            "Key deleted successfully"
        );
        assert_eq!(DeleteResponse::new("k", false).message, "Key not found");
    }

    #[test]
    fn test_ttl_response_messages() {
        let missing = TtlResponse::new("k", Ttl::Missing);
        assert_eq!(missing.ttl, -2);
        assert_eq!(missing.message, "Key does not exist");

        let persistent = TtlResponse::new("k", Ttl::Persistent);
        assert_eq!(persistent.ttl, -1);
        assert_eq!(persistent.message, "Key exists but has no expiration");

        let expiring = TtlResponse::new("k", Ttl::Expires(42));
        assert_eq!(expiring.ttl, 42);
        assert_eq!(expiring.message, "TTL in seconds: 42");
    }

    #[test]
    fn test_expire_response_messages() {
        assert!(ExpireResponse::new("k", true).message.contains("successfully"));
        assert_eq!(ExpireResponse::new("k", false).message, "Key not found");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("memory");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("memory"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
