use serde::{Deserialize, Serialize};

/// Standard API envelope used by the user-management service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Best human-readable failure text carried by the envelope, if any.
    pub fn failure_text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_text_prefers_error_over_message() {
        let envelope: ApiResponse<()> = serde_json::from_value(json!({
            "status": "error",
            "error": "User 4 not found",
            "message": "request failed"
        }))
        .unwrap();
        assert_eq!(envelope.failure_text(), Some("User 4 not found"));

        let envelope: ApiResponse<()> =
            serde_json::from_value(json!({"status": "error", "message": "try later"})).unwrap();
        assert_eq!(envelope.failure_text(), Some("try later"));
    }
}
