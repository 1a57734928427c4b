//! The JSON response envelope
//!
//! Every endpoint answers with a top-level `success` flag and a
//! human-readable `message`; on success the payload fields are flattened
//! into the same object, e.g.
//!
//! ```json
//! { "success": true, "message": "OTP sent successfully", "email": "a@x.com" }
//! ```

use serde::{Deserialize, Serialize};

/// Response envelope wrapping an optional flattened payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Payload fields, flattened into the envelope on success; `None`
    /// contributes nothing to the serialized object
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed response; the payload slot stays empty
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload fields
    pub fn ack(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Clone, Debug)]
    struct EmailPayload {
        email: String,
    }

    #[test]
    fn payload_fields_are_flattened() {
        let response = ApiResponse::success(
            "OTP sent successfully",
            EmailPayload {
                email: "a@x.com".to_string(),
            },
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "OTP sent successfully",
                "email": "a@x.com"
            })
        );
    }

    #[test]
    fn error_omits_payload() {
        let response: ApiResponse<EmailPayload> = ApiResponse::error("Email is required");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Email is required"
            })
        );
    }

    #[test]
    fn ack_has_no_extra_fields() {
        let response = ApiResponse::ack("done");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": true, "message": "done" }));
    }
}
