use serde::Serialize;

use crate::models::registration::FieldError;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            errors: None,
        }
    }

    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message,
            errors: None,
        }
    }

    pub fn invalid(message: &'static str, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message,
            errors: Some(errors),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String, // ISO 8601, UTC
}
