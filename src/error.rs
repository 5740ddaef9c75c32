use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use crate::mail::MailError;
use crate::models::api::ApiResponse;
use crate::models::registration::FieldError;
use crate::rate_limit::THROTTLED_MESSAGE;
use crate::validation::INVALID_FORM_MESSAGE;

pub const DISPATCH_FAILED_MESSAGE: &str =
    "Erreur lors de l'envoi du formulaire. Veuillez réessayer.";

/// Terminal outcomes of a registration request other than success.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration error, client exceeded its request quota")]
    RateLimited,

    #[error("Registration error, {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("Registration error, notification dispatch failed: {0}")]
    Dispatch(#[from] MailError),
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RegistrationError::Invalid(_) => StatusCode::BAD_REQUEST,
            RegistrationError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RegistrationError::RateLimited => ApiResponse::failure(THROTTLED_MESSAGE),
            RegistrationError::Invalid(errors) => {
                ApiResponse::invalid(INVALID_FORM_MESSAGE, errors.clone())
            }
            RegistrationError::Dispatch(cause) => {
                // transport details stay in the server log
                error!(error = %cause, "failed to send registration emails");
                ApiResponse::failure(DISPATCH_FAILED_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
