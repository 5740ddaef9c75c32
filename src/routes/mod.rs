pub mod frontend;
pub mod health;
pub mod inscription;

use actix_web::dev::ServiceResponse;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::models::api::ApiResponse;
use crate::validation::INVALID_FORM_MESSAGE;

const MAX_BODY_BYTES: usize = 16 * 1024;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(ErrorHandlers::new().handler(StatusCode::PAYLOAD_TOO_LARGE, oversized_body))
            .app_data(web::PayloadConfig::default().limit(MAX_BODY_BYTES))
            .app_data(json_config())
            .app_data(form_config())
            .configure(health::init)
            .configure(inscription::init),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            debug!(error = %err, "unreadable JSON body");
            InternalError::from_response(err, invalid_body()).into()
        })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            debug!(error = %err, "unreadable form body");
            InternalError::from_response(err, invalid_body()).into()
        })
}

// Body buffering rejects large payloads with a bare 413 before the JSON and
// form error handlers get to run.
fn oversized_body<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    debug!("request body over the size limit");
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, invalid_body()).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

fn invalid_body() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::failure(INVALID_FORM_MESSAGE))
}
