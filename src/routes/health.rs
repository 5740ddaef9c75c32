use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};
use chrono::{SecondsFormat, Utc};

use crate::models::api::HealthResponse;

#[get("/health")]
async fn health() -> impl Responder {
    let body = HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"))
        .json(body)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
