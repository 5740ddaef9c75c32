use actix_web::{Either, HttpRequest, HttpResponse, post, web};
use std::net::SocketAddr;

use crate::error::RegistrationError;
use crate::handlers::registration::register;
use crate::models::api::ApiResponse;
use crate::models::registration::RegistrationForm;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str =
    "Inscription envoyée avec succès ! Vérifiez votre email pour la confirmation.";

#[post("/inscription")]
async fn inscription(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: Either<web::Json<RegistrationForm>, web::Form<RegistrationForm>>,
) -> Result<HttpResponse, RegistrationError> {
    let form = match form {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    let identity = client_identity(&req, state.trust_proxy);

    register(&state, &identity, form).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SUCCESS_MESSAGE)))
}

/// IP used to key the request quota.
fn client_identity(req: &HttpRequest, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(addr) = req.connection_info().realip_remote_addr() {
            return addr
                .parse::<SocketAddr>()
                .map(|socket| socket.ip().to_string())
                .unwrap_or_else(|_| addr.to_string());
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(inscription);
}
