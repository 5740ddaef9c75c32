mod config;
mod error;
mod handlers;
mod mail;
mod models;
mod rate_limit;
mod routes;
mod state;
mod validation;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Environment};
use crate::mail::SmtpMailer;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let mailer = SmtpMailer::new(
        &config.smtp_host,
        config.email_user.clone(),
        config.email_pass.clone(),
        config.mail_timeout,
    )
    .context("failed to configure the SMTP transport")?;

    // one limiter for all workers
    let state = web::Data::new(AppState::new(&config, Arc::new(mailer)));

    info!(
        port = config.port,
        environment = config.environment.as_str(),
        "Henry-Tech server starting"
    );

    let bind = (config.host.clone(), config.port);
    let port = config.port;
    HttpServer::new(move || {
        let app = App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(state.clone())
            .configure(routes::init);

        match config.environment {
            Environment::Production => {
                app.configure(|cfg| routes::frontend::init(cfg, &config.static_dir))
            }
            Environment::Development => app,
        }
    })
    .bind(bind)
    .with_context(|| format!("failed to bind port {port}"))?
    .run()
    .await?;

    Ok(())
}
