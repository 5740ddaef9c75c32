use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;
use std::path::{Path, PathBuf};

/// Serves the built single-page app; unknown paths fall back to its entry point.
pub fn init(cfg: &mut web::ServiceConfig, static_dir: &str) {
    let index: PathBuf = Path::new(static_dir).join("index.html");

    cfg.service(
        Files::new("/", static_dir)
            .index_file("index.html")
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}
