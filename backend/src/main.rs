mod analysis;
mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use analysis::{AnalysisService, DimensionThresholdModel};
use config::AppConfig;
use routes::{configure_routes, UploadPolicy};
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(format!(
                "Configuration error: {}",
                e
            )));
        }
    };

    let model = DimensionThresholdModel::new(config.analyzer.placeholder);
    let service = AnalysisService::new(Arc::new(model));
    log::info!(
        "Using {} model, analyzer config v{} (quality width > {}px, certification height > {}px)",
        service.model_name(),
        config.analyzer.version,
        config.analyzer.placeholder.quality_width_threshold,
        config.analyzer.placeholder.certification_height_threshold
    );

    let policy = UploadPolicy {
        max_bytes: config.max_upload_bytes,
    };
    let frontend_dir = config.frontend_dir.clone();

    log::info!("Serving frontend from {}", frontend_dir);
    log::info!("Upload limit: {} bytes", policy.max_bytes);
    log::info!("Starting server on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(policy))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
