use crate::analysis::AnalysisService;
use crate::error::ApiError;
use actix_files::Files;
use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::{info, warn};
use serde_json::json;
use shared::upload::{extension_of, is_accepted_file_name, UploadSettings};
use shared::AnalysisMode;
use uuid::Uuid;

const MODE_FIELD_LIMIT: usize = 64;

#[derive(Clone, Copy)]
pub struct UploadPolicy {
    pub max_bytes: usize,
}

struct UploadedImage {
    file_name: String,
    bytes: Vec<u8>,
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/analyze").route(web::post().to(handle_analyze)))
        .service(web::resource("/api/config").route(web::get().to(upload_settings)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn handle_analyze(
    service: web::Data<AnalysisService>,
    policy: web::Data<UploadPolicy>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let mut image: Option<UploadedImage> = None;
    let mut raw_mode: Option<String> = None;

    while let Some(mut field) = payload.try_next().await? {
        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_owned),
                cd.get_filename().map(str::to_owned),
            ),
            None => (None, None),
        };

        match name.as_deref() {
            Some("image") => {
                let Some(file_name) = file_name.filter(|name| !name.is_empty()) else {
                    warn!("[{}] image part without a file name", request_id);
                    return Err(ApiError::MissingImage);
                };
                if !is_accepted_file_name(&file_name) {
                    warn!("[{}] rejected upload {:?}", request_id, file_name);
                    return Err(ApiError::UnsupportedExtension(
                        extension_of(&file_name).unwrap_or(file_name),
                    ));
                }
                let bytes = read_field(&mut field, policy.max_bytes).await?;
                image = Some(UploadedImage { file_name, bytes });
            }
            Some("mode") => {
                let (bytes, truncated) = read_capped_field(&mut field, MODE_FIELD_LIMIT).await?;
                let mut value = String::from_utf8_lossy(&bytes).into_owned();
                if truncated {
                    // Marker keeps an overlong selection from parsing as a valid mode.
                    value.push_str("...");
                }
                raw_mode = Some(value);
            }
            _ => {
                while field.try_next().await?.is_some() {}
            }
        }
    }

    let image = match image {
        Some(image) if !image.bytes.is_empty() => image,
        _ => return Err(ApiError::MissingImage),
    };
    let raw_mode = raw_mode.unwrap_or_else(|| AnalysisMode::default().index().to_string());

    info!(
        "[{}] analyzing {} ({} bytes) with {} model, option {}",
        request_id,
        image.file_name,
        image.bytes.len(),
        service.model_name(),
        raw_mode.trim()
    );
    let result = service.analyze_form_value(&image.bytes, &raw_mode);
    info!(
        "[{}] quality check: {}, certification: {}",
        request_id, result.quality_check_required, result.certification_needed
    );

    Ok(HttpResponse::Ok().json(result))
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, ApiError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if data.len() + chunk.len() > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

/// Reads at most `limit` bytes and drains the rest; the flag reports whether anything was cut.
async fn read_capped_field(field: &mut Field, limit: usize) -> Result<(Vec<u8>, bool), ApiError> {
    let mut data = Vec::new();
    let mut truncated = false;
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        let room = limit - data.len();
        if chunk.len() > room {
            data.extend_from_slice(&chunk[..room]);
            truncated = true;
        } else {
            data.extend_from_slice(&chunk);
        }
    }
    Ok((data, truncated))
}

async fn upload_settings(policy: web::Data<UploadPolicy>) -> HttpResponse {
    HttpResponse::Ok().json(UploadSettings::with_limit(policy.max_bytes))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
