use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use shared::ErrorResponse;

/// Request rejected before it reaches the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No image was uploaded")]
    MissingImage,
    #[error("Unsupported file type '{0}', expected one of jpg, jpeg, png, bmp")]
    UnsupportedExtension(String),
    #[error("Image exceeds the {limit} byte upload limit")]
    PayloadTooLarge { limit: usize },
    #[error("Malformed upload: {0}")]
    Multipart(String),
}

impl From<actix_multipart::MultipartError> for ApiError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        ApiError::Multipart(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImage | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedExtension(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid analyzer config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}
