use crate::analysis::AnalyzerConfig;
use crate::error::ConfigError;
use shared::upload::DEFAULT_MAX_UPLOAD_BYTES;
use std::env;
use std::path::PathBuf;

pub struct AppConfig {
    pub bind_address: String,
    pub frontend_dir: String,
    pub max_upload_bytes: usize,
    pub analyzer: AnalyzerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
        let bind_address = format!("0.0.0.0:{}", port);

        let frontend_dir = env::var("FRONTEND_DIR").unwrap_or_else(|_| {
            if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
                format!("{}/../frontend/dist", manifest_dir)
            } else {
                "/usr/src/app/frontend/dist".to_string()
            }
        });

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(value) => parse_limit(&value)?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let analyzer_path = env::var("ANALYZER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config/analyzer.yaml"));
        let analyzer = AnalyzerConfig::load(&analyzer_path)?;

        Ok(Self {
            bind_address,
            frontend_dir,
            max_upload_bytes,
            analyzer,
        })
    }
}

fn parse_limit(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidEnv {
            name: "MAX_UPLOAD_BYTES",
            value: value.to_string(),
        }),
    }
}
