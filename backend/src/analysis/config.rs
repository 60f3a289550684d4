use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_version")]
    pub version: f32,
    #[serde(default)]
    pub placeholder: PlaceholderThresholds,
}

/// Pixel thresholds of the placeholder model. Demo values, not domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlaceholderThresholds {
    #[serde(default = "default_quality_width")]
    pub quality_width_threshold: u32,
    #[serde(default = "default_certification_height")]
    pub certification_height_threshold: u32,
}

fn default_version() -> f32 {
    1.0
}

fn default_quality_width() -> u32 {
    300
}

fn default_certification_height() -> u32 {
    200
}

impl Default for PlaceholderThresholds {
    fn default() -> Self {
        Self {
            quality_width_threshold: default_quality_width(),
            certification_height_threshold: default_certification_height(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            placeholder: PlaceholderThresholds::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Reads the YAML file at `path`, falling back to built-in defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!(
                "Analyzer config {} not found, using default thresholds",
                path.display()
            );
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(config_str: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = serde_yaml::from_str(config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thresholds() {
        let config = AnalyzerConfig::from_yaml(
            "version: 1.0\nplaceholder:\n  quality_width_threshold: 640\n  certification_height_threshold: 480\n",
        )
        .unwrap();
        assert_eq!(config.version, 1.0);
        assert_eq!(config.placeholder.quality_width_threshold, 640);
        assert_eq!(config.placeholder.certification_height_threshold, 480);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = AnalyzerConfig::from_yaml("placeholder:\n  quality_width_threshold: 10\n").unwrap();
        assert_eq!(config.placeholder.quality_width_threshold, 10);
        assert_eq!(config.placeholder.certification_height_threshold, 200);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AnalyzerConfig::load(Path::new("/nonexistent/analyzer.yaml")).unwrap();
        assert_eq!(config.placeholder, PlaceholderThresholds::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(AnalyzerConfig::from_yaml("placeholder: [1, 2").is_err());
    }
}
