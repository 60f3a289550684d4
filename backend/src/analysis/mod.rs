pub mod config;
pub mod model;
pub mod placeholder;
pub mod service;

pub use config::AnalyzerConfig;
pub use placeholder::DimensionThresholdModel;
pub use service::AnalysisService;
