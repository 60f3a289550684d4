use image::DynamicImage;

/// Failure while interpreting the image bytes or running the model.
#[allow(dead_code)]
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Decode(#[from] image::ImageError),
    #[error("unsupported image format {0:?}, expected JPEG, PNG or BMP")]
    UnsupportedFormat(image::ImageFormat),
    /// Raised by trained `PcbModel` implementations; the placeholder never fails.
    #[error("model failure: {0}")]
    Model(String),
}

/// Raw model output, before it is projected onto the selected mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub quality_check: bool,
    pub certification: bool,
    pub summary: String,
}

/// Classification capability behind the analysis service.
///
/// A trained classifier replaces [`super::placeholder::DimensionThresholdModel`]
/// by implementing this trait; routes and the frontend stay untouched.
pub trait PcbModel: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, image: &DynamicImage) -> Result<Prediction, AnalysisError>;
}
