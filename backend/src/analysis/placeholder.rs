use super::config::PlaceholderThresholds;
use super::model::{AnalysisError, PcbModel, Prediction};
use image::{DynamicImage, GenericImageView};

/// Stand-in classifier that only looks at the pixel dimensions.
#[derive(Debug, Clone)]
pub struct DimensionThresholdModel {
    thresholds: PlaceholderThresholds,
}

impl DimensionThresholdModel {
    pub fn new(thresholds: PlaceholderThresholds) -> Self {
        Self { thresholds }
    }
}

impl Default for DimensionThresholdModel {
    fn default() -> Self {
        Self::new(PlaceholderThresholds::default())
    }
}

impl PcbModel for DimensionThresholdModel {
    fn name(&self) -> &str {
        "dimension-threshold"
    }

    fn predict(&self, image: &DynamicImage) -> Result<Prediction, AnalysisError> {
        let (width, height) = image.dimensions();
        let summary = format!(
            "Placeholder analysis based on image dimensions ({}x{}).\n\
             Replace with a trained model that inspects component presence, trace width, \
             solder quality and layer count.",
            width, height
        );

        Ok(Prediction {
            quality_check: width > self.thresholds.quality_width_threshold,
            certification: height > self.thresholds.certification_height_threshold,
            summary,
        })
    }
}
