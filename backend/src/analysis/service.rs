use super::model::{AnalysisError, PcbModel, Prediction};
use image::{DynamicImage, ImageFormat};
use shared::{AnalysisMode, AnalysisResult, CheckStatus};
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalysisService {
    model: Arc<dyn PcbModel>,
}

impl AnalysisService {
    pub fn new(model: Arc<dyn PcbModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Analyzes `image` for the 1-indexed `mode`. Never fails: decode and model
    /// errors come back as a result with both statuses set to `error`.
    pub fn analyze(&self, image: &[u8], mode: i64) -> AnalysisResult {
        self.analyze_selection(image, AnalysisMode::from_index(mode), &mode.to_string())
    }

    /// Same as [`AnalysisService::analyze`] for a mode still in its submitted text form.
    pub fn analyze_form_value(&self, image: &[u8], raw_mode: &str) -> AnalysisResult {
        let raw_mode = raw_mode.trim();
        let mode = raw_mode
            .parse::<i64>()
            .ok()
            .and_then(AnalysisMode::from_index);
        self.analyze_selection(image, mode, raw_mode)
    }

    fn analyze_selection(
        &self,
        image: &[u8],
        mode: Option<AnalysisMode>,
        submitted: &str,
    ) -> AnalysisResult {
        match self.try_analyze(image, mode, submitted) {
            Ok(result) => result,
            Err(e) => {
                log::error!("PCB analysis failed: {}", e);
                AnalysisResult::error(format!(
                    "An error occurred during image processing: {}",
                    e
                ))
            }
        }
    }

    fn try_analyze(
        &self,
        image: &[u8],
        mode: Option<AnalysisMode>,
        submitted: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let decoded = decode(image)?;
        let Some(mode) = mode else {
            log::warn!("Rejected invalid analysis option {:?}", submitted);
            return Ok(AnalysisResult::not_applicable(format!(
                "Invalid analysis option selected: {}.",
                submitted
            )));
        };

        let prediction = self.model.predict(&decoded)?;
        Ok(project(mode, prediction))
    }
}

/// Decodes JPEG, PNG or BMP bytes; other formats the `image` crate knows are rejected.
fn decode(image: &[u8]) -> Result<DynamicImage, AnalysisError> {
    let format = image::guess_format(image)?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Bmp => {
            Ok(image::load_from_memory_with_format(image, format)?)
        }
        other => Err(AnalysisError::UnsupportedFormat(other)),
    }
}

fn project(mode: AnalysisMode, prediction: Prediction) -> AnalysisResult {
    let quality_check_required = if mode.reports_quality() {
        CheckStatus::from_flag(prediction.quality_check)
    } else {
        CheckStatus::NotApplicable
    };
    let certification_needed = if mode.reports_certification() {
        CheckStatus::from_flag(prediction.certification)
    } else {
        CheckStatus::NotApplicable
    };

    AnalysisResult {
        quality_check_required,
        certification_needed,
        details: prediction.summary,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::placeholder::DimensionThresholdModel;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    pub(crate) fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width,
            height,
            Rgb([20, 90, 30]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        encoded(width, height, ImageFormat::Png)
    }

    fn service() -> AnalysisService {
        AnalysisService::new(Arc::new(DimensionThresholdModel::default()))
    }

    struct FailingModel;

    impl PcbModel for FailingModel {
        fn name(&self) -> &str {
            "failing"
        }

        fn predict(&self, _image: &DynamicImage) -> Result<Prediction, AnalysisError> {
            Err(AnalysisError::Model("weights not loaded".into()))
        }
    }

    #[test]
    fn large_board_in_both_mode_requires_everything() {
        let result = service().analyze(&png(500, 250), 1);
        assert_eq!(result.quality_check_required, CheckStatus::Required);
        assert_eq!(result.certification_needed, CheckStatus::Required);
        assert!(result.details.contains("500x250"));
    }

    #[test]
    fn quality_only_marks_certification_not_applicable() {
        let result = service().analyze(&png(100, 100), 2);
        assert_eq!(result.quality_check_required, CheckStatus::NotRequired);
        assert_eq!(result.certification_needed, CheckStatus::NotApplicable);
    }

    #[test]
    fn certification_only_marks_quality_not_applicable() {
        let result = service().analyze(&png(400, 100), 3);
        assert_eq!(result.quality_check_required, CheckStatus::NotApplicable);
        assert_eq!(result.certification_needed, CheckStatus::NotRequired);
    }

    #[test]
    fn every_valid_mode_reports_only_its_checks() {
        let image = png(320, 240);
        for mode in 1..=3 {
            let result = service().analyze(&image, mode);
            let selected = AnalysisMode::from_index(mode).unwrap();
            assert_eq!(
                result.quality_check_required != CheckStatus::NotApplicable,
                selected.reports_quality()
            );
            assert_eq!(
                result.certification_needed != CheckStatus::NotApplicable,
                selected.reports_certification()
            );
            assert!(!result.details.is_empty());
        }
    }

    #[test]
    fn both_mode_never_yields_not_applicable() {
        for (w, h) in [(1, 1), (300, 200), (1024, 768)] {
            let result = service().analyze(&png(w, h), 1);
            assert!(matches!(
                result.quality_check_required,
                CheckStatus::Required | CheckStatus::NotRequired
            ));
            assert!(matches!(
                result.certification_needed,
                CheckStatus::Required | CheckStatus::NotRequired
            ));
        }
    }

    #[test]
    fn invalid_mode_names_the_value() {
        for mode in [0, 4] {
            let result = service().analyze(&png(500, 250), mode);
            assert_eq!(result.quality_check_required, CheckStatus::NotApplicable);
            assert_eq!(result.certification_needed, CheckStatus::NotApplicable);
            assert!(result.details.contains(&mode.to_string()));
        }
    }

    #[test]
    fn form_values_are_parsed_before_dispatch() {
        let image = png(500, 250);
        assert_eq!(
            service().analyze_form_value(&image, " 2 "),
            service().analyze(&image, 2)
        );

        let result = service().analyze_form_value(&image, "both");
        assert_eq!(result.quality_check_required, CheckStatus::NotApplicable);
        assert_eq!(result.certification_needed, CheckStatus::NotApplicable);
        assert!(result.details.contains("both"));
    }

    #[test]
    fn undecodable_bytes_become_an_error_result() {
        let result = service().analyze(b"definitely not an image", 1);
        assert_eq!(result.quality_check_required, CheckStatus::Error);
        assert_eq!(result.certification_needed, CheckStatus::Error);
        assert!(result.details.starts_with("An error occurred during image processing: "));
        assert!(result.details.len() > "An error occurred during image processing: ".len());
    }

    #[test]
    fn other_formats_are_rejected_even_if_decodable() {
        let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
        let result = service().analyze(gif, 1);
        assert_eq!(result.quality_check_required, CheckStatus::Error);
        assert_eq!(result.certification_needed, CheckStatus::Error);
        assert!(result.details.contains("Gif"));
    }

    #[test]
    fn truncated_png_is_an_error_result() {
        let mut bytes = png(64, 64);
        bytes.truncate(bytes.len() / 2);
        let result = service().analyze(&bytes, 2);
        assert_eq!(result.quality_check_required, CheckStatus::Error);
        assert_eq!(result.certification_needed, CheckStatus::Error);
    }

    #[test]
    fn model_failure_becomes_an_error_result() {
        let service = AnalysisService::new(Arc::new(FailingModel));
        let result = service.analyze(&png(10, 10), 1);
        assert_eq!(result, AnalysisResult::error(
            "An error occurred during image processing: model failure: weights not loaded"
        ));
    }

    #[test]
    fn jpeg_and_bmp_decode_too() {
        let jpeg = service().analyze(&encoded(500, 250, ImageFormat::Jpeg), 1);
        assert_eq!(jpeg.quality_check_required, CheckStatus::Required);
        let bmp = service().analyze(&encoded(100, 100, ImageFormat::Bmp), 3);
        assert_eq!(bmp.certification_needed, CheckStatus::NotRequired);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let image = png(333, 222);
        let first = service().analyze(&image, 1);
        for _ in 0..5 {
            assert_eq!(service().analyze(&image, 1), first);
        }
    }
}
