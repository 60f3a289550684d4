use crate::{AnalysisMode, AnalysisResult, CheckStatus};

pub const QUALITY_LABEL: &str = "Quality Check Required";
pub const CERTIFICATION_LABEL: &str = "Certification Needed";
pub const EMPTY_PROMPT: &str = "Please upload a PCB image to start the analysis.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLine {
    pub label: &'static str,
    pub status: CheckStatus,
}

/// Status lines shown for `mode`; the details block is rendered separately and always.
pub fn visible_lines(mode: AnalysisMode, result: &AnalysisResult) -> Vec<ResultLine> {
    let mut lines = Vec::with_capacity(2);
    if mode.reports_quality() {
        lines.push(ResultLine {
            label: QUALITY_LABEL,
            status: result.quality_check_required,
        });
    }
    if mode.reports_certification() {
        lines.push(ResultLine {
            label: CERTIFICATION_LABEL,
            status: result.certification_needed,
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            quality_check_required: CheckStatus::Required,
            certification_needed: CheckStatus::NotRequired,
            details: "Placeholder analysis based on image dimensions (400x100).".into(),
        }
    }

    #[test]
    fn both_mode_shows_both_lines_in_order() {
        let lines = visible_lines(AnalysisMode::Both, &sample());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, QUALITY_LABEL);
        assert_eq!(lines[0].status, CheckStatus::Required);
        assert_eq!(lines[1].label, CERTIFICATION_LABEL);
        assert_eq!(lines[1].status, CheckStatus::NotRequired);
    }

    #[test]
    fn single_check_modes_show_one_line() {
        let quality = visible_lines(AnalysisMode::QualityOnly, &sample());
        assert_eq!(quality, vec![ResultLine { label: QUALITY_LABEL, status: CheckStatus::Required }]);

        let certification = visible_lines(AnalysisMode::CertificationOnly, &sample());
        assert_eq!(
            certification,
            vec![ResultLine { label: CERTIFICATION_LABEL, status: CheckStatus::NotRequired }]
        );
    }
}
