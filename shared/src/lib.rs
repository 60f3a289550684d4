use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub mod upload;
pub mod view;

pub use strum::IntoEnumIterator;

/// Subset of checks the user asked to have reported.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, EnumIter)]
pub enum AnalysisMode {
    #[default]
    Both,
    QualityOnly,
    CertificationOnly,
}

impl AnalysisMode {
    /// 1-indexed value used by the selector and on the wire.
    pub fn index(self) -> i64 {
        match self {
            AnalysisMode::Both => 1,
            AnalysisMode::QualityOnly => 2,
            AnalysisMode::CertificationOnly => 3,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(AnalysisMode::Both),
            2 => Some(AnalysisMode::QualityOnly),
            3 => Some(AnalysisMode::CertificationOnly),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::Both => "1. Check Certification & Quality Check",
            AnalysisMode::QualityOnly => "2. Quality Check Required",
            AnalysisMode::CertificationOnly => "3. Certification Needed",
        }
    }

    pub fn reports_quality(self) -> bool {
        matches!(self, AnalysisMode::Both | AnalysisMode::QualityOnly)
    }

    pub fn reports_certification(self) -> bool {
        matches!(self, AnalysisMode::Both | AnalysisMode::CertificationOnly)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum CheckStatus {
    #[serde(rename = "required")]
    #[strum(serialize = "required")]
    Required,
    #[serde(rename = "not required")]
    #[strum(serialize = "not required")]
    NotRequired,
    #[serde(rename = "not applicable")]
    #[strum(serialize = "not applicable")]
    NotApplicable,
    #[serde(rename = "error")]
    #[strum(serialize = "error")]
    Error,
}

impl CheckStatus {
    pub fn from_flag(required: bool) -> Self {
        if required {
            CheckStatus::Required
        } else {
            CheckStatus::NotRequired
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    pub quality_check_required: CheckStatus,
    pub certification_needed: CheckStatus,
    pub details: String,
}

impl AnalysisResult {
    pub fn error(details: impl Into<String>) -> Self {
        Self {
            quality_check_required: CheckStatus::Error,
            certification_needed: CheckStatus::Error,
            details: details.into(),
        }
    }

    pub fn not_applicable(details: impl Into<String>) -> Self {
        Self {
            quality_check_required: CheckStatus::NotApplicable,
            certification_needed: CheckStatus::NotApplicable,
            details: details.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_round_trip_through_their_index() {
        for mode in AnalysisMode::iter() {
            assert_eq!(AnalysisMode::from_index(mode.index()), Some(mode));
        }
        assert_eq!(AnalysisMode::from_index(0), None);
        assert_eq!(AnalysisMode::from_index(4), None);
    }

    #[test]
    fn default_mode_is_both() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Both);
        assert_eq!(AnalysisMode::iter().next(), Some(AnalysisMode::Both));
    }

    #[test]
    fn status_serializes_as_plain_text() {
        let result = AnalysisResult {
            quality_check_required: CheckStatus::NotRequired,
            certification_needed: CheckStatus::NotApplicable,
            details: "x".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["quality_check_required"], "not required");
        assert_eq!(json["certification_needed"], "not applicable");
        assert_eq!(CheckStatus::Error.to_string(), "error");
    }
}
