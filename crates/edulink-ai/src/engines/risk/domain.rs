use serde::{Deserialize, Serialize};

/// Every feature key the scorer recognizes, with its documented
/// default when the caller omits it. Wire names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFeatures {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub absences_7_days: u32,
    #[serde(default)]
    pub absences_30_days: u32,
    #[serde(default = "full_attendance")]
    pub attendance_rate_30_days: f64,
    #[serde(default)]
    pub consecutive_absences: u32,
    #[serde(default)]
    pub literacy_level: Option<AssessmentLevel>,
    #[serde(default)]
    pub numeracy_level: Option<AssessmentLevel>,
    #[serde(default = "midline_score")]
    pub avg_learning_score: f64,
    #[serde(default)]
    pub contact_verified: bool,
    #[serde(default)]
    pub contact_response_rate: f64,
    #[serde(default)]
    pub has_disability: bool,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub wealth_proxy: WealthProxy,
    #[serde(default)]
    pub seasonal_migration_risk: bool,
    #[serde(default)]
    pub previous_dropout_attempt: bool,
}

fn full_attendance() -> f64 {
    100.0
}

fn midline_score() -> f64 {
    50.0
}

impl Default for StudentFeatures {
    fn default() -> Self {
        Self {
            student_id: None,
            absences_7_days: 0,
            absences_30_days: 0,
            attendance_rate_30_days: full_attendance(),
            consecutive_absences: 0,
            literacy_level: None,
            numeracy_level: None,
            avg_learning_score: midline_score(),
            contact_verified: false,
            contact_response_rate: 0.0,
            has_disability: false,
            location_type: LocationType::default(),
            wealth_proxy: WealthProxy::default(),
            seasonal_migration_risk: false,
            previous_dropout_attempt: false,
        }
    }
}

/// Benchmark standing from a learning assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentLevel {
    BelowBenchmark,
    AtBenchmark,
    AboveBenchmark,
    NotAssessed,
}

/// Settlement type of the student's home community.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    Urban,
    Rural,
    Remote,
}

impl LocationType {
    pub const fn label(self) -> &'static str {
        match self {
            LocationType::Urban => "Urban",
            LocationType::Rural => "Rural",
            LocationType::Remote => "Remote",
        }
    }
}

/// Household-wealth proxy derived from contactability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WealthProxy {
    #[default]
    PhoneVerified,
    ProxyOnly,
    NoContact,
}

/// Ordinal dropout-risk bucket derived from the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Cascading threshold comparison. The label sits one tier above
    /// the threshold name it crosses (the 0.50 "medium" threshold
    /// yields "high", and so on) — an intentional calibration that
    /// existing callers depend on.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            RiskLevel::Critical
        } else if score >= 0.50 {
            RiskLevel::High
        } else if score >= 0.25 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// High and critical students count toward school-wide rates.
    pub const fn is_elevated(self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

/// The five sub-scores feeding the overall weighted score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub attendance: f64,
    pub learning: f64,
    pub contact: f64,
    pub demographics: f64,
    pub historical: f64,
}

/// A significant contributor to the overall score, with a
/// human-readable description built from the raw features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub weight: f64,
    pub description: String,
}

/// Full scoring output for one student.
///
/// Deserialization is lenient — every field is defaulted — because the
/// recommendation endpoint accepts assessments round-tripped through
/// callers that may omit parts of the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub components: ComponentScores,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default = "model_version")]
    pub model_version: String,
}

pub(crate) fn model_version() -> String {
    "1.0-rule-based".to_string()
}
