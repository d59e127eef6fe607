//! Multi-factor dropout-risk scoring: five rule-ladder components
//! combined by fixed weights, bucketed into a level, with derived
//! risk factors and intervention recommendations.

mod domain;
mod rules;

pub use domain::{
    AssessmentLevel, ComponentScores, LocationType, RiskAssessment, RiskFactor, RiskLevel,
    StudentFeatures, WealthProxy,
};

use crate::engines::round2;
use serde::Serialize;
use tracing::error;

/// Fixed convex weights over the five components. They sum to 1.0 and
/// are never renormalized: a missing feature bucket scores 0 and still
/// carries its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentWeights {
    pub attendance: f64,
    pub learning: f64,
    pub contact: f64,
    pub demographics: f64,
    pub historical: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            attendance: 0.30,
            learning: 0.25,
            contact: 0.15,
            demographics: 0.15,
            historical: 0.15,
        }
    }
}

/// Only components scoring above this enter the risk-factor list.
const SIGNIFICANT_FACTOR_FLOOR: f64 = 0.2;

/// Stateless scorer holding the weight table. Safe for concurrent use.
#[derive(Debug, Default)]
pub struct RiskScorer {
    weights: ComponentWeights,
}

/// One entry of a batch response: either a full assessment or an
/// isolated per-item failure record.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchResult {
    Assessment(BatchAssessment),
    Failure(BatchFailure),
}

/// Batch success record. Unlike the single-student response, the
/// `studentId` key is always present (null when the entry carried
/// none) so callers can join results back to their input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAssessment {
    pub student_id: Option<String>,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub student_id: Option<String>,
    pub error: String,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one student. Pure function of the features.
    pub fn calculate_risk_score(&self, features: &StudentFeatures) -> RiskAssessment {
        let components = ComponentScores {
            attendance: rules::attendance_risk(features),
            learning: rules::learning_risk(features),
            contact: rules::contact_risk(features),
            demographics: rules::demographic_risk(features),
            historical: rules::historical_risk(features),
        };

        let risk_score = components.attendance * self.weights.attendance
            + components.learning * self.weights.learning
            + components.contact * self.weights.contact
            + components.demographics * self.weights.demographics
            + components.historical * self.weights.historical;

        let risk_level = RiskLevel::from_score(risk_score);
        let risk_factors = significant_factors(&components, features);
        let recommendations = derive_recommendations(risk_level, features);

        RiskAssessment {
            student_id: None,
            risk_score: round2(risk_score),
            risk_level,
            components: ComponentScores {
                attendance: round2(components.attendance),
                learning: round2(components.learning),
                contact: round2(components.contact),
                demographics: round2(components.demographics),
                historical: round2(components.historical),
            },
            risk_factors,
            recommendations,
            model_version: domain::model_version(),
        }
    }

    /// Score many students, isolating per-item failures: a malformed
    /// entry yields a `{studentId, error}` record in its position and
    /// never aborts the siblings.
    pub fn batch_calculate(&self, students: &[serde_json::Value]) -> Vec<BatchResult> {
        students
            .iter()
            .map(|raw| match serde_json::from_value::<StudentFeatures>(raw.clone()) {
                Ok(features) => {
                    let assessment = self.calculate_risk_score(&features);
                    BatchResult::Assessment(BatchAssessment {
                        student_id: features.student_id,
                        assessment,
                    })
                }
                Err(err) => {
                    error!(error = %err, "risk scoring failed for batch entry");
                    BatchResult::Failure(BatchFailure {
                        student_id: raw
                            .get("studentId")
                            .and_then(|value| value.as_str())
                            .map(str::to_string),
                        error: err.to_string(),
                    })
                }
            })
            .collect()
    }
}

/// Rank the components, keep the top 3, and drop anything at or below
/// the significance floor.
fn significant_factors(components: &ComponentScores, features: &StudentFeatures) -> Vec<RiskFactor> {
    let mut ranked = [
        ("High absence rate", components.attendance),
        ("Poor learning outcomes", components.learning),
        ("Limited parent contact", components.contact),
        ("Demographic challenges", components.demographics),
        ("Historical patterns", components.historical),
    ];
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .iter()
        .take(3)
        .filter(|(_, score)| *score > SIGNIFICANT_FACTOR_FLOOR)
        .map(|(name, score)| RiskFactor {
            factor: (*name).to_string(),
            weight: round2(*score),
            description: factor_description(name, features),
        })
        .collect()
}

fn factor_description(factor: &str, features: &StudentFeatures) -> String {
    match factor {
        "High absence rate" => {
            format!("{} absences in last 30 days", features.absences_30_days)
        }
        "Poor learning outcomes" => "Below benchmark in literacy or numeracy".to_string(),
        "Limited parent contact" => {
            format!(
                "Contact response rate: {}%",
                features.contact_response_rate
            )
        }
        "Demographic challenges" => format!("Location: {}", features.location_type.label()),
        "Historical patterns" => "Previous dropout attempt or seasonal migration".to_string(),
        _ => String::new(),
    }
}

/// Rule-driven and order-sensitive: insertion order fixes the final
/// ordering, duplicates keep their first-triggered position, and the
/// list truncates to five.
fn derive_recommendations(risk_level: RiskLevel, features: &StudentFeatures) -> Vec<String> {
    let mut names: Vec<&'static str> = Vec::new();
    let mut add = |name: &'static str, names: &mut Vec<&'static str>| {
        if !names.contains(&name) {
            names.push(name);
        }
    };

    if risk_level.is_elevated() {
        add("Parent Engagement Call", &mut names);
        add("Home Visit", &mut names);
    }

    if features.absences_30_days > 10 {
        add("Attendance Monitoring", &mut names);
    }

    if features.literacy_level == Some(AssessmentLevel::BelowBenchmark)
        || features.numeracy_level == Some(AssessmentLevel::BelowBenchmark)
    {
        add("Learning Support", &mut names);
        add("Peer Tutoring", &mut names);
    }

    if !features.contact_verified {
        add("Contact Verification", &mut names);
    }

    if features.has_disability {
        add("Special Education", &mut names);
    }

    if features.wealth_proxy == WealthProxy::NoContact {
        add("Financial Support", &mut names);
        add("Feeding Program", &mut names);
    }

    if features.location_type == LocationType::Remote {
        add("Transportation Assistance", &mut names);
    }

    names.truncate(5);
    names.into_iter().map(str::to_string).collect()
}
