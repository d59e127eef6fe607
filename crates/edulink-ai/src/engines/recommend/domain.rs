use crate::engines::risk::RiskLevel;
use serde::{Deserialize, Serialize};

/// Ordinal cost of an intervention, doubling as the budget tier that
/// gates which interventions a recommendation may include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    #[default]
    Medium,
    High,
}

impl CostTier {
    const fn rank(self) -> u8 {
        match self {
            CostTier::Low => 1,
            CostTier::Medium => 2,
            CostTier::High => 3,
        }
    }

    /// Budget gating: admitted iff the cost ordinal does not exceed
    /// the budget ordinal, so anything admitted under a low budget is
    /// admitted under medium and high too.
    pub const fn fits_within(self, budget: CostTier) -> bool {
        self.rank() <= budget.rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterventionCategory {
    Communication,
    Outreach,
    Academic,
    Welfare,
    Logistics,
    Psychosocial,
    Health,
}

/// Static catalog entry: immutable reference data shared read-only by
/// every recommendation computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterventionProfile {
    pub name: &'static str,
    pub category: InterventionCategory,
    pub cost: CostTier,
    pub effectiveness: f64,
    pub duration_days: u32,
}

/// One budget-admitted, priority-scored intervention for a student.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub intervention: String,
    #[serde(rename = "type")]
    pub category: InterventionCategory,
    pub priority: f64,
    pub cost: CostTier,
    pub expected_effectiveness: f64,
    pub estimated_duration: u32,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

/// Aggregate impact over the top recommendations. The shape differs
/// when nothing survives the budget gate, matching what callers
/// already parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImpactEstimate {
    Unavailable {
        #[serde(rename = "expectedReduction")]
        expected_reduction: u32,
        confidence: ConfidenceLabel,
    },
    Projected {
        /// Percent, one decimal.
        #[serde(rename = "expectedRiskReduction")]
        expected_risk_reduction: f64,
        confidence: ConfidenceLabel,
        timeframe: &'static str,
    },
}

/// Caller-supplied student identity; everything else in the payload
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StudentProfile {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecommendations {
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
    pub top_recommendations: Vec<Recommendation>,
    pub estimated_impact: ImpactEstimate,
}

/// Caller-supplied school identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchoolProfile {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A risk-factor name and how many students it affects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopIssue {
    pub issue: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterventionPriority {
    Medium,
    High,
}

/// Fixed institution-wide intervention carved out of the budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolIntervention {
    pub intervention: &'static str,
    pub priority: InterventionPriority,
    pub affected_students: usize,
    pub estimated_cost: f64,
    pub expected_impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecommendations {
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub total_students: usize,
    pub high_risk_students: usize,
    /// Percent, one decimal.
    pub high_risk_rate: f64,
    pub top_issues: Vec<TopIssue>,
    pub recommendations: Vec<SchoolIntervention>,
    pub total_budget: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_gate_is_monotonic() {
        for cost in [CostTier::Low, CostTier::Medium, CostTier::High] {
            if cost.fits_within(CostTier::Low) {
                assert!(cost.fits_within(CostTier::Medium));
                assert!(cost.fits_within(CostTier::High));
            }
            if cost.fits_within(CostTier::Medium) {
                assert!(cost.fits_within(CostTier::High));
            }
        }
        assert!(!CostTier::High.fits_within(CostTier::Medium));
        assert!(CostTier::Low.fits_within(CostTier::Low));
    }

    #[test]
    fn cost_tier_parses_lowercase_wire_values() {
        let tier: CostTier = serde_json::from_str("\"high\"").expect("tier parses");
        assert_eq!(tier, CostTier::High);
        assert_eq!(CostTier::default(), CostTier::Medium);
    }

    #[test]
    fn impact_estimate_shapes_differ() {
        let unavailable = ImpactEstimate::Unavailable {
            expected_reduction: 0,
            confidence: ConfidenceLabel::Low,
        };
        let json = serde_json::to_value(&unavailable).expect("serializes");
        assert_eq!(json["expectedReduction"], 0);
        assert!(json.get("timeframe").is_none());

        let projected = ImpactEstimate::Projected {
            expected_risk_reduction: 37.5,
            confidence: ConfidenceLabel::High,
            timeframe: "30-90 days",
        };
        let json = serde_json::to_value(&projected).expect("serializes");
        assert_eq!(json["expectedRiskReduction"], 37.5);
        assert_eq!(json["confidence"], "high");
    }
}
