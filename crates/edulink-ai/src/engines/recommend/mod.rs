//! Priority-ranked, budget-aware intervention recommendations at the
//! student and school level.

mod catalog;
mod domain;

pub use domain::{
    ConfidenceLabel, CostTier, ImpactEstimate, InterventionCategory, InterventionPriority,
    InterventionProfile, Recommendation, SchoolIntervention, SchoolProfile,
    SchoolRecommendations, StudentProfile, StudentRecommendations, TopIssue,
};

use crate::engines::risk::{RiskAssessment, RiskLevel};
use crate::engines::{round1, round2};

/// How many recommendations receive implementation plans and feed the
/// impact estimate.
const TOP_COUNT: usize = 3;

/// School-wide attendance campaigns trigger above this high-risk rate.
const ATTENDANCE_CAMPAIGN_THRESHOLD: f64 = 0.3;

/// Stateless ranking engine over the static intervention catalog.
#[derive(Debug, Default)]
pub struct Recommender;

impl Recommender {
    pub fn new() -> Self {
        Self
    }

    /// Score, budget-filter, and rank the interventions named by a
    /// student's risk assessment.
    pub fn recommend_for_student(
        &self,
        student: &StudentProfile,
        assessment: &RiskAssessment,
        budget: CostTier,
    ) -> StudentRecommendations {
        let mut recommendations: Vec<Recommendation> = assessment
            .recommendations
            .iter()
            .filter_map(|name| catalog::find(name))
            .filter(|profile| profile.cost.fits_within(budget))
            .map(|profile| Recommendation {
                intervention: profile.name.to_string(),
                category: profile.category,
                priority: priority_score(profile, assessment.risk_level),
                cost: profile.cost,
                expected_effectiveness: profile.effectiveness,
                estimated_duration: profile.duration_days,
                reasoning: catalog::reasoning(profile.name).to_string(),
                implementation_steps: None,
            })
            .collect();

        // Stable, so equal priorities keep assessment order.
        recommendations.sort_by(|a, b| b.priority.total_cmp(&a.priority));

        for recommendation in recommendations.iter_mut().take(TOP_COUNT) {
            recommendation.implementation_steps =
                Some(catalog::implementation_steps(&recommendation.intervention));
        }

        let top_recommendations: Vec<Recommendation> =
            recommendations.iter().take(TOP_COUNT).cloned().collect();
        let estimated_impact = estimate_impact(&top_recommendations);

        StudentRecommendations {
            student_id: student.id.clone(),
            student_name: student.full_name.clone(),
            risk_level: assessment.risk_level,
            recommendations,
            top_recommendations,
            estimated_impact,
        }
    }

    /// Aggregate many students' assessments into institution-wide
    /// interventions carved out of a money budget.
    pub fn recommend_for_school(
        &self,
        school: &SchoolProfile,
        student_risks: &[RiskAssessment],
        budget: f64,
    ) -> SchoolRecommendations {
        let total_students = student_risks.len();
        let high_risk_students = student_risks
            .iter()
            .filter(|assessment| assessment.risk_level.is_elevated())
            .count();
        let high_risk_rate = if total_students > 0 {
            high_risk_students as f64 / total_students as f64
        } else {
            0.0
        };

        // Frequency table in first-encounter order so ties rank
        // deterministically under the stable sort.
        let mut factor_counts: Vec<(String, usize)> = Vec::new();
        for assessment in student_risks {
            for factor in &assessment.risk_factors {
                match factor_counts
                    .iter_mut()
                    .find(|(name, _)| *name == factor.factor)
                {
                    Some((_, count)) => *count += 1,
                    None => factor_counts.push((factor.factor.clone(), 1)),
                }
            }
        }
        factor_counts.sort_by(|a, b| b.1.cmp(&a.1));
        let top_issues: Vec<TopIssue> = factor_counts
            .into_iter()
            .take(5)
            .map(|(issue, count)| TopIssue { issue, count })
            .collect();

        let mut recommendations = Vec::new();

        if high_risk_rate > ATTENDANCE_CAMPAIGN_THRESHOLD {
            recommendations.push(SchoolIntervention {
                intervention: "School-wide Attendance Campaign",
                priority: InterventionPriority::High,
                affected_students: high_risk_students,
                estimated_cost: budget * 0.3,
                expected_impact: "Reduce dropout risk by 20-30%",
            });
        }

        if issue_mentions(&top_issues, "learning") {
            recommendations.push(SchoolIntervention {
                intervention: "Teacher Training Program",
                priority: InterventionPriority::High,
                affected_students: total_students,
                estimated_cost: budget * 0.25,
                expected_impact: "Improve learning outcomes by 15-25%",
            });
        }

        if issue_mentions(&top_issues, "contact") {
            recommendations.push(SchoolIntervention {
                intervention: "Parent Engagement Initiative",
                priority: InterventionPriority::Medium,
                affected_students: high_risk_students,
                estimated_cost: budget * 0.2,
                expected_impact: "Increase parent engagement by 40%",
            });
        }

        SchoolRecommendations {
            school_id: school.id.clone(),
            school_name: school.name.clone(),
            total_students,
            high_risk_students,
            high_risk_rate: round1(high_risk_rate * 100.0),
            top_issues,
            recommendations,
            total_budget: budget,
        }
    }
}

/// base[level] + effectiveness/2, with a short-duration urgency boost
/// and a high-cost penalty, clamped to 1.0.
fn priority_score(profile: &InterventionProfile, risk_level: RiskLevel) -> f64 {
    let base = match risk_level {
        RiskLevel::Low => 0.2,
        RiskLevel::Medium => 0.5,
        RiskLevel::High => 0.7,
        RiskLevel::Critical => 1.0,
    };

    let mut score = base + profile.effectiveness * 0.5;
    if profile.duration_days <= 7 {
        score += 0.2;
    }
    if profile.cost == CostTier::High {
        score -= 0.1;
    }

    round2(score.min(1.0))
}

fn estimate_impact(top: &[Recommendation]) -> ImpactEstimate {
    if top.is_empty() {
        return ImpactEstimate::Unavailable {
            expected_reduction: 0,
            confidence: ConfidenceLabel::Low,
        };
    }

    let total: f64 = top
        .iter()
        .map(|recommendation| recommendation.expected_effectiveness)
        .sum();
    let average = total / top.len() as f64;
    let expected_reduction = (average * 0.5).min(0.8);

    let confidence = if top.len() >= TOP_COUNT {
        ConfidenceLabel::High
    } else {
        ConfidenceLabel::Medium
    };

    ImpactEstimate::Projected {
        expected_risk_reduction: round1(expected_reduction * 100.0),
        confidence,
        timeframe: "30-90 days",
    }
}

fn issue_mentions(top_issues: &[TopIssue], needle: &str) -> bool {
    top_issues
        .iter()
        .any(|issue| issue.issue.to_lowercase().contains(needle))
}
