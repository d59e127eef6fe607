//! Static intervention reference data: the catalog itself plus the
//! per-intervention reasoning and implementation-step tables.

use super::domain::{CostTier, InterventionCategory, InterventionProfile};

pub(crate) const CATALOG: &[InterventionProfile] = &[
    InterventionProfile {
        name: "Parent Engagement Call",
        category: InterventionCategory::Communication,
        cost: CostTier::Low,
        effectiveness: 0.7,
        duration_days: 1,
    },
    InterventionProfile {
        name: "Home Visit",
        category: InterventionCategory::Outreach,
        cost: CostTier::Medium,
        effectiveness: 0.8,
        duration_days: 7,
    },
    InterventionProfile {
        name: "Learning Support",
        category: InterventionCategory::Academic,
        cost: CostTier::Medium,
        effectiveness: 0.75,
        duration_days: 30,
    },
    InterventionProfile {
        name: "Peer Tutoring",
        category: InterventionCategory::Academic,
        cost: CostTier::Low,
        effectiveness: 0.65,
        duration_days: 30,
    },
    InterventionProfile {
        name: "Feeding Program",
        category: InterventionCategory::Welfare,
        cost: CostTier::High,
        effectiveness: 0.8,
        duration_days: 90,
    },
    InterventionProfile {
        name: "Transportation Assistance",
        category: InterventionCategory::Logistics,
        cost: CostTier::High,
        effectiveness: 0.85,
        duration_days: 90,
    },
    InterventionProfile {
        name: "Special Education",
        category: InterventionCategory::Academic,
        cost: CostTier::High,
        effectiveness: 0.9,
        duration_days: 180,
    },
    InterventionProfile {
        name: "Financial Support",
        category: InterventionCategory::Welfare,
        cost: CostTier::High,
        effectiveness: 0.85,
        duration_days: 90,
    },
    InterventionProfile {
        name: "Counseling",
        category: InterventionCategory::Psychosocial,
        cost: CostTier::Medium,
        effectiveness: 0.7,
        duration_days: 30,
    },
    InterventionProfile {
        name: "Health Referral",
        category: InterventionCategory::Health,
        cost: CostTier::Medium,
        effectiveness: 0.75,
        duration_days: 14,
    },
];

pub(crate) fn find(name: &str) -> Option<&'static InterventionProfile> {
    CATALOG.iter().find(|profile| profile.name == name)
}

pub(crate) fn reasoning(name: &str) -> &'static str {
    match name {
        "Parent Engagement Call" => "High absence rate requires immediate parent contact",
        "Home Visit" => "Critical risk level requires in-person intervention",
        "Learning Support" => "Below benchmark performance in literacy or numeracy",
        "Peer Tutoring" => "Cost-effective academic support for struggling students",
        "Feeding Program" => "Poverty indicators suggest need for nutritional support",
        "Transportation Assistance" => "Remote location creates access barriers",
        "Special Education" => "Disability status requires specialized support",
        "Financial Support" => "Economic barriers preventing regular attendance",
        "Counseling" => "Psychosocial factors affecting school engagement",
        "Health Referral" => "Health-related absences require medical attention",
        _ => "Recommended based on risk assessment",
    }
}

/// Detailed plans exist for the most common interventions; everything
/// else gets the generic four-step plan.
pub(crate) fn implementation_steps(name: &str) -> Vec<String> {
    let steps: &[&str] = match name {
        "Parent Engagement Call" => &[
            "Verify parent contact information",
            "Schedule call within 24 hours",
            "Use preferred language",
            "Document conversation",
            "Schedule follow-up if needed",
        ],
        "Home Visit" => &[
            "Coordinate with district officer",
            "Schedule visit with family",
            "Prepare assessment checklist",
            "Conduct visit with teacher",
            "Document findings and action plan",
        ],
        "Learning Support" => &[
            "Assess specific learning gaps",
            "Create individualized learning plan",
            "Assign support teacher",
            "Schedule regular sessions",
            "Monitor progress weekly",
        ],
        _ => &["Plan intervention", "Implement", "Monitor", "Evaluate"],
    };
    steps.iter().map(|step| (*step).to_string()).collect()
}
