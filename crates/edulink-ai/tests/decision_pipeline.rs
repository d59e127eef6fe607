use edulink_ai::engines::language::{DetectionMethod, LanguageDetector};
use edulink_ai::engines::recommend::{
    ConfidenceLabel, CostTier, ImpactEstimate, Recommender, SchoolProfile, StudentProfile,
};
use edulink_ai::engines::risk::{
    AssessmentLevel, LocationType, RiskLevel, RiskScorer, StudentFeatures, WealthProxy,
};
use serde_json::json;

fn severe_student() -> StudentFeatures {
    StudentFeatures {
        student_id: Some("stu-severe".to_string()),
        absences_7_days: 5,
        absences_30_days: 15,
        attendance_rate_30_days: 40.0,
        consecutive_absences: 6,
        literacy_level: Some(AssessmentLevel::BelowBenchmark),
        numeracy_level: Some(AssessmentLevel::BelowBenchmark),
        avg_learning_score: 30.0,
        contact_verified: false,
        contact_response_rate: 10.0,
        has_disability: true,
        location_type: LocationType::Remote,
        wealth_proxy: WealthProxy::NoContact,
        seasonal_migration_risk: true,
        previous_dropout_attempt: true,
    }
}

fn moderate_student() -> StudentFeatures {
    StudentFeatures {
        absences_30_days: 12,
        contact_verified: false,
        avg_learning_score: 35.0,
        ..StudentFeatures::default()
    }
}

#[test]
fn severe_student_flows_through_scoring_and_recommendation() {
    let scorer = RiskScorer::new();
    let assessment = scorer.calculate_risk_score(&severe_student());

    assert_eq!(assessment.risk_level, RiskLevel::Critical);
    assert!(
        (0.91..=0.92).contains(&assessment.risk_score),
        "unexpected score {}",
        assessment.risk_score
    );
    assert_eq!(assessment.components.attendance, 1.0);
    // Insertion order fixes the list, truncated at five.
    assert_eq!(
        assessment.recommendations,
        vec![
            "Parent Engagement Call",
            "Home Visit",
            "Attendance Monitoring",
            "Learning Support",
            "Peer Tutoring",
        ]
    );

    let recommender = Recommender::new();
    let student = StudentProfile {
        id: Some("stu-severe".to_string()),
        full_name: Some("Kofi Asante".to_string()),
    };
    let result = recommender.recommend_for_student(&student, &assessment, CostTier::High);

    // Attendance Monitoring is an operational action with no catalog
    // entry, so four interventions survive.
    assert_eq!(result.recommendations.len(), 4);
    assert_eq!(
        result.recommendations[0].intervention,
        "Parent Engagement Call"
    );
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        if index < 3 {
            assert!(
                recommendation.implementation_steps.is_some(),
                "{} should carry a plan",
                recommendation.intervention
            );
        } else {
            assert!(recommendation.implementation_steps.is_none());
        }
    }

    match result.estimated_impact {
        ImpactEstimate::Projected {
            expected_risk_reduction,
            confidence,
            ..
        } => {
            assert!((37.4..=37.6).contains(&expected_risk_reduction));
            assert_eq!(confidence, ConfidenceLabel::High);
        }
        ImpactEstimate::Unavailable { .. } => panic!("expected a projected impact"),
    }
}

#[test]
fn moderate_student_scores_medium_with_monitoring_actions() {
    let scorer = RiskScorer::new();
    let assessment = scorer.calculate_risk_score(&moderate_student());

    assert_eq!(assessment.risk_level, RiskLevel::Medium);
    assert!((0.28..=0.29).contains(&assessment.risk_score));
    assert_eq!(
        assessment.recommendations,
        vec!["Attendance Monitoring", "Contact Verification"]
    );

    // Both actions are operational rather than catalog interventions,
    // so the recommender has nothing to rank.
    let recommender = Recommender::new();
    let result = recommender.recommend_for_student(
        &StudentProfile::default(),
        &assessment,
        CostTier::High,
    );
    assert!(result.recommendations.is_empty());
    assert_eq!(
        result.estimated_impact,
        ImpactEstimate::Unavailable {
            expected_reduction: 0,
            confidence: ConfidenceLabel::Low,
        }
    );
}

#[test]
fn budget_constrains_catalog_admission_end_to_end() {
    let scorer = RiskScorer::new();
    let assessment = scorer.calculate_risk_score(&severe_student());

    let recommender = Recommender::new();
    let result = recommender.recommend_for_student(
        &StudentProfile::default(),
        &assessment,
        CostTier::Low,
    );

    let names: Vec<&str> = result
        .recommendations
        .iter()
        .map(|recommendation| recommendation.intervention.as_str())
        .collect();
    assert_eq!(names, vec!["Parent Engagement Call", "Peer Tutoring"]);

    match result.estimated_impact {
        ImpactEstimate::Projected {
            expected_risk_reduction,
            confidence,
            ..
        } => {
            assert!((33.7..=33.9).contains(&expected_risk_reduction));
            assert_eq!(confidence, ConfidenceLabel::Medium);
        }
        ImpactEstimate::Unavailable { .. } => panic!("expected a projected impact"),
    }
}

#[test]
fn batch_scoring_isolates_failures_and_keeps_order() {
    let scorer = RiskScorer::new();
    let students = vec![
        json!({"studentId": "stu-1", "absences30Days": 12, "avgLearningScore": 35}),
        json!({"studentId": "stu-2", "absences7Days": "three"}),
        json!({"studentId": "stu-3"}),
    ];

    let results = scorer.batch_calculate(&students);
    assert_eq!(results.len(), 3);

    let serialized = serde_json::to_value(&results).expect("batch serializes");
    assert_eq!(serialized[0]["studentId"], "stu-1");
    assert_eq!(serialized[0]["riskLevel"], "medium");
    assert_eq!(serialized[1]["studentId"], "stu-2");
    assert!(serialized[1]["error"].is_string());
    assert!(serialized[1].get("riskScore").is_none());
    assert_eq!(serialized[2]["studentId"], "stu-3");
    assert!(serialized[2]["riskScore"].is_number());
}

#[test]
fn school_rollup_from_scorer_output() {
    let scorer = RiskScorer::new();
    let contact_only = StudentFeatures {
        contact_verified: false,
        contact_response_rate: 0.0,
        ..StudentFeatures::default()
    };
    let assessments = vec![
        scorer.calculate_risk_score(&severe_student()),
        scorer.calculate_risk_score(&moderate_student()),
        scorer.calculate_risk_score(&contact_only),
    ];

    let recommender = Recommender::new();
    let school = SchoolProfile {
        id: Some("sch-1".to_string()),
        name: Some("Asempa Basic".to_string()),
    };
    let result = recommender.recommend_for_school(&school, &assessments, 10_000.0);

    assert_eq!(result.total_students, 3);
    assert_eq!(result.high_risk_students, 1);
    assert_eq!(result.high_risk_rate, 33.3);
    assert!(result
        .top_issues
        .iter()
        .any(|issue| issue.issue == "Limited parent contact" && issue.count == 2));

    let names: Vec<&str> = result
        .recommendations
        .iter()
        .map(|intervention| intervention.intervention)
        .collect();
    assert_eq!(
        names,
        vec![
            "School-wide Attendance Campaign",
            "Teacher Training Program",
            "Parent Engagement Initiative",
        ]
    );
    assert!((result.recommendations[0].estimated_cost - 3_000.0).abs() < 1e-9);
    assert!((result.recommendations[1].estimated_cost - 2_500.0).abs() < 1e-9);
    assert!((result.recommendations[2].estimated_cost - 2_000.0).abs() < 1e-9);
}

#[test]
fn language_detection_votes_weighted_signals() {
    let detector = LanguageDetector::new().expect("lexicon compiles");

    let result = detector.detect_combined(Some("maakye! wo ho te sɛn"), None, Some("Volta"));
    assert_eq!(result.language, "Twi");
    assert_eq!(result.method, DetectionMethod::Combined);
    // Text vote 0.66 x 3.0 against region vote 0.7 x 1.5, over a
    // total weight of 4.5.
    assert!((0.43..=0.45).contains(&result.confidence));
    assert_eq!(result.alternatives.len(), 1);
    assert_eq!(result.alternatives[0].language, "Ewe");
    assert!((0.22..=0.24).contains(&result.alternatives[0].score));
}

#[test]
fn assessment_wire_shape_is_camel_case() {
    let scorer = RiskScorer::new();
    let assessment = scorer.calculate_risk_score(&moderate_student());
    let json = serde_json::to_value(&assessment).expect("assessment serializes");

    assert!(json.get("riskScore").is_some());
    assert_eq!(json["riskLevel"], "medium");
    assert_eq!(json["modelVersion"], "1.0-rule-based");
    assert!(json.get("studentId").is_none());
    assert!(json["riskFactors"].is_array());
}
