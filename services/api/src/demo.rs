use clap::Args;
use edulink_ai::engines::recommend::{CostTier, StudentProfile};
use edulink_ai::engines::risk::{AssessmentLevel, LocationType, StudentFeatures, WealthProxy};
use edulink_ai::engines::Engines;
use edulink_ai::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Budget tier used when ranking the sample interventions
    /// (low, medium, or high)
    #[arg(long, default_value = "medium", value_parser = parse_budget)]
    budget: CostTier,
}

fn parse_budget(value: &str) -> Result<CostTier, String> {
    match value {
        "low" => Ok(CostTier::Low),
        "medium" => Ok(CostTier::Medium),
        "high" => Ok(CostTier::High),
        other => Err(format!("unknown budget tier '{other}'")),
    }
}

/// Run one sample student through all three engines and print the
/// results, for quickly eyeballing the service without HTTP.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engines = Engines::new()?;

    let features = StudentFeatures {
        student_id: Some("demo-student-1".to_string()),
        absences_7_days: 4,
        absences_30_days: 12,
        attendance_rate_30_days: 60.0,
        consecutive_absences: 3,
        literacy_level: Some(AssessmentLevel::BelowBenchmark),
        avg_learning_score: 35.0,
        contact_verified: false,
        location_type: LocationType::Remote,
        wealth_proxy: WealthProxy::NoContact,
        previous_dropout_attempt: true,
        ..StudentFeatures::default()
    };

    let assessment = engines.scorer.calculate_risk_score(&features);
    println!("risk assessment:");
    println!("{}", serde_json::to_string_pretty(&assessment)?);

    let student = StudentProfile {
        id: Some("demo-student-1".to_string()),
        full_name: Some("Ama Mensah".to_string()),
    };
    let recommendations = engines
        .recommender
        .recommend_for_student(&student, &assessment, args.budget);
    println!("\nrecommendations (budget: {:?}):", args.budget);
    println!("{}", serde_json::to_string_pretty(&recommendations)?);

    let detection = engines.detector.detect_combined(
        Some("maakye! wo ho te sɛn"),
        Some("+233241234567"),
        Some("Ashanti"),
    );
    println!("\nlanguage detection:");
    println!("{}", serde_json::to_string_pretty(&detection)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_tiers_parse_from_flag_values() {
        assert_eq!(parse_budget("low"), Ok(CostTier::Low));
        assert_eq!(parse_budget("high"), Ok(CostTier::High));
        assert!(parse_budget("unlimited").is_err());
    }
}
