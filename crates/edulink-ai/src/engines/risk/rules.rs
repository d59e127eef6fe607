//! Additive rule ladders for the five risk components. Each ladder
//! only ever adds, and the sum is capped at 1.0.

use super::domain::{AssessmentLevel, LocationType, StudentFeatures, WealthProxy};

pub(crate) fn attendance_risk(features: &StudentFeatures) -> f64 {
    let mut risk: f64 = 0.0;

    let absences_7 = features.absences_7_days;
    if absences_7 >= 3 {
        risk += 0.4;
    } else if absences_7 >= 2 {
        risk += 0.2;
    } else if absences_7 >= 1 {
        risk += 0.1;
    }

    let absences_30 = features.absences_30_days;
    if absences_30 >= 10 {
        risk += 0.3;
    } else if absences_30 >= 6 {
        risk += 0.2;
    } else if absences_30 >= 3 {
        risk += 0.1;
    }

    let rate = features.attendance_rate_30_days;
    if rate < 50.0 {
        risk += 0.3;
    } else if rate < 70.0 {
        risk += 0.2;
    } else if rate < 85.0 {
        risk += 0.1;
    }

    let consecutive = features.consecutive_absences;
    if consecutive >= 5 {
        risk += 0.3;
    } else if consecutive >= 3 {
        risk += 0.2;
    }

    risk.min(1.0)
}

pub(crate) fn learning_risk(features: &StudentFeatures) -> f64 {
    let mut risk: f64 = 0.0;

    risk += assessment_increment(features.literacy_level);
    risk += assessment_increment(features.numeracy_level);

    let avg = features.avg_learning_score;
    if avg < 40.0 {
        risk += 0.3;
    } else if avg < 60.0 {
        risk += 0.2;
    }

    risk.min(1.0)
}

fn assessment_increment(level: Option<AssessmentLevel>) -> f64 {
    match level {
        Some(AssessmentLevel::BelowBenchmark) => 0.3,
        Some(AssessmentLevel::NotAssessed) => 0.1,
        _ => 0.0,
    }
}

pub(crate) fn contact_risk(features: &StudentFeatures) -> f64 {
    let mut risk: f64 = 0.0;

    if !features.contact_verified {
        risk += 0.5;
    }

    let response_rate = features.contact_response_rate;
    if response_rate < 30.0 {
        risk += 0.3;
    } else if response_rate < 60.0 {
        risk += 0.2;
    }

    risk.min(1.0)
}

pub(crate) fn demographic_risk(features: &StudentFeatures) -> f64 {
    let mut risk: f64 = 0.0;

    if features.has_disability {
        risk += 0.3;
    }

    match features.location_type {
        LocationType::Remote => risk += 0.3,
        LocationType::Rural => risk += 0.2,
        LocationType::Urban => {}
    }

    match features.wealth_proxy {
        WealthProxy::NoContact => risk += 0.3,
        WealthProxy::ProxyOnly => risk += 0.2,
        WealthProxy::PhoneVerified => {}
    }

    risk.min(1.0)
}

pub(crate) fn historical_risk(features: &StudentFeatures) -> f64 {
    let mut risk: f64 = 0.0;

    if features.previous_dropout_attempt {
        risk += 0.6;
    }

    if features.seasonal_migration_risk {
        risk += 0.3;
    }

    risk.min(1.0)
}
