use crate::catalog::PolicyCatalog;
use crate::recommendation::{
    ClaimsHistory, ClientProfile, CoverageSet, PolicyRecord, RecommendationEngine, RiskTolerance,
    ScoringConfig,
};

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(ScoringConfig::default())
}

pub(super) fn sample_catalog() -> Vec<PolicyRecord> {
    PolicyCatalog::sample().policies().to_vec()
}

pub(super) fn sample_policy(name: &str) -> PolicyRecord {
    sample_catalog()
        .into_iter()
        .find(|policy| policy.name == name)
        .expect("sample policy present")
}

/// Mid-income adult with a neutral loss ratio and no claims.
pub(super) fn client(coverage: &str) -> ClientProfile {
    ClientProfile {
        name: Some("Amani Otieno".to_string()),
        age: Some(30),
        income: Some(30_000.0),
        dependents: 1,
        coverage: CoverageSet::parse(coverage),
        budget: None,
        loss_ratio: Some(0.7),
        claims_history: ClaimsHistory::default(),
    }
}

pub(super) fn policy(
    name: &str,
    coverage_type: &str,
    premium_min: u32,
    premium_max: u32,
    risk_tolerance: RiskTolerance,
) -> PolicyRecord {
    PolicyRecord {
        id: None,
        name: name.to_string(),
        coverage_type: coverage_type.to_string(),
        eligibility: "18-65".to_string(),
        premium_min,
        premium_max,
        description: format!("{name} test policy"),
        risk_tolerance,
    }
}
