use serde::{Deserialize, Serialize};

/// Weights and constants of the scoring rubric. `Default` is the production rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Share of monthly income considered a comfortable premium.
    pub comfortable_income_share: f64,
    pub coverage_weight: f64,
    pub affordability_weight: f64,
    pub budget_weight: f64,
    pub budget_bonus: f64,
    /// Surcharge per claim on a line the policy covers.
    pub related_claim_surcharge: f64,
    /// Surcharge per claim on any other line.
    pub unrelated_claim_surcharge: f64,
    pub claim_count_cap: u32,
    pub max_risk_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            comfortable_income_share: 0.25,
            coverage_weight: 0.5,
            affordability_weight: 0.3,
            budget_weight: 0.15,
            budget_bonus: 0.15,
            related_claim_surcharge: 0.15,
            unrelated_claim_surcharge: 0.08,
            claim_count_cap: 4,
            max_risk_penalty: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"budget_bonus": 0.2, "claim_count_cap": 2}"#)
                .expect("partial config parses");

        assert_eq!(config.budget_bonus, 0.2);
        assert_eq!(config.claim_count_cap, 2);
        assert_eq!(config.coverage_weight, 0.5);
        assert_eq!(config.max_risk_penalty, 0.9);
    }
}
