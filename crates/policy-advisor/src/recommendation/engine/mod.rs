mod config;
mod ranking;
pub(crate) mod rules;

pub use config::ScoringConfig;
pub use rules::round3;

use super::domain::{ClientProfile, ExcludedPolicy, Exclusion, PolicyRecord, ScoredRecommendation};
use tracing::{debug, trace};

/// Stateless scorer applying a [`ScoringConfig`] to a client and a catalog.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: ScoringConfig,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Runs a single policy through eligibility, coverage and scoring.
    pub fn evaluate(
        &self,
        client: &ClientProfile,
        policy: &PolicyRecord,
    ) -> Result<ScoredRecommendation, Exclusion> {
        let range = policy.eligibility_range();
        if range.is_fallback() {
            debug!(
                policy = %policy.name,
                eligibility = %policy.eligibility,
                "unreadable eligibility range, admitting ages 0-120"
            );
        }
        let range = range.into_inner();
        if !range.admits(client.age) {
            return Err(Exclusion::Ineligible {
                age: client.age,
                range,
            });
        }

        let coverage_match = rules::coverage_match(&client.coverage, &policy.coverage_tokens());
        if coverage_match == 0 {
            return Err(Exclusion::NoCoverageOverlap);
        }

        let affordability = rules::round3(rules::affordability(
            client.income,
            policy.premium_min,
            policy.premium_max,
            &self.config,
        ));
        let budget_bonus = rules::budget_bonus(client.budget, policy.premium_min, &self.config);
        let risk_penalty = rules::risk_penalty(
            client.loss_ratio,
            &client.claims_history,
            policy,
            &self.config,
        );

        let score = rules::combine(
            coverage_match,
            affordability,
            budget_bonus,
            risk_penalty,
            &self.config,
        );
        if score <= 0.0 {
            return Err(Exclusion::NonPositiveScore { score });
        }

        Ok(ScoredRecommendation {
            policy: policy.clone(),
            score,
            coverage_match,
            affordability,
            budget_bonus,
            risk_penalty,
        })
    }

    /// Scores the whole catalog and returns at most `top_n` entries, best first.
    pub fn recommend(
        &self,
        client: &ClientProfile,
        catalog: &[PolicyRecord],
        top_n: usize,
    ) -> Vec<ScoredRecommendation> {
        let scored = catalog
            .iter()
            .filter_map(|policy| match self.evaluate(client, policy) {
                Ok(recommendation) => Some(recommendation),
                Err(reason) => {
                    trace!(policy = %policy.name, reason = %reason.summary(), "policy excluded");
                    None
                }
            })
            .collect::<Vec<_>>();

        let qualifying = scored.len();
        let ranked = ranking::rank(scored, top_n);
        debug!(
            catalog = catalog.len(),
            qualifying,
            returned = ranked.len(),
            "scored policy catalog"
        );
        ranked
    }

    /// Lists every policy the client would not be offered, in catalog order.
    pub fn explain(
        &self,
        client: &ClientProfile,
        catalog: &[PolicyRecord],
    ) -> Vec<ExcludedPolicy> {
        catalog
            .iter()
            .filter_map(|policy| {
                self.evaluate(client, policy)
                    .err()
                    .map(|reason| ExcludedPolicy {
                        name: policy.name.clone(),
                        reason,
                    })
            })
            .collect()
    }
}
