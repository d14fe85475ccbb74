//! Scoring and ranking of catalog policies against a client profile.
//!
//! Every policy passes the same pipeline: the age filter, the coverage filter, then the
//! weighted score (coverage match, affordability, budget bonus, minus the risk penalty).
//! Survivors with a positive score are ranked by score and then by minimum premium.
//! Nothing here fails: malformed inputs degrade to safe defaults and at worst produce an
//! empty recommendation list.

pub mod claims;
pub mod domain;
pub mod eligibility;
pub(crate) mod engine;
pub mod outcome;

#[cfg(test)]
mod tests;

pub use claims::{ClaimsHistory, ClaimsInput};
pub use domain::{
    ClientProfile, CoverageSet, ExcludedPolicy, Exclusion, PolicyRecord, RiskTolerance,
    ScoredRecommendation,
};
pub use eligibility::EligibilityRange;
pub use engine::{round3, RecommendationEngine, ScoringConfig};
pub use outcome::ParseOutcome;

pub const DEFAULT_TOP_N: usize = 10;

/// Ranks `catalog` for `client` with the default rubric.
pub fn recommend(
    client: &ClientProfile,
    catalog: &[PolicyRecord],
    top_n: usize,
) -> Vec<ScoredRecommendation> {
    RecommendationEngine::default().recommend(client, catalog, top_n)
}
