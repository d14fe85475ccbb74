use super::super::claims::ClaimsHistory;
use super::super::domain::{CoverageSet, PolicyRecord};
use super::config::ScoringConfig;

/// Rounds the exact binary value to three decimals, halves to even (`0.7925` gives `0.792`).
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

pub(crate) fn coverage_match(requested: &CoverageSet, offered: &CoverageSet) -> usize {
    requested.overlap(offered)
}

/// Piecewise fit of the comfortable premium against the policy's premium band, in [0, 1].
pub(crate) fn affordability(
    income: Option<f64>,
    premium_min: u32,
    premium_max: u32,
    config: &ScoringConfig,
) -> f64 {
    let income = match income {
        Some(income) if income > 0.0 => income,
        _ => return 0.0,
    };

    let comfortable = income * config.comfortable_income_share;
    let premium_min = f64::from(premium_min);
    let premium_max = f64::from(premium_max);

    if comfortable >= premium_min && comfortable <= premium_max {
        return 1.0;
    }
    if comfortable < premium_min {
        return (1.0 - (premium_min - comfortable) / (premium_min + 1.0)).max(0.0);
    }
    (1.0 - (comfortable - premium_max) / (comfortable + 1.0)).max(0.0)
}

pub(crate) fn budget_bonus(budget: Option<f64>, premium_min: u32, config: &ScoringConfig) -> f64 {
    match budget {
        Some(budget) if budget > 0.0 && f64::from(premium_min) <= budget => config.budget_bonus,
        _ => 0.0,
    }
}

/// Exactly one band applies, checked from the highest ratio down.
pub(crate) fn loss_ratio_adjustment(loss_ratio: Option<f64>) -> f64 {
    match loss_ratio {
        Some(ratio) if ratio >= 1.5 => 0.4,
        Some(ratio) if ratio >= 1.2 => 0.25,
        Some(ratio) if ratio >= 1.0 => 0.15,
        Some(ratio) if ratio < 0.5 => -0.05,
        _ => 0.0,
    }
}

/// Claims on lines the policy covers weigh more; claims elsewhere still count.
pub(crate) fn claims_surcharge(
    claims: &ClaimsHistory,
    coverage_type: &str,
    config: &ScoringConfig,
) -> f64 {
    let coverage_type = coverage_type.to_lowercase();
    let cap = i64::from(config.claim_count_cap);

    claims
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(token, count)| {
            let per_claim = if coverage_type.contains(token) {
                config.related_claim_surcharge
            } else {
                config.unrelated_claim_surcharge
            };
            per_claim * count.min(cap) as f64
        })
        .sum()
}

pub(crate) fn risk_penalty(
    loss_ratio: Option<f64>,
    claims: &ClaimsHistory,
    policy: &PolicyRecord,
    config: &ScoringConfig,
) -> f64 {
    let raw = loss_ratio_adjustment(loss_ratio)
        + claims_surcharge(claims, &policy.coverage_type, config);
    let scaled = raw * policy.risk_tolerance.penalty_multiplier();
    round3(scaled.clamp(0.0, config.max_risk_penalty.max(0.0)))
}

/// Weighted total, floored at zero and rounded.
pub(crate) fn combine(
    coverage_match: usize,
    affordability: f64,
    budget_bonus: f64,
    risk_penalty: f64,
    config: &ScoringConfig,
) -> f64 {
    let total = config.coverage_weight * coverage_match as f64
        + config.affordability_weight * affordability
        + config.budget_weight * budget_bonus
        - risk_penalty;
    round3(total.max(0.0))
}
