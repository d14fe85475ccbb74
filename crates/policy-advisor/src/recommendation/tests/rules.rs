use super::common::*;
use crate::recommendation::engine::rules::{
    affordability, budget_bonus, claims_surcharge, combine, coverage_match, loss_ratio_adjustment,
    risk_penalty, round3,
};
use crate::recommendation::{ClaimsHistory, CoverageSet, RiskTolerance, ScoringConfig};

#[test]
fn coverage_match_counts_distinct_shared_tokens() {
    let requested = CoverageSet::parse(" Medical ,life,,medical");
    let offered = CoverageSet::parse("medical, LIFE ,accident");
    assert_eq!(requested.len(), 2);
    assert_eq!(coverage_match(&requested, &offered), 2);
    assert_eq!(coverage_match(&requested, &CoverageSet::parse("motor")), 0);
    assert_eq!(coverage_match(&CoverageSet::default(), &offered), 0);
}

#[test]
fn affordability_is_zero_without_positive_income() {
    let config = ScoringConfig::default();
    assert_eq!(affordability(None, 1000, 4000, &config), 0.0);
    assert_eq!(affordability(Some(0.0), 1000, 4000, &config), 0.0);
    assert_eq!(affordability(Some(-500.0), 0, 4000, &config), 0.0);
}

#[test]
fn affordability_is_full_inside_premium_band() {
    let config = ScoringConfig::default();
    assert_eq!(affordability(Some(30_000.0), 5000, 15_000, &config), 1.0);
    assert_eq!(affordability(Some(20_000.0), 5000, 15_000, &config), 1.0);
    assert_eq!(affordability(Some(60_000.0), 5000, 15_000, &config), 1.0);
}

#[test]
fn affordability_decays_below_and_above_band() {
    let config = ScoringConfig::default();

    let below = affordability(Some(8000.0), 5000, 15_000, &config);
    assert!((below - (1.0 - 3000.0 / 5001.0)).abs() < 1e-12);
    assert_eq!(round3(below), 0.4);

    let above = affordability(Some(100_000.0), 1000, 4000, &config);
    assert!((above - (1.0 - 21_000.0 / 25_001.0)).abs() < 1e-12);
    assert_eq!(round3(above), 0.16);

    assert_eq!(affordability(Some(4.0), 0, 0, &config), 0.5);
    assert!(affordability(Some(1.0), 1_000_000, 2_000_000, &config) < 0.001);
}

#[test]
fn inverted_premium_band_is_scored_permissively() {
    let config = ScoringConfig::default();
    let score = affordability(Some(12_000.0), 5000, 1000, &config);
    assert!((score - (1.0 - 2000.0 / 5001.0)).abs() < 1e-12);
}

#[test]
fn budget_bonus_requires_positive_budget_covering_minimum() {
    let config = ScoringConfig::default();
    assert_eq!(budget_bonus(Some(4000.0), 3000, &config), 0.15);
    assert_eq!(budget_bonus(Some(3000.0), 3000, &config), 0.15);
    assert_eq!(budget_bonus(Some(2999.0), 3000, &config), 0.0);
    assert_eq!(budget_bonus(Some(0.0), 0, &config), 0.0);
    assert_eq!(budget_bonus(None, 0, &config), 0.0);
}

#[test]
fn loss_ratio_bands_do_not_overlap() {
    assert_eq!(loss_ratio_adjustment(Some(2.3)), 0.4);
    assert_eq!(loss_ratio_adjustment(Some(1.5)), 0.4);
    assert_eq!(loss_ratio_adjustment(Some(1.49)), 0.25);
    assert_eq!(loss_ratio_adjustment(Some(1.2)), 0.25);
    assert_eq!(loss_ratio_adjustment(Some(1.0)), 0.15);
    assert_eq!(loss_ratio_adjustment(Some(0.99)), 0.0);
    assert_eq!(loss_ratio_adjustment(Some(0.5)), 0.0);
    assert_eq!(loss_ratio_adjustment(Some(0.49)), -0.05);
    assert_eq!(loss_ratio_adjustment(None), 0.0);
}

#[test]
fn claims_on_covered_lines_weigh_more_and_are_capped() {
    let config = ScoringConfig::default();
    let claims = ClaimsHistory::from_counts([("motor", 2), ("life", 9), ("medical", 0)]);

    let surcharge = claims_surcharge(&claims, "Motor", &config);
    let expected = 0.15 * 2.0 + 0.08 * 4.0;
    assert!((surcharge - expected).abs() < 1e-12);
}

#[test]
fn claim_tokens_match_as_substrings_of_the_coverage_list() {
    let config = ScoringConfig::default();
    let claims = ClaimsHistory::from_counts([("life", 1)]);
    let surcharge = claims_surcharge(&claims, "medical,life", &config);
    assert!((surcharge - 0.15).abs() < 1e-12);
}

#[test]
fn negative_claim_counts_are_ignored() {
    let config = ScoringConfig::default();
    let claims = ClaimsHistory::from_counts([("motor", -3)]);
    assert_eq!(claims_surcharge(&claims, "motor", &config), 0.0);
}

#[test]
fn risk_penalty_scales_by_tolerance_and_clamps() {
    let config = ScoringConfig::default();
    let claims = ClaimsHistory::from_counts([("motor", 3)]);

    let low = policy("Low", "motor", 3000, 12_000, RiskTolerance::Low);
    let medium = policy("Medium", "motor", 3000, 12_000, RiskTolerance::Medium);
    let high = policy("High", "motor", 3000, 12_000, RiskTolerance::High);

    assert_eq!(risk_penalty(Some(0.7), &claims, &low, &config), 0.495);
    assert_eq!(risk_penalty(Some(0.7), &claims, &medium, &config), 0.45);
    assert_eq!(risk_penalty(Some(0.7), &claims, &high, &config), 0.405);

    let heavy = ClaimsHistory::from_counts([("motor", 4)]);
    assert_eq!(risk_penalty(Some(1.6), &heavy, &low, &config), 0.9);

    let none = ClaimsHistory::default();
    assert_eq!(risk_penalty(Some(0.2), &none, &medium, &config), 0.0);
}

#[test]
fn combine_weights_components_and_floors_at_zero() {
    let config = ScoringConfig::default();
    assert_eq!(combine(1, 1.0, 0.0, 0.15, &config), 0.65);
    assert_eq!(combine(2, 1.0, 0.0, 0.0, &config), 1.3);
    assert_eq!(combine(1, 0.0, 0.0, 0.9, &config), 0.0);
}

#[test]
fn round3_keeps_three_decimals() {
    assert_eq!(round3(0.333_333), 0.333);
    assert_eq!(round3(0.6666), 0.667);
    assert_eq!(round3(2.0), 2.0);
}

#[test]
fn round3_rounds_stored_value_not_scaled_midpoint() {
    // 0.7925 is stored just below the midpoint; 0.0625 is an exact half.
    assert_eq!(round3(0.7925), 0.792);
    assert_eq!(round3(0.0625), 0.062);
    assert_eq!(round3(0.5 + 0.3 + 0.15 * 0.15 - 0.03), 0.792);
}

#[test]
fn combine_with_budget_bonus_rounds_once() {
    let config = ScoringConfig::default();
    assert_eq!(combine(1, 1.0, 0.15, 0.03, &config), 0.792);
}
