use super::super::domain::ScoredRecommendation;

/// Highest score first; ties go to the cheaper minimum premium, then catalog order.
pub(crate) fn rank(
    mut scored: Vec<ScoredRecommendation>,
    top_n: usize,
) -> Vec<ScoredRecommendation> {
    scored.sort_by(|left, right| {
        right
            .score
            .total_cmp(&left.score)
            .then_with(|| left.policy.premium_min.cmp(&right.policy.premium_min))
    });
    scored.truncate(top_n);
    scored
}
