use policy_advisor::recommendation::ExcludedPolicy;
use policy_advisor::{CatalogWarning, ClientProfile, PolicyRecord, ScoredRecommendation};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationReport<'a> {
    pub(crate) client: &'a ClientProfile,
    pub(crate) top_n: usize,
    pub(crate) recommendations: &'a [ScoredRecommendation],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) excluded: Option<&'a [ExcludedPolicy]>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogListing<'a> {
    pub(crate) policies: &'a [PolicyRecord],
    pub(crate) warnings: &'a [CatalogWarning],
}

pub(crate) fn recommendations_text(report: &RecommendationReport<'_>) -> String {
    let mut lines = Vec::new();
    let results = report.recommendations;

    lines.push(format!("Top {} Recommendations", results.len()));
    if results.is_empty() {
        lines.push(
            "No matching policies found. Try widening coverage choices or removing budget limit."
                .to_string(),
        );
    } else {
        lines.push(format!(
            "{:<28} {:<18} {:>17} {:>7} {:>13}",
            "Policy", "Coverage", "Premium (KES)", "Score", "Risk penalty"
        ));
        for result in results {
            lines.push(format!(
                "{:<28} {:<18} {:>17} {:>7} {:>13}",
                result.policy.name,
                result.policy.coverage_type,
                premium_band(&result.policy),
                result.score,
                result.risk_penalty
            ));
        }

        for result in results {
            lines.push(String::new());
            lines.push(format!("{} - score: {}", result.policy.name, result.score));
            lines.push(format!("  {}", result.policy.description));
            lines.push(format!("  Coverage: {}", result.policy.coverage_type));
            lines.push(format!("  Eligibility: {}", result.policy.eligibility));
            lines.push(format!(
                "  Premium range (KES): {}",
                premium_band(&result.policy)
            ));
            lines.push(format!(
                "  Risk penalty: {} (lower is better)",
                result.risk_penalty
            ));
            lines.push(format!("  Why recommended: {}", result.rationale()));
        }
    }

    if let Some(excluded) = report.excluded {
        lines.push(String::new());
        lines.push(format!("Excluded policies ({})", excluded.len()));
        for entry in excluded {
            lines.push(format!("- {}: {}", entry.name, entry.reason.summary()));
        }
    }

    finish(lines)
}

pub(crate) fn catalog_text(listing: &CatalogListing<'_>) -> String {
    let mut lines = vec![format!("Policy catalog ({} policies)", listing.policies.len())];
    for policy in listing.policies {
        lines.push(format!(
            "- {} [{}] ages {} | premium {} | risk tolerance {}",
            policy.name,
            policy.coverage_type,
            policy.eligibility,
            premium_band(policy),
            policy.risk_tolerance
        ));
    }

    if !listing.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Data issues".to_string());
        lines.extend(
            listing
                .warnings
                .iter()
                .map(|warning| format!("- {warning}")),
        );
    }

    finish(lines)
}

fn premium_band(policy: &PolicyRecord) -> String {
    format!("{} - {}", policy.premium_min, policy.premium_max)
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
