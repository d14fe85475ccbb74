use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::claims::ClaimsHistory;
use super::eligibility::EligibilityRange;
use super::outcome::ParseOutcome;

/// Client snapshot supplied by the intake shell. Read-only for the duration of a scoring call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A missing age makes the client ineligible for every policy.
    #[serde(default)]
    pub age: Option<u32>,
    /// Monthly income.
    #[serde(default)]
    pub income: Option<f64>,
    /// Carried for the caller's records; not used by scoring.
    #[serde(default)]
    pub dependents: u32,
    #[serde(default)]
    pub coverage: CoverageSet,
    /// Preferred premium ceiling; `None` means no ceiling.
    #[serde(default)]
    pub budget: Option<f64>,
    /// Historical claims-to-premium ratio. `None` applies no loss-ratio band.
    #[serde(default)]
    pub loss_ratio: Option<f64>,
    #[serde(default)]
    pub claims_history: ClaimsHistory,
}

/// Normalized coverage tokens (trimmed, lower-cased, non-empty, deduplicated).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CoverageInput")]
pub struct CoverageSet(BTreeSet<String>);

impl CoverageSet {
    /// Tokenizes a comma-separated coverage list such as `"Medical, life"`.
    pub fn parse(raw: &str) -> Self {
        let mut tokens = BTreeSet::new();
        extend_tokens(&mut tokens, raw);
        Self(tokens)
    }

    pub fn overlap(&self, other: &CoverageSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn extend_tokens(tokens: &mut BTreeSet<String>, raw: &str) {
    tokens.extend(
        raw.split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty()),
    );
}

impl fmt::Display for CoverageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(",");
        f.write_str(&joined)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CoverageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tokens = BTreeSet::new();
        for item in iter {
            extend_tokens(&mut tokens, item.as_ref());
        }
        Self(tokens)
    }
}

/// Accepted wire shapes for a coverage selection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoverageInput {
    Missing,
    Text(String),
    List(Vec<String>),
}

impl From<CoverageInput> for CoverageSet {
    fn from(value: CoverageInput) -> Self {
        match value {
            CoverageInput::Missing => CoverageSet::default(),
            CoverageInput::Text(raw) => CoverageSet::parse(&raw),
            CoverageInput::List(items) => items.into_iter().collect(),
        }
    }
}

/// Catalog entry as supplied by the policy store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    /// Raw comma-separated coverage list, e.g. `"medical,life"`.
    #[serde(default)]
    pub coverage_type: String,
    /// Raw `"lo-hi"` age range.
    #[serde(default = "default_eligibility")]
    pub eligibility: String,
    #[serde(default)]
    pub premium_min: u32,
    #[serde(default)]
    pub premium_max: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
}

pub(crate) fn default_eligibility() -> String {
    "0-120".to_string()
}

impl PolicyRecord {
    pub fn coverage_tokens(&self) -> CoverageSet {
        CoverageSet::parse(&self.coverage_type)
    }

    pub fn eligibility_range(&self) -> ParseOutcome<EligibilityRange> {
        EligibilityRange::parse(&self.eligibility)
    }

    /// Catalog data does not enforce `premium_min <= premium_max`.
    pub fn has_inverted_premium_band(&self) -> bool {
        self.premium_min > self.premium_max
    }
}

/// How harshly client risk penalizes a policy's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    /// Case-insensitive; anything unrecognized is treated as `Medium`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }

    pub(crate) const fn penalty_multiplier(self) -> f64 {
        match self {
            RiskTolerance::Low => 1.1,
            RiskTolerance::Medium => 1.0,
            RiskTolerance::High => 0.9,
        }
    }
}

impl From<Option<String>> for RiskTolerance {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A policy that survived filtering, with every intermediate value kept for explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub policy: PolicyRecord,
    pub score: f64,
    pub coverage_match: usize,
    pub affordability: f64,
    pub budget_bonus: f64,
    pub risk_penalty: f64,
}

impl ScoredRecommendation {
    /// Whole-valued factors keep their decimal point (`1.0`, not `1`).
    pub fn rationale(&self) -> String {
        format!(
            "coverage match={}, affordability={:?}, budget_bonus={:?}",
            self.coverage_match, self.affordability, self.budget_bonus
        )
    }
}

/// Reason a catalog entry was left out of the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Exclusion {
    Ineligible {
        age: Option<u32>,
        range: EligibilityRange,
    },
    NoCoverageOverlap,
    NonPositiveScore {
        score: f64,
    },
}

impl Exclusion {
    pub fn summary(&self) -> String {
        match self {
            Exclusion::Ineligible { age: Some(age), range } => format!(
                "age {age} outside eligibility {}-{}",
                range.min_age, range.max_age
            ),
            Exclusion::Ineligible { age: None, .. } => "client age missing".to_string(),
            Exclusion::NoCoverageOverlap => "no requested coverage offered".to_string(),
            Exclusion::NonPositiveScore { score } => {
                format!("risk penalty outweighs fit (score {score})")
            }
        }
    }
}

/// Policy left out of a recommendation run, paired with why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcludedPolicy {
    pub name: String,
    pub reason: Exclusion,
}
