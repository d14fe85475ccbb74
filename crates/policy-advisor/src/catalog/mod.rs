//! Policy catalog supply: the bundled sample set and file-based loading.

mod parser;
mod sample;

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::recommendation::PolicyRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read policy catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid policy catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid policy catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, read-only list of policies offered to the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolicyCatalog {
    policies: Vec<PolicyRecord>,
}

impl PolicyCatalog {
    pub fn new(policies: Vec<PolicyRecord>) -> Self {
        Self { policies }
    }

    pub fn sample() -> Self {
        Self::new(sample::sample_policies())
    }

    /// Loads `.json` files as an array of policies and anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_reader(file)?
        } else {
            Self::from_csv_reader(file)?
        };

        info!(path = %path.display(), policies = catalog.len(), "loaded policy catalog");
        for warning in catalog.audit() {
            warn!(%warning, "policy catalog data issue");
        }

        Ok(catalog)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::new(parser::parse_csv(reader)?))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    pub fn policies(&self) -> &[PolicyRecord] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Flags records the engine will score permissively rather than reject.
    pub fn audit(&self) -> Vec<CatalogWarning> {
        let mut warnings = Vec::new();
        for policy in &self.policies {
            if policy.has_inverted_premium_band() {
                warnings.push(CatalogWarning::InvertedPremiumBand {
                    policy: policy.name.clone(),
                    premium_min: policy.premium_min,
                    premium_max: policy.premium_max,
                });
            }
            if policy.eligibility_range().is_fallback() {
                warnings.push(CatalogWarning::UnreadableEligibility {
                    policy: policy.name.clone(),
                    raw: policy.eligibility.clone(),
                });
            }
        }
        warnings
    }
}

/// Data-quality finding on a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    InvertedPremiumBand {
        policy: String,
        premium_min: u32,
        premium_max: u32,
    },
    UnreadableEligibility {
        policy: String,
        raw: String,
    },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::InvertedPremiumBand {
                policy,
                premium_min,
                premium_max,
            } => write!(
                f,
                "{policy}: premium_min {premium_min} exceeds premium_max {premium_max}"
            ),
            CatalogWarning::UnreadableEligibility { policy, raw } => write!(
                f,
                "{policy}: eligibility '{raw}' unreadable, all ages 0-120 admitted"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RiskTolerance;

    #[test]
    fn sample_catalog_matches_seed_data() {
        let catalog = PolicyCatalog::sample();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.audit().is_empty());

        let motor = catalog
            .policies()
            .iter()
            .find(|policy| policy.name == "MotorSecure Classic")
            .expect("motor policy seeded");
        assert_eq!(motor.id, Some(2));
        assert_eq!(motor.coverage_type, "motor");
        assert_eq!(motor.risk_tolerance, RiskTolerance::Low);
        assert_eq!((motor.premium_min, motor.premium_max), (3000, 12000));

        let family = &catalog.policies()[0];
        assert_eq!(family.name, "Family Health Protect");
        assert_eq!(family.risk_tolerance, RiskTolerance::Medium);
    }

    #[test]
    fn csv_rows_fill_defaults_for_blank_columns() {
        let csv = "id,name,coverage_type,eligibility,premium_min,premium_max,description,risk_tolerance\n\
7,Travel Lite,\"travel, medical\",,500,1500,Short trips,\n\
,Legacy Life,life,21-70,4000,9000,Whole life,HIGH\n";

        let catalog = PolicyCatalog::from_csv_reader(csv.as_bytes()).expect("csv parses");
        let policies = catalog.policies();
        assert_eq!(policies.len(), 2);

        assert_eq!(policies[0].id, Some(7));
        assert_eq!(policies[0].eligibility, "0-120");
        assert_eq!(policies[0].risk_tolerance, RiskTolerance::Medium);
        assert!(policies[0].coverage_tokens().contains("medical"));

        assert_eq!(policies[1].id, None);
        assert_eq!(policies[1].risk_tolerance, RiskTolerance::High);
    }

    #[test]
    fn csv_with_non_numeric_premium_is_rejected() {
        let csv = "name,coverage_type,premium_min,premium_max\nBroken,medical,cheap,100\n";
        match PolicyCatalog::from_csv_reader(csv.as_bytes()) {
            Err(CatalogError::Csv(_)) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn json_catalog_accepts_lenient_risk_tolerance() {
        let json = r#"[
            {"name": "Odd Cover", "coverage_type": "motor", "premium_min": 10, "premium_max": 20,
             "risk_tolerance": "extreme"},
            {"name": "Plain Cover", "coverage_type": "life", "premium_min": 10, "premium_max": 20,
             "risk_tolerance": null}
        ]"#;

        let catalog = PolicyCatalog::from_json_reader(json.as_bytes()).expect("json parses");
        assert!(catalog
            .policies()
            .iter()
            .all(|policy| policy.risk_tolerance == RiskTolerance::Medium));
        assert!(catalog
            .policies()
            .iter()
            .all(|policy| policy.eligibility == "0-120"));
    }

    #[test]
    fn audit_flags_inverted_bands_and_unreadable_ranges() {
        let mut policies = PolicyCatalog::sample().policies().to_vec();
        policies[0].premium_min = 20_000;
        policies[1].eligibility = "adults".to_string();

        let warnings = PolicyCatalog::new(policies).audit();
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            warnings[0],
            CatalogWarning::InvertedPremiumBand {
                premium_min: 20_000,
                premium_max: 15_000,
                ..
            }
        ));
        assert!(warnings[1].to_string().contains("'adults'"));
    }
}
