use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::recommendation::domain::default_eligibility;
use crate::recommendation::{PolicyRecord, RiskTolerance};

/// Reads the policy table layout: `id,name,coverage_type,eligibility,premium_min,premium_max,
/// description,risk_tolerance`.
pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<PolicyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut policies = Vec::new();

    for record in csv_reader.deserialize::<PolicyRow>() {
        policies.push(record?.into_record());
    }

    Ok(policies)
}

#[derive(Debug, Deserialize)]
struct PolicyRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    name: String,
    #[serde(default)]
    coverage_type: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    eligibility: Option<String>,
    premium_min: u32,
    premium_max: u32,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    risk_tolerance: Option<String>,
}

impl PolicyRow {
    fn into_record(self) -> PolicyRecord {
        PolicyRecord {
            id: self.id.and_then(|raw| raw.parse().ok()),
            name: self.name,
            coverage_type: self.coverage_type,
            eligibility: self.eligibility.unwrap_or_else(default_eligibility),
            premium_min: self.premium_min,
            premium_max: self.premium_max,
            description: self.description,
            risk_tolerance: RiskTolerance::from(self.risk_tolerance),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
