use crate::recommendation::{PolicyRecord, RiskTolerance};

struct SampleRow {
    name: &'static str,
    coverage_type: &'static str,
    eligibility: &'static str,
    premium_min: u32,
    premium_max: u32,
    description: &'static str,
    risk_tolerance: RiskTolerance,
}

const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        name: "Family Health Protect",
        coverage_type: "medical,life",
        eligibility: "0-65",
        premium_min: 5000,
        premium_max: 15000,
        description: "Comprehensive family medical cover with optional life add-on.",
        risk_tolerance: RiskTolerance::Medium,
    },
    SampleRow {
        name: "MotorSecure Classic",
        coverage_type: "motor",
        eligibility: "18-75",
        premium_min: 3000,
        premium_max: 12000,
        description: "Third-party + limited own damage for most private cars.",
        risk_tolerance: RiskTolerance::Low,
    },
    SampleRow {
        name: "EduFuture Savings Plan",
        coverage_type: "education,life",
        eligibility: "18-60",
        premium_min: 2000,
        premium_max: 8000,
        description: "Savings and education endowment plan for children's future.",
        risk_tolerance: RiskTolerance::High,
    },
    SampleRow {
        name: "SeniorCare Medical",
        coverage_type: "medical",
        eligibility: "50-80",
        premium_min: 8000,
        premium_max: 20000,
        description: "Medical policy focused on older adults with chronic cover options.",
        risk_tolerance: RiskTolerance::Low,
    },
    SampleRow {
        name: "Personal Accident Basic",
        coverage_type: "accident,life",
        eligibility: "16-70",
        premium_min: 1000,
        premium_max: 4000,
        description: "Affordable accidental death and disability cover.",
        risk_tolerance: RiskTolerance::High,
    },
];

/// Seed policies used when no catalog file is configured, numbered from 1.
pub(crate) fn sample_policies() -> Vec<PolicyRecord> {
    SAMPLE_ROWS
        .iter()
        .zip(1u64..)
        .map(|(row, id)| PolicyRecord {
            id: Some(id),
            name: row.name.to_string(),
            coverage_type: row.coverage_type.to_string(),
            eligibility: row.eligibility.to_string(),
            premium_min: row.premium_min,
            premium_max: row.premium_max,
            description: row.description.to_string(),
            risk_tolerance: row.risk_tolerance,
        })
        .collect()
}
