use serde::Serialize;

use super::outcome::ParseOutcome;

/// Inclusive age interval a policy accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityRange {
    pub min_age: i64,
    pub max_age: i64,
}

impl EligibilityRange {
    /// Applied whenever a catalog range cannot be read.
    pub const FULL: EligibilityRange = EligibilityRange {
        min_age: 0,
        max_age: 120,
    };

    /// Parses `"lo-hi"`. Parts past the second are ignored; any failure yields [`Self::FULL`].
    pub fn parse(raw: &str) -> ParseOutcome<Self> {
        let mut parts = raw.split('-');
        let bounds = match (parts.next(), parts.next()) {
            (Some(lo), Some(hi)) => lo
                .trim()
                .parse::<i64>()
                .ok()
                .zip(hi.trim().parse::<i64>().ok()),
            _ => None,
        };

        match bounds {
            Some((min_age, max_age)) => ParseOutcome::Parsed(Self { min_age, max_age }),
            None => ParseOutcome::Fallback(Self::FULL),
        }
    }

    pub fn admits(&self, age: Option<u32>) -> bool {
        match age {
            Some(age) => (self.min_age..=self.max_age).contains(&i64::from(age)),
            None => false,
        }
    }
}
