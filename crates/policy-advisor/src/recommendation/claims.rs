use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::outcome::ParseOutcome;

/// Claim counts keyed by lower-cased coverage token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ClaimsInput")]
pub struct ClaimsHistory(BTreeMap<String, i64>);

impl ClaimsHistory {
    pub fn from_counts<I, K>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        Self(
            counts
                .into_iter()
                .map(|(key, count)| (normalize_key(key.as_ref()), count))
                .collect(),
        )
    }

    /// Converges any accepted input shape to the canonical mapping.
    ///
    /// Shapes are tried in order: nothing, a direct mapping, JSON object text, then
    /// `key:value` pairs joined by commas. Unreadable input falls back to "no claims".
    pub fn parse(input: impl Into<ClaimsInput>) -> ParseOutcome<Self> {
        match input.into() {
            ClaimsInput::Missing => ParseOutcome::Parsed(Self::default()),
            ClaimsInput::Mapping(entries) => ParseOutcome::Parsed(from_mapping(entries)),
            ClaimsInput::Text(raw) => parse_text(&raw),
            ClaimsInput::Other(_) => ParseOutcome::Fallback(Self::default()),
        }
    }

    pub fn get(&self, token: &str) -> Option<i64> {
        self.0.get(token).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

/// Raw claims history as it arrives from intake.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClaimsInput {
    Missing,
    Mapping(BTreeMap<String, Value>),
    Text(String),
    Other(Value),
}

impl From<&str> for ClaimsInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ClaimsInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<BTreeMap<String, Value>> for ClaimsInput {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Mapping(value)
    }
}

impl From<ClaimsInput> for ClaimsHistory {
    fn from(value: ClaimsInput) -> Self {
        let outcome = ClaimsHistory::parse(value);
        if outcome.is_fallback() {
            tracing::debug!("unreadable claims history treated as no claims");
        }
        outcome.into_inner()
    }
}

fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn from_mapping(entries: BTreeMap<String, Value>) -> ClaimsHistory {
    ClaimsHistory(
        entries
            .into_iter()
            .filter_map(|(key, value)| {
                count_from_value(&value).map(|count| (normalize_key(&key), count))
            })
            .collect(),
    )
}

fn count_from_value(value: &Value) -> Option<i64> {
    match value {
        // Fractional counts such as 1.5 are skipped rather than scored pro rata.
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && float.fract() == 0.0)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_text(raw: &str) -> ParseOutcome<ClaimsHistory> {
    if raw.trim().is_empty() {
        return ParseOutcome::Parsed(ClaimsHistory::default());
    }

    if let Ok(document) = serde_json::from_str::<Value>(raw) {
        return match document {
            Value::Object(entries) => {
                ParseOutcome::Parsed(from_mapping(entries.into_iter().collect()))
            }
            Value::Null => ParseOutcome::Parsed(ClaimsHistory::default()),
            _ => ParseOutcome::Fallback(ClaimsHistory::default()),
        };
    }

    parse_pairs(raw)
}

fn parse_pairs(raw: &str) -> ParseOutcome<ClaimsHistory> {
    let mut counts = BTreeMap::new();
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        match value.trim().parse::<i64>() {
            Ok(count) => {
                counts.insert(normalize_key(key), count);
            }
            Err(_) => return ParseOutcome::Fallback(ClaimsHistory::default()),
        }
    }
    ParseOutcome::Parsed(ClaimsHistory(counts))
}
