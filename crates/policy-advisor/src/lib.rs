//! Risk-aware insurance policy recommendations.
//!
//! The [`recommendation`] module holds the scoring engine; everything else is the ambient
//! plumbing a caller needs around it (catalog loading, configuration, telemetry).

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;

pub use catalog::{CatalogError, CatalogWarning, PolicyCatalog};
pub use recommendation::{
    recommend, ClientProfile, Exclusion, PolicyRecord, RecommendationEngine, RiskTolerance,
    ScoredRecommendation, ScoringConfig, DEFAULT_TOP_N,
};
