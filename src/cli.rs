use crate::render::{self, CatalogListing, RecommendationReport};
use clap::{Args, Parser, Subcommand, ValueEnum};
use policy_advisor::config::AppConfig;
use policy_advisor::error::AppError;
use policy_advisor::recommendation::{ClaimsHistory, CoverageSet};
use policy_advisor::{telemetry, ClientProfile, PolicyCatalog, RecommendationEngine, ScoringConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "policy-advisor",
    about = "Score insurance policies against a client profile and rank the best fits",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank catalog policies for a client profile
    Recommend(RecommendArgs),
    /// List the policy catalog and any data issues found in it
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    #[command(flatten)]
    client: ClientArgs,
    /// Policy catalog (.csv or .json). Defaults to POLICY_CATALOG, then the bundled sample
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Maximum number of recommendations. Defaults to POLICY_TOP_N, then 10
    #[arg(long)]
    top_n: Option<usize>,
    /// JSON file overriding scoring weights; omitted fields keep their defaults
    #[arg(long)]
    scoring: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also list the policies that were left out and why
    #[arg(long)]
    explain: bool,
}

#[derive(Args, Debug)]
struct ClientArgs {
    /// Client profile JSON document, used instead of the individual client flags
    #[arg(
        long,
        conflicts_with_all = [
            "name", "age", "income", "dependents", "coverage", "budget", "loss_ratio", "claims"
        ]
    )]
    client: Option<PathBuf>,
    /// Client name, for the record only
    #[arg(long)]
    name: Option<String>,
    #[arg(long, default_value_t = 30)]
    age: u32,
    /// Monthly income (KES)
    #[arg(long, default_value_t = 30_000.0)]
    income: f64,
    #[arg(long, default_value_t = 0)]
    dependents: u32,
    /// Desired coverage, comma separated (medical, life, motor, education, accident)
    #[arg(long, default_value = "medical")]
    coverage: String,
    /// Preferred maximum premium (KES); 0 means no limit
    #[arg(long, default_value_t = 0.0)]
    budget: f64,
    /// Claims-to-premium ratio (0.7 = low risk, 1.2 = high risk)
    #[arg(long, default_value_t = 1.0)]
    loss_ratio: f64,
    /// Past claims, e.g. "motor:2, medical:1" or a JSON object
    #[arg(long, default_value = "")]
    claims: String,
}

impl ClientArgs {
    fn into_profile(self) -> Result<ClientProfile, AppError> {
        if let Some(path) = self.client {
            return read_json(&path);
        }

        let claims = ClaimsHistory::parse(self.claims.as_str());
        if claims.is_fallback() {
            warn!(claims = %self.claims, "claims history unreadable, scoring as no claims");
        }

        Ok(ClientProfile {
            name: self.name.filter(|name| !name.trim().is_empty()),
            age: Some(self.age),
            income: Some(self.income),
            dependents: self.dependents,
            coverage: CoverageSet::parse(&self.coverage),
            budget: (self.budget > 0.0).then_some(self.budget),
            loss_ratio: Some(self.loss_ratio),
            claims_history: claims.into_inner(),
        })
    }
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Policy catalog (.csv or .json). Defaults to POLICY_CATALOG, then the bundled sample
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Recommend(args) => run_recommend(args, &config),
        Command::Catalog(args) => run_catalog(args, &config),
    }
}

fn run_recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), AppError> {
    let RecommendArgs {
        client,
        catalog,
        top_n,
        scoring,
        format,
        explain,
    } = args;

    let profile = client.into_profile()?;
    let catalog = load_catalog(catalog, config)?;
    let scoring = match scoring {
        Some(path) => read_json::<ScoringConfig>(&path)?,
        None => ScoringConfig::default(),
    };
    let top_n = top_n.unwrap_or(config.recommendation.top_n);

    let engine = RecommendationEngine::new(scoring);
    let recommendations = engine.recommend(&profile, catalog.policies(), top_n);
    let excluded = explain.then(|| engine.explain(&profile, catalog.policies()));

    info!(
        environment = ?config.environment,
        catalog = catalog.len(),
        returned = recommendations.len(),
        top_n,
        "recommendations ready"
    );

    let report = RecommendationReport {
        client: &profile,
        top_n,
        recommendations: &recommendations,
        excluded: excluded.as_deref(),
    };
    match format {
        OutputFormat::Text => print!("{}", render::recommendations_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn run_catalog(args: CatalogArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog, config)?;
    let warnings = catalog.audit();
    let listing = CatalogListing {
        policies: catalog.policies(),
        warnings: &warnings,
    };

    match args.format {
        OutputFormat::Text => print!("{}", render::catalog_text(&listing)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>, config: &AppConfig) -> Result<PolicyCatalog, AppError> {
    match path.or_else(|| config.recommendation.catalog_path.clone()) {
        Some(path) => Ok(PolicyCatalog::from_path(path)?),
        None => Ok(PolicyCatalog::sample()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
