use anyhow::{bail, Context};
use clap::Parser;
use rfpmatch::prelude::*;
use rfpmatch::Pipeline;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Requirement-to-catalog matching and quotation engine
#[derive(Parser, Debug)]
#[command(name = "rfpmatch")]
#[command(about = "Match proposal requirements against a product catalog and price the result", long_about = None)]
struct Args {
    /// Path to the product catalog JSON file
    #[arg(short, long, default_value = "data/product_catalog.json")]
    catalog: PathBuf,

    /// Plain-text proposal document to analyze
    #[arg(short, long)]
    input: PathBuf,

    /// Proposal title used in the run context
    #[arg(long, default_value = "Untitled RFP")]
    title: String,

    /// Customer name used in the run context
    #[arg(long, default_value = "Unknown Customer")]
    customer: String,

    /// Customer tier (enterprise, midmarket, sme); inferred from the text
    /// when omitted
    #[arg(long)]
    tier: Option<String>,

    /// Upper bound on index construction, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    build_timeout_ms: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_tier(raw: &str) -> anyhow::Result<CustomerTier> {
    match raw {
        "enterprise" => Ok(CustomerTier::Enterprise),
        "midmarket" => Ok(CustomerTier::Midmarket),
        "sme" => Ok(CustomerTier::Sme),
        other => bail!("unknown customer tier '{}': expected enterprise, midmarket, or sme", other),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting rfpmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);
    info!("Input: {:?}", args.input);

    let tier_override = args.tier.as_deref().map(parse_tier).transpose()?;

    // Catalog load failure is fatal: no matching is served until the
    // source file is corrected.
    let catalog = Arc::new(
        Catalog::load(&args.catalog)
            .with_context(|| format!("failed to load catalog from {:?}", args.catalog))?,
    );
    info!("Loaded {} catalog items", catalog.len());

    let index = SimilarityIndex::build(
        catalog,
        Box::new(HashingEmbedder::default()),
        BuildOptions {
            timeout: Some(Duration::from_millis(args.build_timeout_ms)),
        },
    )
    .context("similarity index construction failed")?;
    info!("Built similarity index over {} items", index.len());

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input from {:?}", args.input))?;

    let pipeline = Pipeline::new(Arc::new(index));
    let outcome = pipeline.run(&args.title, &args.customer, &text, tier_override);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
