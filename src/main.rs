//! coil-optimize - CLI tool to estimate coil purchases for roofing orders.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use coil_nest::{
    build_report, optimize, parse_order_file, validate_order_lines, EngineConfig,
    DEFAULT_COIL_WIDTH,
};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Estimate coil footage, coil count and price for cut-piece roofing orders.
#[derive(Parser, Debug)]
#[command(name = "coil-optimize")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input order file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Coil width in inches (overrides the order file)
    #[arg(short = 'w', long)]
    coil_width: Option<f64>,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Attach a recommended coil product to each color
    #[arg(long)]
    recommend_coil: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output the unrounded engine result as JSON
    #[arg(long)]
    raw: bool,

    /// Validate only, don't optimize
    #[arg(long)]
    validate: bool,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.recommend_coil {
        config.attach_recommended_coil = true;
    }

    info!("Processing: {}", args.input.display());

    let request = parse_order_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let coil_width = args
        .coil_width
        .or(request.coil_width)
        .unwrap_or(DEFAULT_COIL_WIDTH);

    info!("Parsed {} order line(s), coil width {}", request.lines.len(), coil_width);

    // Validate
    let validation = validate_order_lines(&request.lines, coil_width)?;

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode; otherwise the engine logs warnings itself
    if args.validate {
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        info!("Validation passed");
        return Ok(());
    }

    let optimization = optimize(&request.lines, Some(coil_width), &config)?;

    let rendered = if args.raw {
        serde_json::to_string_pretty(&optimization)?
    } else {
        let report = build_report(&optimization, &config)?;
        match args.format {
            OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            OutputFormat::Text => report.to_string(),
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
