//! coil-nest - Coil nesting and cost estimation for metal roofing orders.
//!
//! Given cut-piece order lines (full-width panels and narrower trim nested
//! side by side across the coil), this library works out the linear footage
//! of coil needed per color, inflates it by a scrap allowance, and prices
//! the result.
//!
//! # Example
//!
//! ```no_run
//! use coil_nest::{optimize, EngineConfig, OrderLine};
//!
//! let lines = vec![
//!     OrderLine::new("PBR-26", Some("Ash Gray"), 45, 16.0, 43.875),
//!     OrderLine::new("RAKE", Some("Ash Gray"), 15, 10.0, 14.0),
//! ];
//! let config = EngineConfig::default();
//! let result = optimize(&lines, None, &config).unwrap();
//! println!("{} coil(s)", result.summary.total_coils_needed);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod nesting;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use catalog::resolve_coil_product;
pub use config::{BusinessConfig, CatalogConfig, ColorTable, EngineConfig, DEFAULT_COIL_WIDTH};
pub use error::{ErrorCode, NestError, Result};
pub use model::{
    ColorGroup, CuttingPattern, Optimization, OptimizationSummary, OrderLine, PatternGroup, Pricing,
};
pub use parser::{parse_order_file, parse_order_str, OrderRequest};
pub use report::{build_report, OptimizationReport};
pub use validation::{validate_order_lines, ValidationResult};

/// Run the nesting engine on a list of order lines.
///
/// The coil width defaults to the standard wide coil. Input is validated
/// before any computation; invalid input yields no partial result. The
/// returned values are unrounded.
pub fn optimize(
    lines: &[OrderLine],
    coil_width: Option<f64>,
    config: &EngineConfig,
) -> Result<Optimization> {
    let coil_width = coil_width.unwrap_or(DEFAULT_COIL_WIDTH);

    config.business.validate()?;
    validation::ensure_valid(lines, coil_width)?;

    // Stage 1: group by color and pick a pattern per line
    let groups = nesting::classify_and_group(lines, coil_width)?;

    // Stage 2: scrap, coils and pricing
    let (color_groups, summary) = nesting::aggregate(groups, &config.business)?;

    let optimization = Optimization {
        coil_width,
        color_groups,
        summary,
    };

    tracing::info!(
        "Optimized {} line(s) in color(s) [{}]: {} ft with scrap, {} coil(s)",
        lines.len(),
        optimization.colors().join(", "),
        optimization.summary.total_with_scrap,
        optimization.summary.total_coils_needed
    );

    Ok(optimization)
}

/// Optimize a parsed order request and build its display report.
pub fn optimize_orders(
    request: &OrderRequest,
    config: &EngineConfig,
) -> Result<OptimizationReport> {
    let optimization = optimize(&request.lines, request.coil_width, config)?;
    build_report(&optimization, config)
}

/// Load an order file, optimize it and build its display report.
pub fn optimize_order_file(
    input_path: &std::path::Path,
    config: &EngineConfig,
) -> Result<OptimizationReport> {
    let request = parse_order_file(input_path)?;
    optimize_orders(&request, config)
}
