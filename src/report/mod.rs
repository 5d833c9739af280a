//! Presentation of optimization results.

mod format;

pub use format::{
    build_report, percent, ColorGroupReport, OptimizationReport, PatternReport, PricingReport,
    SummaryReport,
};
