//! Data model types for coil nesting and cost estimation.

mod color_group;
mod order_line;
mod pattern;
mod summary;

pub use color_group::{ColorGroup, PatternGroup};
pub use order_line::OrderLine;
pub use pattern::{CuttingPattern, FullWidthPattern, NestedPattern};
pub use summary::{Optimization, OptimizationSummary, Pricing};
