//! Nesting engine: grouping and pattern selection, then aggregation and pricing.

mod aggregate;
mod grouping;

pub use aggregate::{aggregate, aggregate_group, coils_for, price};
pub use grouping::{classify_and_group, nested_pattern, pieces_per_row, select_pattern};
