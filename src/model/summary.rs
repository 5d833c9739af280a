//! Cross-color totals and pricing.

use super::ColorGroup;
use serde::{Deserialize, Serialize};

/// Aggregate pricing derived from the scrap-inflated footage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub material_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
    pub sell_price: f64,
    pub margin: f64,
    pub margin_percent: f64,
}

/// Global totals across every color group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    /// Sum of per-group base linear feet.
    pub total_linear_feet: f64,
    /// Sum of per-group scrap feet.
    pub scrap_feet: f64,
    /// Sum of per-group scrap-inflated feet.
    pub total_with_scrap: f64,
    /// Sum of per-group coil counts.
    pub total_coils_needed: u64,
    pub pricing: Pricing,
}

/// Complete unrounded result of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub coil_width: f64,
    pub color_groups: Vec<ColorGroup>,
    pub summary: OptimizationSummary,
}

impl Optimization {
    /// Colors in order of first appearance.
    pub fn colors(&self) -> Vec<&str> {
        self.color_groups.iter().map(|g| g.color.as_str()).collect()
    }
}
