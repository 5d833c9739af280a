//! Rounded, display-ready view of an [`Optimization`].
//!
//! Engine values are rounded to two decimals exactly once, here.

use crate::catalog::resolve_coil_product;
use crate::config::{float_cmp::round2, EngineConfig};
use crate::error::Result;
use crate::model::{
    ColorGroup, CuttingPattern, Optimization, OptimizationSummary, OrderLine, Pricing,
};
use serde::Serialize;
use std::fmt;

/// Format a fraction as a two-decimal percentage string ("95.24%").
pub fn percent(fraction: f64) -> String {
    format!("{:.2}%", round2(fraction * 100.0))
}

/// One order line and its layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternReport {
    pub product_id: String,
    pub pattern: &'static str,
    pub quantity: i64,
    pub width: f64,
    pub length_each: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieces_per_row: Option<u64>,
    pub rows: u64,
    pub total_feet: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_efficiency: Option<String>,
}

impl PatternReport {
    fn new(line: &OrderLine, pattern: &CuttingPattern) -> Self {
        let (pieces_per_row, layout_efficiency) = match pattern {
            CuttingPattern::Nested(p) => (
                Some(p.pieces_per_row),
                Some(percent(p.layout_efficiency)),
            ),
            CuttingPattern::FullWidth(_) => (None, None),
        };

        Self {
            product_id: line.product_id.clone(),
            pattern: pattern.kind(),
            quantity: line.quantity,
            width: line.width,
            length_each: round2(pattern.length_each()),
            pieces_per_row,
            rows: pattern.rows(),
            total_feet: round2(pattern.total_feet()),
            layout_efficiency,
        }
    }
}

/// Per-color breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGroupReport {
    pub color: String,
    pub patterns: Vec<PatternReport>,
    pub base_linear_feet: f64,
    pub scrap_feet: f64,
    pub total_linear_feet: f64,
    pub coils_needed: u64,
    pub material_efficiency: String,
    pub pieces: i64,
    pub nested_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_coil: Option<String>,
}

impl ColorGroupReport {
    fn new(group: &ColorGroup, coil_width: f64, config: &EngineConfig) -> Result<Self> {
        let recommended_coil = if config.attach_recommended_coil {
            Some(resolve_coil_product(&group.color, coil_width, config)?)
        } else {
            None
        };

        Ok(Self {
            color: group.color.clone(),
            patterns: group
                .lines
                .iter()
                .zip(&group.patterns)
                .map(|(line, pattern)| PatternReport::new(line, pattern))
                .collect(),
            base_linear_feet: round2(group.base_linear_feet),
            scrap_feet: round2(group.scrap_feet),
            total_linear_feet: round2(group.total_linear_feet),
            coils_needed: group.coils_needed,
            material_efficiency: percent(group.material_efficiency),
            pieces: group.piece_count(),
            nested_lines: group.nested_count(),
            recommended_coil,
        })
    }
}

/// Rounded pricing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingReport {
    pub material_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
    pub sell_price: f64,
    pub margin: f64,
    pub margin_percent: String,
}

impl From<&Pricing> for PricingReport {
    fn from(p: &Pricing) -> Self {
        Self {
            material_cost: round2(p.material_cost),
            labor_cost: round2(p.labor_cost),
            total_cost: round2(p.total_cost),
            sell_price: round2(p.sell_price),
            margin: round2(p.margin),
            margin_percent: percent(p.margin_percent),
        }
    }
}

/// Rounded global totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total_linear_feet: f64,
    pub scrap_feet: f64,
    pub total_with_scrap: f64,
    pub total_coils_needed: u64,
    pub pricing: PricingReport,
}

impl From<&OptimizationSummary> for SummaryReport {
    fn from(s: &OptimizationSummary) -> Self {
        Self {
            total_linear_feet: round2(s.total_linear_feet),
            scrap_feet: round2(s.scrap_feet),
            total_with_scrap: round2(s.total_with_scrap),
            total_coils_needed: s.total_coils_needed,
            pricing: PricingReport::from(&s.pricing),
        }
    }
}

/// Display-ready optimization result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    pub coil_width: f64,
    pub color_groups: Vec<ColorGroupReport>,
    pub summary: SummaryReport,
}

/// Build the report for an optimization run.
///
/// Recommended coils are attached only when the config asks for them.
pub fn build_report(
    optimization: &Optimization,
    config: &EngineConfig,
) -> Result<OptimizationReport> {
    Ok(OptimizationReport {
        coil_width: optimization.coil_width,
        color_groups: optimization
            .color_groups
            .iter()
            .map(|g| ColorGroupReport::new(g, optimization.coil_width, config))
            .collect::<Result<Vec<_>>>()?,
        summary: SummaryReport::from(&optimization.summary),
    })
}

impl fmt::Display for OptimizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coil width: {} in", self.coil_width)?;

        for group in &self.color_groups {
            writeln!(f)?;
            match &group.recommended_coil {
                Some(coil) => writeln!(f, "{} ({})", group.color, coil)?,
                None => writeln!(f, "{}", group.color)?,
            }
            for p in &group.patterns {
                writeln!(
                    f,
                    "  {:<12} {:<10} qty {:>4}  width {:>7.3}  rows {:>4}  {:>9.2} ft",
                    p.product_id, p.pattern, p.quantity, p.width, p.rows, p.total_feet
                )?;
            }
            writeln!(
                f,
                "  base {:.2} ft, scrap {:.2} ft, total {:.2} ft, {} coil(s), efficiency {}",
                group.base_linear_feet,
                group.scrap_feet,
                group.total_linear_feet,
                group.coils_needed,
                group.material_efficiency
            )?;
        }

        let s = &self.summary;
        writeln!(f)?;
        writeln!(f, "Summary")?;
        writeln!(f, "  Linear feet:    {:>10.2}", s.total_linear_feet)?;
        writeln!(f, "  Scrap feet:     {:>10.2}", s.scrap_feet)?;
        writeln!(f, "  Total w/ scrap: {:>10.2}", s.total_with_scrap)?;
        writeln!(f, "  Coils needed:   {:>10}", s.total_coils_needed)?;
        writeln!(f, "  Material cost:  {:>10.2}", s.pricing.material_cost)?;
        writeln!(f, "  Labor cost:     {:>10.2}", s.pricing.labor_cost)?;
        writeln!(f, "  Total cost:     {:>10.2}", s.pricing.total_cost)?;
        writeln!(f, "  Sell price:     {:>10.2}", s.pricing.sell_price)?;
        write!(
            f,
            "  Margin:         {:>10.2} ({})",
            s.pricing.margin, s.pricing.margin_percent
        )
    }
}
