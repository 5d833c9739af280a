//! Per-color grouping of order lines and their cutting patterns.

use super::{CuttingPattern, OrderLine};
use serde::{Deserialize, Serialize};

/// Output of the grouping stage: lines of one color with their patterns.
///
/// `lines[i]` is laid out by `patterns[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternGroup {
    pub color: String,
    pub lines: Vec<OrderLine>,
    pub patterns: Vec<CuttingPattern>,
}

impl PatternGroup {
    /// Create an empty group for a color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            lines: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Add a line and the pattern chosen for it.
    pub fn push(&mut self, line: OrderLine, pattern: CuttingPattern) {
        self.lines.push(line);
        self.patterns.push(pattern);
    }

    /// Sum of pattern footage before scrap.
    pub fn base_linear_feet(&self) -> f64 {
        self.patterns.iter().map(CuttingPattern::total_feet).sum()
    }
}

/// Fully aggregated color group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGroup {
    pub color: String,
    pub lines: Vec<OrderLine>,
    pub patterns: Vec<CuttingPattern>,
    /// Sum of pattern footage.
    pub base_linear_feet: f64,
    /// `base_linear_feet * scrap_factor`.
    pub scrap_feet: f64,
    /// `base_linear_feet + scrap_feet`.
    pub total_linear_feet: f64,
    /// Whole coils to purchase for this color.
    pub coils_needed: u64,
    /// `base_linear_feet / total_linear_feet`, unrounded.
    pub material_efficiency: f64,
}

impl ColorGroup {
    /// Number of pieces ordered in this color.
    pub fn piece_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of lines laid out as nested patterns.
    pub fn nested_count(&self) -> usize {
        self.patterns.iter().filter(|p| p.is_nested()).count()
    }
}
