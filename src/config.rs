//! Configuration constants and settings for the nesting engine.

use crate::error::{NestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 1e-9;

/// Standard wide coil width in inches.
pub const DEFAULT_COIL_WIDTH: f64 = 43.875;

/// Color key used for order lines without a color.
pub const UNSPECIFIED_COLOR: &str = "UNSPECIFIED";

/// Default scrap allowance (5%).
pub const DEFAULT_SCRAP_FACTOR: f64 = 0.05;

/// Default coil length in linear feet.
pub const DEFAULT_ROLL_LENGTH: f64 = 100.0;

/// Default material cost per linear foot.
pub const DEFAULT_MATERIAL_COST_PER_FOOT: f64 = 3.85;

/// Default labor cost per linear foot.
pub const DEFAULT_LABOR_COST_PER_FOOT: f64 = 0.50;

/// Default margin applied on top of total cost.
pub const DEFAULT_MARGIN_PERCENT: f64 = 0.30;

/// Default gauge literal used in coil product identifiers.
pub const DEFAULT_GAUGE: &str = "26";

/// Code assigned to colors missing from the color table.
pub const CUSTOM_COLOR_CODE: &str = "CUSTOM";

/// Business constants used by aggregation and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessConfig {
    /// Fractional scrap overhead added to base linear feet.
    pub scrap_factor: f64,
    /// Length of one purchased coil in feet.
    pub standard_roll_length: f64,
    /// Material cost per scrap-inflated linear foot.
    pub material_cost_per_foot: f64,
    /// Labor cost per scrap-inflated linear foot.
    pub labor_cost_per_foot: f64,
    /// Margin as a fraction of total cost (0.30 = 30%).
    pub margin_percent: f64,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            scrap_factor: DEFAULT_SCRAP_FACTOR,
            standard_roll_length: DEFAULT_ROLL_LENGTH,
            material_cost_per_foot: DEFAULT_MATERIAL_COST_PER_FOOT,
            labor_cost_per_foot: DEFAULT_LABOR_COST_PER_FOOT,
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

impl BusinessConfig {
    /// Check that the constants can drive the engine.
    pub fn validate(&self) -> Result<()> {
        if !self.scrap_factor.is_finite() || self.scrap_factor < 0.0 {
            return Err(NestError::invalid(format!(
                "scrap factor must be non-negative, got {}",
                self.scrap_factor
            )));
        }
        if !self.standard_roll_length.is_finite() || self.standard_roll_length <= 0.0 {
            return Err(NestError::invalid(format!(
                "standard roll length must be positive, got {}",
                self.standard_roll_length
            )));
        }
        Ok(())
    }
}

/// A single entry of the color table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Short catalog code (e.g. "AG").
    pub code: String,
    /// Display name (e.g. "Ash Gray").
    pub name: String,
}

/// Read-only color code to color name table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::from_pairs(&[
            ("AG", "Ash Gray"),
            ("BK", "Black"),
            ("BR", "Barn Red"),
            ("BS", "Burnished Slate"),
            ("CG", "Charcoal Gray"),
            ("CP", "Copper Penny"),
            ("FG", "Forest Green"),
            ("GV", "Galvalume"),
            ("HB", "Hawaiian Blue"),
            ("LS", "Light Stone"),
            ("PW", "Polar White"),
            ("TN", "Tan"),
        ])
    }
}

impl ColorTable {
    /// Build a table from `(code, name)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(code, name)| ColorEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Reverse lookup of a color code by name (case-insensitive exact match).
    ///
    /// Surrounding whitespace is significant, as it is for color grouping.
    pub fn code_for(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
            .map(|e| e.code.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Settings for composing coil product identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Gauge literal embedded in every product id.
    pub gauge: String,
    /// Code used when a color is not in the table.
    pub custom_code: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            gauge: DEFAULT_GAUGE.to_string(),
            custom_code: CUSTOM_COLOR_CODE.to_string(),
        }
    }
}

/// Immutable configuration snapshot threaded through every engine call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub business: BusinessConfig,
    pub colors: ColorTable,
    pub catalog: CatalogConfig,
    /// Attach a recommended coil product to each color group in reports.
    pub attach_recommended_coil: bool,
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(s)?;
        config.business.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(NestError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        Self::from_json_str(&content)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal (relative to magnitude).
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    /// Round to two decimals for display.
    #[inline]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Check that a value is finite and strictly positive.
    #[inline]
    pub fn is_positive(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }
}
