//! Order line definition representing a batch of identical cut pieces.

use crate::config::UNSPECIFIED_COLOR;
use serde::{Deserialize, Serialize};

/// A batch of identical pieces ordered for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Product identifier from the order.
    pub product_id: String,
    /// Coil color name; grouped verbatim.
    #[serde(default)]
    pub color: Option<String>,
    /// Number of pieces.
    pub quantity: i64,
    /// Length of each piece in feet.
    pub length: f64,
    /// Width of each piece in inches.
    pub width: f64,
}

impl OrderLine {
    /// Create a new order line.
    pub fn new(
        product_id: impl Into<String>,
        color: Option<&str>,
        quantity: i64,
        length: f64,
        width: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            color: color.map(str::to_string),
            quantity,
            length,
            width,
        }
    }

    /// Grouping key: the color verbatim, or `UNSPECIFIED` when absent or blank.
    pub fn color_key(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNSPECIFIED_COLOR,
        }
    }

    /// Check if this line is at least as wide as the coil.
    pub fn is_full_width(&self, coil_width: f64) -> bool {
        self.width >= coil_width
    }
}
