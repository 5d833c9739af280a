//! Cutting pattern chosen for a single order line.

use serde::{Deserialize, Serialize};

/// Pieces run one per row at full coil width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullWidthPattern {
    pub quantity: u64,
    pub length_each: f64,
    pub total_feet: f64,
}

/// Narrow pieces nested side by side across the coil width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedPattern {
    /// Piece width in inches.
    pub width: f64,
    /// Pieces that fit across one row; always at least 1.
    pub pieces_per_row: u64,
    /// Rows needed; a partial last row counts as a full one.
    pub rows_needed: u64,
    pub length_each: f64,
    pub total_feet: f64,
    /// Fraction of the coil width covered by one row (0..=1).
    pub layout_efficiency: f64,
}

/// Layout strategy for an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CuttingPattern {
    FullWidth(FullWidthPattern),
    Nested(NestedPattern),
}

impl CuttingPattern {
    /// Linear feet of coil consumed by this pattern.
    pub fn total_feet(&self) -> f64 {
        match self {
            CuttingPattern::FullWidth(p) => p.total_feet,
            CuttingPattern::Nested(p) => p.total_feet,
        }
    }

    /// Length of each piece in feet.
    pub fn length_each(&self) -> f64 {
        match self {
            CuttingPattern::FullWidth(p) => p.length_each,
            CuttingPattern::Nested(p) => p.length_each,
        }
    }

    /// Number of cut rows along the coil.
    pub fn rows(&self) -> u64 {
        match self {
            CuttingPattern::FullWidth(p) => p.quantity,
            CuttingPattern::Nested(p) => p.rows_needed,
        }
    }

    /// Check if this is a nested pattern.
    pub fn is_nested(&self) -> bool {
        matches!(self, CuttingPattern::Nested(_))
    }

    /// Short label for display.
    pub fn kind(&self) -> &'static str {
        match self {
            CuttingPattern::FullWidth(_) => "full-width",
            CuttingPattern::Nested(_) => "nested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_tagged() {
        let pattern = CuttingPattern::FullWidth(FullWidthPattern {
            quantity: 2,
            length_each: 10.0,
            total_feet: 20.0,
        });
        let json = serde_json::to_value(&pattern).expect("Should serialize");
        assert_eq!(json["type"], "fullWidth");
        assert_eq!(json["lengthEach"], 10.0);
        assert_eq!(json["totalFeet"], 20.0);
    }

    #[test]
    fn test_accessors() {
        let pattern = CuttingPattern::Nested(NestedPattern {
            width: 14.0,
            pieces_per_row: 3,
            rows_needed: 5,
            length_each: 10.0,
            total_feet: 50.0,
            layout_efficiency: 42.0 / 43.875,
        });
        assert!(pattern.is_nested());
        assert_eq!(pattern.rows(), 5);
        assert_eq!(pattern.total_feet(), 50.0);
        assert_eq!(pattern.kind(), "nested");
    }
}
