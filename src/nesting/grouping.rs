//! Grouping by color and per-line pattern selection.

use crate::config::float_cmp;
use crate::error::{NestError, Result};
use crate::model::{CuttingPattern, FullWidthPattern, NestedPattern, OrderLine, PatternGroup};
use std::collections::HashMap;
use tracing::debug;

/// Partition order lines by color and choose a cutting pattern for each line.
///
/// Groups come back in order of first appearance of their color.
pub fn classify_and_group(lines: &[OrderLine], coil_width: f64) -> Result<Vec<PatternGroup>> {
    if lines.is_empty() {
        return Err(NestError::invalid("order line list is empty"));
    }
    if !coil_width.is_finite() || !float_cmp::is_positive(coil_width) {
        return Err(NestError::invalid(format!(
            "coil width must be positive, got {}",
            coil_width
        )));
    }

    let mut groups: Vec<PatternGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (idx, line) in lines.iter().enumerate() {
        let pattern = select_pattern(line, coil_width, idx + 1)?;
        debug!(
            "Line {} ({}): {} pattern, {} ft",
            idx + 1,
            line.product_id,
            pattern.kind(),
            pattern.total_feet()
        );

        let key = line.color_key();
        let slot = match index.get(key) {
            Some(&slot) => slot,
            None => {
                groups.push(PatternGroup::new(key));
                index.insert(key.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].push(line.clone(), pattern);
    }

    Ok(groups)
}

/// Choose the layout for one line: full-width at or above the coil width, nested below.
///
/// `line_num` is 1-based and only used for error reporting.
pub fn select_pattern(
    line: &OrderLine,
    coil_width: f64,
    line_num: usize,
) -> Result<CuttingPattern> {
    let quantity = piece_quantity(line, line_num)?;

    let pattern = if line.is_full_width(coil_width) {
        CuttingPattern::FullWidth(full_width_pattern(line, quantity))
    } else {
        CuttingPattern::Nested(nested_pattern(line, quantity, coil_width, line_num)?)
    };

    if !pattern.total_feet().is_finite() {
        return Err(NestError::invalid(format!(
            "line {}: footage of {} x {} ft is out of range",
            line_num, line.quantity, line.length
        )));
    }

    Ok(pattern)
}

fn piece_quantity(line: &OrderLine, line_num: usize) -> Result<u64> {
    u64::try_from(line.quantity)
        .ok()
        .filter(|&q| q > 0)
        .ok_or_else(|| {
            NestError::invalid(format!(
                "line {}: quantity must be positive, got {}",
                line_num, line.quantity
            ))
        })
}

fn full_width_pattern(line: &OrderLine, quantity: u64) -> FullWidthPattern {
    FullWidthPattern {
        quantity,
        length_each: line.length,
        total_feet: quantity as f64 * line.length,
    }
}

/// Nest narrow pieces across the coil.
///
/// A zero pieces-per-row result means the line should have been classified
/// full-width and is reported as [`NestError::DegenerateGeometry`].
pub fn nested_pattern(
    line: &OrderLine,
    quantity: u64,
    coil_width: f64,
    line_num: usize,
) -> Result<NestedPattern> {
    let pieces_per_row = pieces_per_row(line.width, coil_width);
    if pieces_per_row == 0 {
        return Err(NestError::DegenerateGeometry {
            line: line_num,
            width: line.width,
            coil_width,
        });
    }

    let rows_needed = quantity.div_ceil(pieces_per_row);

    Ok(NestedPattern {
        width: line.width,
        pieces_per_row,
        rows_needed,
        length_each: line.length,
        total_feet: rows_needed as f64 * line.length,
        layout_efficiency: line.width * pieces_per_row as f64 / coil_width,
    })
}

/// `floor(coil_width / width)`. A row of that many pieces never exceeds the coil width.
pub fn pieces_per_row(width: f64, coil_width: f64) -> u64 {
    if !float_cmp::is_positive(width) || !float_cmp::is_positive(coil_width) {
        return 0;
    }
    let mut per_row = (coil_width / width).floor() as u64;
    while per_row > 0 && per_row as f64 * width > coil_width {
        per_row -= 1;
    }
    per_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_COIL_WIDTH, UNSPECIFIED_COLOR};
    use pretty_assertions::assert_eq;

    fn line(color: Option<&str>, quantity: i64, length: f64, width: f64) -> OrderLine {
        OrderLine::new("TEST", color, quantity, length, width)
    }

    // ==================== select_pattern tests ====================

    #[test]
    fn test_full_width_at_coil_width() {
        let pattern =
            select_pattern(&line(None, 45, 16.0, 43.875), DEFAULT_COIL_WIDTH, 1).expect("ok");
        assert_eq!(
            pattern,
            CuttingPattern::FullWidth(FullWidthPattern {
                quantity: 45,
                length_each: 16.0,
                total_feet: 720.0,
            })
        );
    }

    #[test]
    fn test_full_width_over_coil_width() {
        let pattern =
            select_pattern(&line(None, 3, 12.0, 48.0), DEFAULT_COIL_WIDTH, 1).expect("ok");
        assert!(!pattern.is_nested());
        assert_eq!(pattern.total_feet(), 36.0);
    }

    #[test]
    fn test_nested_three_per_row() {
        let pattern =
            select_pattern(&line(None, 15, 10.0, 14.0), DEFAULT_COIL_WIDTH, 1).expect("ok");
        match pattern {
            CuttingPattern::Nested(p) => {
                assert_eq!(p.pieces_per_row, 3);
                assert_eq!(p.rows_needed, 5);
                assert_eq!(p.total_feet, 50.0);
                assert!((p.layout_efficiency - 42.0 / 43.875).abs() < 1e-12);
            }
            other => panic!("Expected nested pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_partial_last_row() {
        let pattern =
            select_pattern(&line(None, 16, 10.0, 14.0), DEFAULT_COIL_WIDTH, 1).expect("ok");
        assert_eq!(pattern.rows(), 6);
        assert_eq!(pattern.total_feet(), 60.0);
    }

    #[test]
    fn test_nested_exact_fit() {
        // 3 x 14.625 == 43.875
        let pattern =
            select_pattern(&line(None, 6, 8.0, 14.625), DEFAULT_COIL_WIDTH, 1).expect("ok");
        match pattern {
            CuttingPattern::Nested(p) => {
                assert_eq!(p.pieces_per_row, 3);
                assert_eq!(p.rows_needed, 2);
                assert!((p.layout_efficiency - 1.0).abs() < 1e-12);
            }
            other => panic!("Expected nested pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_select_rejects_zero_quantity() {
        let result = select_pattern(&line(None, 0, 10.0, 14.0), DEFAULT_COIL_WIDTH, 2);
        assert!(matches!(result, Err(NestError::InvalidInput { .. })));
    }

    // ==================== nested_pattern tests ====================

    #[test]
    fn test_nested_pattern_degenerate() {
        let result = nested_pattern(&line(None, 4, 10.0, 50.0), 4, DEFAULT_COIL_WIDTH, 3);
        match result {
            Err(NestError::DegenerateGeometry { line, width, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(width, 50.0);
            }
            other => panic!("Expected DegenerateGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_pieces_per_row_never_exceeds_coil() {
        for tenths in 10..438 {
            let width = tenths as f64 / 10.0;
            let per_row = pieces_per_row(width, DEFAULT_COIL_WIDTH);
            assert!(per_row >= 1, "width {}", width);
            assert!(
                per_row as f64 * width <= DEFAULT_COIL_WIDTH,
                "width {} packs {} per row",
                width,
                per_row
            );
        }
    }

    #[test]
    fn test_pieces_per_row_just_over_a_third() {
        let width = 14.6250000001;
        let per_row = pieces_per_row(width, DEFAULT_COIL_WIDTH);
        assert_eq!(per_row, 2);
        assert!(per_row as f64 * width <= DEFAULT_COIL_WIDTH);

        let pattern =
            select_pattern(&line(None, 6, 10.0, width), DEFAULT_COIL_WIDTH, 1).expect("ok");
        assert_eq!(pattern.rows(), 3);
        assert_eq!(pattern.total_feet(), 30.0);
    }

    #[test]
    fn test_select_rejects_infinite_footage() {
        let result = select_pattern(&line(None, i64::MAX, 1e300, 43.875), DEFAULT_COIL_WIDTH, 4);
        match result {
            Err(NestError::InvalidInput { message }) => assert!(message.contains("line 4")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // ==================== classify_and_group tests ====================

    #[test]
    fn test_group_empty_is_invalid() {
        let result = classify_and_group(&[], DEFAULT_COIL_WIDTH);
        assert!(matches!(result, Err(NestError::InvalidInput { .. })));
    }

    #[test]
    fn test_group_rejects_bad_coil_width() {
        let lines = vec![line(None, 1, 10.0, 12.0)];
        assert!(classify_and_group(&lines, 0.0).is_err());
        assert!(classify_and_group(&lines, -43.875).is_err());
        assert!(classify_and_group(&lines, f64::INFINITY).is_err());
    }

    #[test]
    fn test_group_first_appearance_order() {
        let lines = vec![
            line(Some("Galvalume"), 1, 10.0, 43.875),
            line(None, 2, 10.0, 14.0),
            line(Some("Ash Gray"), 3, 10.0, 43.875),
            line(Some("Galvalume"), 4, 10.0, 20.0),
        ];
        let groups = classify_and_group(&lines, DEFAULT_COIL_WIDTH).expect("ok");
        let colors: Vec<&str> = groups.iter().map(|g| g.color.as_str()).collect();
        assert_eq!(colors, vec!["Galvalume", UNSPECIFIED_COLOR, "Ash Gray"]);
        assert_eq!(groups[0].lines.len(), 2);
        assert_eq!(groups[0].patterns.len(), 2);
        assert_eq!(groups[0].lines[1].quantity, 4);
    }

    #[test]
    fn test_group_case_sensitive() {
        let lines = vec![
            line(Some("Ash Gray"), 1, 10.0, 43.875),
            line(Some("ash gray"), 1, 10.0, 43.875),
        ];
        let groups = classify_and_group(&lines, DEFAULT_COIL_WIDTH).expect("ok");
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_group_base_feet() {
        let lines = vec![
            line(Some("Black"), 45, 16.0, 43.875),
            line(Some("Black"), 15, 10.0, 14.0),
        ];
        let groups = classify_and_group(&lines, DEFAULT_COIL_WIDTH).expect("ok");
        assert_eq!(groups[0].base_linear_feet(), 770.0);
    }
}
