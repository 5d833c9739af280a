//! Validation logic for order lines and coil width.

use crate::config::float_cmp;
use crate::error::{NestError, Result};
use crate::model::OrderLine;
use crate::nesting::pieces_per_row;

/// Nested layouts covering less than this fraction of the coil get a warning.
const LOW_LAYOUT_EFFICIENCY: f64 = 0.75;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate an order and the coil width it will be run on.
///
/// An empty order is an error rather than a failing result.
pub fn validate_order_lines(lines: &[OrderLine], coil_width: f64) -> Result<ValidationResult> {
    if lines.is_empty() {
        return Err(NestError::invalid("order line list is empty"));
    }

    if !coil_width.is_finite() || !float_cmp::is_positive(coil_width) {
        return Ok(ValidationResult::error(format!(
            "Coil width must be positive, got {}",
            coil_width
        )));
    }

    let mut result = ValidationResult::ok();

    for (idx, line) in lines.iter().enumerate() {
        result.merge(validate_line(line, idx + 1, coil_width));
    }

    Ok(result)
}

/// Validate a single order line. `line_num` is 1-based.
pub fn validate_line(line: &OrderLine, line_num: usize, coil_width: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if line.product_id.trim().is_empty() {
        result.add_error(format!("Line {}: Missing product id", line_num));
    }

    if line.quantity <= 0 {
        result.add_error(format!(
            "Line {}: Quantity must be positive, got {}",
            line_num, line.quantity
        ));
    }

    if !float_cmp::is_positive(line.length) {
        result.add_error(format!(
            "Line {}: Length must be positive, got {}",
            line_num, line.length
        ));
    }

    if !float_cmp::is_positive(line.width) {
        result.add_error(format!(
            "Line {}: Width must be positive, got {}",
            line_num, line.width
        ));
        return result;
    }

    if line.width > coil_width {
        result.add_warning(format!(
            "Line {}: Width {} exceeds coil width {}, running full width",
            line_num, line.width, coil_width
        ));
    } else if !line.is_full_width(coil_width) {
        let per_row = pieces_per_row(line.width, coil_width);
        let efficiency = line.width * per_row as f64 / coil_width;
        if efficiency < LOW_LAYOUT_EFFICIENCY {
            result.add_warning(format!(
                "Line {}: Width {} covers only {:.0}% of the coil",
                line_num,
                line.width,
                efficiency * 100.0
            ));
        }
    }

    result
}

/// Reject invalid input with a single [`NestError::InvalidInput`]; log warnings.
pub fn ensure_valid(lines: &[OrderLine], coil_width: f64) -> Result<()> {
    let result = validate_order_lines(lines, coil_width)?;

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    if !result.passed {
        return Err(NestError::invalid(result.errors.join("; ")));
    }

    Ok(())
}
