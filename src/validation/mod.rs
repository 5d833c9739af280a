//! Order line validation.

mod validate;

pub use validate::{ensure_valid, validate_line, validate_order_lines, ValidationResult};
