//! Coil product selection.
//!
//! Product ids are composed as `C<inches>-<gauge>GA-<color code>`, e.g.
//! `C44-26GA-AG` for Ash Gray on the standard 43.875" coil. The whole-inch
//! prefix rounds the coil width to the nearest inch.

use crate::config::{float_cmp, EngineConfig};
use crate::error::{NestError, Result};

/// Resolve the catalog coil product for a color and coil width.
///
/// Colors missing from the table get the configured custom code.
pub fn resolve_coil_product(color: &str, width: f64, config: &EngineConfig) -> Result<String> {
    let code = config
        .colors
        .code_for(color)
        .unwrap_or(config.catalog.custom_code.as_str());

    Ok(format!(
        "{}-{}GA-{}",
        width_prefix(width)?,
        config.catalog.gauge,
        code
    ))
}

/// Width-derived product prefix.
///
/// The width must be a finite, positive number of inches.
pub fn width_prefix(width: f64) -> Result<String> {
    if !width.is_finite() || !float_cmp::is_positive(width) {
        return Err(NestError::invalid(format!(
            "coil width must be a positive number of inches, got {}",
            width
        )));
    }
    Ok(format!("C{}", width.round() as i64))
}
