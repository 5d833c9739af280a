//! Scrap, coil count and pricing aggregation.

use crate::config::{BusinessConfig, EPS};
use crate::error::{NestError, Result};
use crate::model::{ColorGroup, OptimizationSummary, PatternGroup, Pricing};
use tracing::debug;

/// Apply scrap and coil counts per color, then roll every color into one summary.
///
/// Values stay unrounded; rounding belongs to the report layer. Footage that
/// is not finite, or a coil count that does not fit a `u64`, is rejected as
/// [`NestError::InvalidInput`].
pub fn aggregate(
    groups: Vec<PatternGroup>,
    config: &BusinessConfig,
) -> Result<(Vec<ColorGroup>, OptimizationSummary)> {
    let color_groups = groups
        .into_iter()
        .map(|group| aggregate_group(group, config))
        .collect::<Result<Vec<ColorGroup>>>()?;

    let mut summary = OptimizationSummary::default();
    for group in &color_groups {
        summary.total_linear_feet += group.base_linear_feet;
        summary.scrap_feet += group.scrap_feet;
        summary.total_with_scrap += group.total_linear_feet;
        summary.total_coils_needed = summary
            .total_coils_needed
            .checked_add(group.coils_needed)
            .ok_or_else(|| NestError::invalid("total coil count is out of range"))?;
    }
    if !summary.total_with_scrap.is_finite() {
        return Err(NestError::invalid("total order footage is out of range"));
    }

    summary.pricing = price(summary.total_with_scrap, config);
    if !summary.pricing.sell_price.is_finite() {
        return Err(NestError::invalid("order price is out of range"));
    }

    Ok((color_groups, summary))
}

/// Aggregate a single color.
pub fn aggregate_group(group: PatternGroup, config: &BusinessConfig) -> Result<ColorGroup> {
    let base_linear_feet = group.base_linear_feet();
    let scrap_feet = base_linear_feet * config.scrap_factor;
    let total_linear_feet = base_linear_feet + scrap_feet;
    if !total_linear_feet.is_finite() {
        return Err(NestError::invalid(format!(
            "color {}: footage is out of range",
            group.color
        )));
    }

    let coils_needed = coils_for(total_linear_feet, config.standard_roll_length).ok_or_else(|| {
        NestError::invalid(format!("color {}: coil count is out of range", group.color))
    })?;
    let material_efficiency = if total_linear_feet > 0.0 {
        base_linear_feet / total_linear_feet
    } else {
        1.0
    };

    debug!(
        "Color {}: {} ft base, {} ft scrap, {} coil(s)",
        group.color, base_linear_feet, scrap_feet, coils_needed
    );

    Ok(ColorGroup {
        color: group.color,
        lines: group.lines,
        patterns: group.patterns,
        base_linear_feet,
        scrap_feet,
        total_linear_feet,
        coils_needed,
        material_efficiency,
    })
}

/// Whole coils covering `feet`, ignoring float noise just above a multiple of the roll.
///
/// `None` when the count is not finite or does not fit a `u64`.
pub fn coils_for(feet: f64, roll_length: f64) -> Option<u64> {
    if feet <= 0.0 || roll_length <= 0.0 {
        return Some(0);
    }
    let rolls = feet / roll_length;
    let coils = (rolls - EPS * rolls.max(1.0)).ceil().max(0.0);
    // 2^64 is the first float past u64::MAX
    if !coils.is_finite() || coils >= u64::MAX as f64 {
        return None;
    }
    Some(coils as u64)
}
