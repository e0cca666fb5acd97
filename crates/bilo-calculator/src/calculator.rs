//! Emission calculation.

use bilo_core::error::{BiloError, Result};
use bilo_core::ids;

use crate::factors::FactorTable;

#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub calculation_id: String,
    /// Rounded to 3 decimals.
    pub co2_kg: f64,
    /// As submitted, not normalized.
    pub activity_type: String,
}

/// `value * factor(activity_type)`. `unit` is accepted as-is; it is not
/// checked against the factor's unit.
pub fn calculate(
    table: &FactorTable,
    activity_type: &str,
    value: f64,
    unit: &str,
) -> Result<Calculation> {
    let factor = table.lookup(activity_type).ok_or_else(|| {
        let supported = table.activity_types().collect::<Vec<_>>().join(", ");
        BiloError::InvalidArgument(format!(
            "Unknown activity type: {activity_type}. Supported types: {supported}"
        ))
    })?;

    tracing::debug!(activity_type, unit, factor_unit = factor.unit, "applying emission factor");

    Ok(Calculation {
        calculation_id: ids::calculation_id(),
        co2_kg: round3(value * factor.value),
        activity_type: activity_type.to_string(),
    })
}

/// Half away from zero. Magnitudes of 2^52 and above have no fractional
/// part left, and scaling them could overflow to infinity.
fn round3(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= 2f64.powi(52) {
        return x;
    }
    (x * 1000.0).round() / 1000.0
}
