//! The diamond pricing formula and batch aggregation.

use crate::error::{DiamondError, DiamondResult};
use crate::tables;
use crate::types::{CalculationResponse, DiamondGroup, GroupDetails, GroupResult};

/// Base price in dollars per carat before any multipliers.
pub const BASE_PRICE_PER_CARAT: f64 = 3500.0;

/// Exponent of the sub-linear carat term. Carat enters the formula twice:
/// linearly and through this power term, so larger stones cost
/// disproportionately more but at a diminishing marginal rate.
pub const CARAT_CURVE_EXPONENT: f64 = 0.8;

/// Price a single diamond from its characteristics.
///
/// Validates the four grades against the multiplier tables; the first
/// invalid field aborts with the corresponding grade error. The returned
/// price is unrounded so callers can aggregate before display rounding.
pub fn price_per_diamond(group: &DiamondGroup) -> DiamondResult<f64> {
    let cut = tables::cut_multiplier(&group.cut).ok_or_else(|| DiamondError::InvalidCut {
        value: group.cut.clone(),
    })?;
    let color = tables::color_multiplier(&group.color).ok_or_else(|| DiamondError::InvalidColor {
        value: group.color.clone(),
    })?;
    let clarity =
        tables::clarity_multiplier(&group.clarity).ok_or_else(|| DiamondError::InvalidClarity {
            value: group.clarity.clone(),
        })?;
    let certification = tables::certification_multiplier(&group.certification).ok_or_else(|| {
        DiamondError::InvalidCertification {
            value: group.certification.clone(),
        }
    })?;

    // Multiplication order is fixed for reproducibility.
    let mut price = BASE_PRICE_PER_CARAT * group.carat;
    price *= cut;
    price *= color;
    price *= clarity;
    price *= certification;
    price *= group.carat.powf(CARAT_CURVE_EXPONENT);

    // A negative carat makes the power term NaN, and extreme inputs can
    // overflow to infinity. Neither is representable as a JSON number, so
    // fail the computation instead of emitting null prices.
    if !price.is_finite() {
        return Err(DiamondError::internal(format!(
            "price computation produced a non-finite value for carat {}",
            group.carat
        )));
    }

    Ok(price)
}

/// Price a batch of diamond groups.
///
/// Group ids are assigned as 1-based positions in input order. Totals are
/// accumulated from unrounded per-diamond prices; per-diamond, per-group,
/// and grand totals are rounded to 2 decimal places only for output. The
/// first invalid group aborts the whole batch with no partial results.
pub fn calculate(groups: &[DiamondGroup]) -> DiamondResult<CalculationResponse> {
    let mut results = Vec::with_capacity(groups.len());
    let mut grand_total = 0.0_f64;

    for (i, group) in groups.iter().enumerate() {
        let per_diamond = price_per_diamond(group)?;
        let total = per_diamond * f64::from(group.quantity);
        grand_total += total;

        results.push(GroupResult {
            group_id: (i + 1) as u32,
            per_diamond: round_to_cents(per_diamond),
            total: round_to_cents(total),
            details: GroupDetails::from(group),
        });
    }

    Ok(CalculationResponse {
        results,
        grand_total: round_to_cents(grand_total),
    })
}

/// Round to 2 decimal places for display.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
