use crate::error::{DietError, Result};
use crate::planner::constants::{MAX_PLAN_DAYS, MIN_PLAN_DAYS};

/// Round to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to `decimals` places, half away from zero.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Reject values outside `[min, max]` (and NaN).
pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(DietError::Validation(format!(
            "{field} must be between {min} and {max} (got {value})"
        )));
    }
    Ok(())
}

pub fn check_days(days: u32) -> Result<()> {
    if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&days) {
        return Err(DietError::Validation(format!(
            "days must be between {MIN_PLAN_DAYS} and {MAX_PLAN_DAYS} (got {days})"
        )));
    }
    Ok(())
}
