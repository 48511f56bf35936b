// Delivery-day estimation helpers

use crate::config::MethodRate;
use crate::models::{Days, Kilometres};

/// Ceiling division; `divisor` must be non-zero
pub fn ceil_div(distance: Kilometres, divisor: Kilometres) -> Kilometres {
    distance / divisor + u32::from(distance % divisor != 0)
}

/// Days to cover `distance` at the method's pace, never below its floor
pub fn estimate_days(distance: Kilometres, rule: &MethodRate) -> Days {
    ceil_div(distance, rule.day_divisor_km).max(rule.min_days)
}
