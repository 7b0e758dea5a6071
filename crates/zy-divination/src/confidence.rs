//! Confidence scoring for a reading.
//!
//! A pure function of the casting method and the number of changing
//! lines. The method bonus is monotonic with the declared accuracy
//! ranking; many changing lines make a reading ambiguous and cost it.

use crate::method::CastMethod;

/// Base confidence before method and changing-line adjustments.
pub const BASE_CONFIDENCE: f64 = 0.70;

/// Bonus for the casting method.
pub fn method_bonus(method: CastMethod) -> f64 {
    match method {
        CastMethod::ThreeCoins => 0.15,
        CastMethod::YarrowSticks => 0.20,
        CastMethod::Numbers => 0.10,
        CastMethod::Random => 0.05,
    }
}

/// Adjustment for the number of changing lines.
///
/// A fully stable cast reads most reliably; three or more changing lines
/// are penalized.
pub fn changing_adjustment(changing_count: usize) -> f64 {
    match changing_count {
        0 => 0.10,
        1 | 2 => 0.05,
        _ => -0.05,
    }
}

/// Estimate the confidence of a reading, clamped to at most 1.0.
///
/// No lower clamp is applied; the minimum achievable value is positive by
/// construction.
pub fn estimate(method: CastMethod, changing_count: usize) -> f64 {
    (BASE_CONFIDENCE + method_bonus(method) + changing_adjustment(changing_count)).min(1.0)
}
