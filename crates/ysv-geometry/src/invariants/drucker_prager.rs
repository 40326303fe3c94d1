//! Drucker-Prager envelope, linear in the p-q plane.

use ysv_core::GeometryTolerance;

/// Signed envelope value `m·p + k_d`.
pub fn q_linear(p: f64, slope: f64, intercept: f64) -> f64 {
    slope * p + intercept
}

/// Deviatoric stress at yield, `max(0, m·p + k_d)`.
pub fn q(p: f64, slope: f64, intercept: f64) -> f64 {
    // f64::max drops a NaN operand, so non-finite input collapses to the axis
    q_linear(p, slope, intercept).max(0.0)
}

/// Mean stress where the cone starts.
///
/// A negative intercept with a positive slope moves the apex up the
/// hydrostatic axis to `−k_d/m`; everything else starts at the origin.
pub fn start_pressure(slope: f64, intercept: f64, tol: &GeometryTolerance) -> f64 {
    if slope > tol.slope && intercept < 0.0 {
        (-intercept / slope).max(0.0)
    } else {
        0.0
    }
}
