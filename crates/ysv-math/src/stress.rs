//! Stress invariants and coordinate changes between principal-stress space
//! and the π-plane.

use std::f64::consts::{FRAC_PI_3, SQRT_2};

use crate::{Point2, Point3};

const SQRT_6: f64 = 2.449_489_742_783_178;

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Point on the hydrostatic axis at mean stress `p`.
pub fn hydrostatic(p: f64) -> Point3 {
    Point3::splat(p)
}

/// Mean stress `p = (σ1 + σ2 + σ3) / 3`.
pub fn mean_stress(sigma: Point3) -> f64 {
    (sigma.x + sigma.y + sigma.z) / 3.0
}

/// Deviatoric stress `q = √(3·J2)`.
pub fn deviatoric_stress(sigma: Point3) -> f64 {
    let a = sigma.x - sigma.y;
    let b = sigma.y - sigma.z;
    let c = sigma.z - sigma.x;
    (0.5 * (a * a + b * b + c * c)).sqrt()
}

/// Principal stresses from mean stress, deviatoric stress and Lode angle.
///
/// Uses the 120° offset identity `σ_k = p + √(2/3)·q·cos(θ − 2πk/3)`; the
/// same identity places the Drucker-Prager rings in stress space.
pub fn principal_from_pq(p: f64, q: f64, lode_angle: f64) -> Point3 {
    let r = (2.0f64 / 3.0).sqrt() * q;
    Point3::new(
        p + r * lode_angle.cos(),
        p + r * (lode_angle - 2.0 * FRAC_PI_3).cos(),
        p + r * (lode_angle + 2.0 * FRAC_PI_3).cos(),
    )
}

/// Project a stress state onto the π-plane.
///
/// `x' = (σ2 − σ3)/√2`, `y' = (2σ1 − σ2 − σ3)/√6`, so the σ1 axis points up.
pub fn project_to_pi_plane(sigma: Point3) -> Point2 {
    Point2::new(
        (sigma.y - sigma.z) / SQRT_2,
        (2.0 * sigma.x - sigma.y - sigma.z) / SQRT_6,
    )
}

/// Inverse of [`project_to_pi_plane`] at mean stress `p`.
pub fn pi_plane_to_stresses(point: Point2, p: f64) -> Point3 {
    let (x, y) = (point.x, point.y);
    Point3::new(
        p + y * SQRT_6 / 3.0,
        p - y * SQRT_6 / 6.0 + x * SQRT_2 / 2.0,
        p - y * SQRT_6 / 6.0 - x * SQRT_2 / 2.0,
    )
}
