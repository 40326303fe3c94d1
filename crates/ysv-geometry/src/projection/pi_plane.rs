//! π-plane cross-sections.

use std::f64::consts::TAU;

use ysv_core::{DruckerPragerParams, GeometryTolerance, MohrCoulombParams, VisualizationSettings};
use ysv_math::{project_to_pi_plane, Point2, Point3, Polyline2};

use crate::invariants::drucker_prager;
use crate::ring::hexagon_ring;

/// Chart half-width used when there is nothing to draw.
pub const EMPTY_EXTENT: f64 = 60.0;
/// Smallest chart half-width, so tiny sections stay readable.
pub const MIN_EXTENT: f64 = 20.0;

/// Project a stress-space ring onto the π-plane as a closed polygon.
///
/// Non-finite projections are dropped; an empty input gives an empty polyline.
pub fn project_ring(ring: &[Point3]) -> Polyline2 {
    let mut points: Polyline2 = ring
        .iter()
        .map(|&v| project_to_pi_plane(v))
        .filter(|pt| pt.is_finite())
        .collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Mohr-Coulomb hexagon at mean stress `p0`.
pub fn mohr_coulomb_section(
    params: &MohrCoulombParams,
    p0: f64,
    tol: &GeometryTolerance,
) -> Polyline2 {
    let ring = hexagon_ring(p0, params.cohesion, params.friction_angle_rad(), tol);
    project_ring(&ring)
}

/// Drucker-Prager circle at mean stress `p0`, radius `q(p0)·√(2/3)`.
///
/// Sampled at `points` angular steps and closed. Empty when `m·p0 + k_d < 0`.
pub fn drucker_prager_section(params: &DruckerPragerParams, p0: f64, points: usize) -> Polyline2 {
    let q = drucker_prager::q_linear(p0, params.slope, params.cohesion_intercept);
    if !q.is_finite() || q < 0.0 || points == 0 {
        return Vec::new();
    }
    let points = points.min(VisualizationSettings::MAX_SECTORS);

    let radius = q * (2.0f64 / 3.0).sqrt();
    let mut circle: Polyline2 = (0..points)
        .map(|i| {
            let theta = i as f64 * TAU / points as f64;
            Point2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    circle.push(circle[0]);
    circle
}

/// Half-width of a square chart that fits `section` with 10% margin.
pub fn pi_plane_extent(section: &[Point2]) -> f64 {
    if section.is_empty() {
        return EMPTY_EXTENT;
    }
    let max_abs = section
        .iter()
        .fold(0.0f64, |acc, pt| acc.max(pt.x.abs()).max(pt.y.abs()));
    (max_abs * 1.1).max(MIN_EXTENT)
}

/// Projections of the σ1, σ2 and σ3 axes, each as a `[positive, negative]`
/// segment of length `extent` on either side of the origin.
pub fn principal_axis_lines(extent: f64) -> [[Point2; 2]; 3] {
    [Point3::X, Point3::Y, Point3::Z].map(|axis| {
        [
            project_to_pi_plane(axis * extent),
            project_to_pi_plane(-axis * extent),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_ring_closes_polygon() {
        let ring = [
            Point3::new(2.0, -1.0, -1.0),
            Point3::new(-1.0, 2.0, -1.0),
            Point3::new(-1.0, -1.0, 2.0),
        ];
        let poly = project_ring(&ring);
        assert_eq!(poly.len(), 4);
        assert_eq!(poly[0], poly[3]);
        assert!(project_ring(&[]).is_empty());
    }

    #[test]
    fn test_tresca_hexagon_is_regular() {
        let tol = GeometryTolerance::default();
        let poly = mohr_coulomb_section(&MohrCoulombParams::new(15.0, 0.0), 50.0, &tol);
        assert_eq!(poly.len(), 7);
        let r0 = poly[0].length();
        for pt in &poly {
            assert_relative_eq!(pt.length(), r0, epsilon = 1e-9);
        }
        // ρ = √(2/3)·q with q = 2c
        assert_relative_eq!(r0, (2.0f64 / 3.0).sqrt() * 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frictional_hexagon_is_irregular() {
        let tol = GeometryTolerance::default();
        let poly = mohr_coulomb_section(&MohrCoulombParams::new(10.0, 30.0), 50.0, &tol);
        assert_eq!(poly.len(), 7);
        // compression corners lie further out than extension corners
        assert!(poly[0].length() > poly[1].length());
        assert_relative_eq!(poly[0].length(), poly[2].length(), epsilon = 1e-9);
        assert_relative_eq!(poly[1].length(), poly[3].length(), epsilon = 1e-9);
    }

    #[test]
    fn test_drucker_prager_circle_radius() {
        let params = DruckerPragerParams::new(0.6, 10.0);
        let poly = drucker_prager_section(&params, 50.0, 50);
        assert_eq!(poly.len(), 51);
        assert_eq!(poly[0], poly[50]);
        for pt in &poly {
            assert_relative_eq!(pt.length(), 40.0 * (2.0f64 / 3.0).sqrt(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_drucker_prager_circle_empty_below_envelope() {
        let params = DruckerPragerParams::new(0.1, -20.0);
        assert!(drucker_prager_section(&params, 50.0, 50).is_empty());
    }

    #[test]
    fn test_drucker_prager_circle_empty_when_q_overflows() {
        // 1e308 · 50 overflows to +∞
        let params = DruckerPragerParams::new(1e308, 10.0);
        assert!(drucker_prager_section(&params, 50.0, 50).is_empty());
        assert!(drucker_prager_section(&params, f64::MAX, 50).is_empty());
    }

    #[test]
    fn test_drucker_prager_circle_point_count_is_capped() {
        let poly = drucker_prager_section(&DruckerPragerParams::new(0.6, 10.0), 50.0, usize::MAX);
        assert_eq!(poly.len(), VisualizationSettings::MAX_SECTORS + 1);
        assert!(poly.iter().all(|pt| pt.is_finite()));
    }

    #[test]
    fn test_extent() {
        assert_eq!(pi_plane_extent(&[]), EMPTY_EXTENT);
        assert_eq!(pi_plane_extent(&[Point2::new(1.0, -2.0)]), MIN_EXTENT);
        assert_relative_eq!(pi_plane_extent(&[Point2::new(30.0, -50.0)]), 55.0, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_axis_lines() {
        let lines = principal_axis_lines(60.0);
        // σ1 projects straight up
        assert_relative_eq!(lines[0][0].x, 0.0);
        assert_relative_eq!(lines[0][0].y, 60.0 * 2.0 / 6.0f64.sqrt(), epsilon = 1e-12);
        // axes are 120° apart
        for pair in [(0, 1), (1, 2), (2, 0)] {
            let a = lines[pair.0][0].normalize();
            let b = lines[pair.1][0].normalize();
            assert_relative_eq!(a.dot(b), -0.5, epsilon = 1e-12);
        }
    }
}
