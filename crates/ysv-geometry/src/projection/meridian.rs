//! Envelope curves in the meridian (p-q) plane.

use serde::{Deserialize, Serialize};
use ysv_core::{DruckerPragerParams, GeometryTolerance, MohrCoulombParams};
use ysv_math::{pressure_grid, Point2};

use crate::invariants::{drucker_prager, mohr_coulomb, Meridian};

/// Which envelope a meridian curve traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvelopeBranch {
    TriaxialCompression,
    TriaxialExtension,
    DruckerPrager,
}

impl EnvelopeBranch {
    pub fn label(self) -> &'static str {
        match self {
            EnvelopeBranch::TriaxialCompression => "TC",
            EnvelopeBranch::TriaxialExtension => "TE",
            EnvelopeBranch::DruckerPrager => "DP",
        }
    }
}

impl From<Meridian> for EnvelopeBranch {
    fn from(m: Meridian) -> Self {
        match m {
            Meridian::Compression => EnvelopeBranch::TriaxialCompression,
            Meridian::Extension => EnvelopeBranch::TriaxialExtension,
        }
    }
}

/// One envelope as `(p, q)` points over increasing `p`.
///
/// Only pressures where the envelope exists are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeridianCurve {
    pub branch: EnvelopeBranch,
    pub points: Vec<Point2>,
}

impl MeridianCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `q` values aligned to `pressures`, with `NaN` where this curve has no point.
    ///
    /// `pressures` must be the grid the curve was sampled on.
    pub fn gapped(&self, pressures: &[f64]) -> Vec<f64> {
        let mut points = self.points.iter().peekable();
        pressures
            .iter()
            .map(|&p| match points.peek() {
                Some(pt) if pt.x == p => {
                    let q = pt.y;
                    points.next();
                    q
                }
                _ => f64::NAN,
            })
            .collect()
    }
}

/// Meridian envelopes of one parameter set, sampled on a shared pressure grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeridianEnvelope {
    pub pressures: Vec<f64>,
    pub curves: Vec<MeridianCurve>,
}

impl MeridianEnvelope {
    pub fn curve(&self, branch: EnvelopeBranch) -> Option<&MeridianCurve> {
        self.curves.iter().find(|c| c.branch == branch)
    }

    /// Whether no curve has a single valid point.
    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(MeridianCurve::is_empty)
    }
}

fn sample_curve(
    branch: EnvelopeBranch,
    pressures: &[f64],
    tol: &GeometryTolerance,
    q_at: impl Fn(f64) -> f64,
) -> MeridianCurve {
    let points = pressures
        .iter()
        .filter_map(|&p| {
            let q = tol.snap_zero(q_at(p));
            (q.is_finite() && q >= 0.0).then(|| Point2::new(p, q))
        })
        .collect();
    MeridianCurve { branch, points }
}

/// Compression and extension envelopes of Mohr-Coulomb from the apex to `p_max`.
pub fn mohr_coulomb_meridian(
    params: &MohrCoulombParams,
    p_max: f64,
    step: f64,
    tol: &GeometryTolerance,
) -> MeridianEnvelope {
    let c = params.cohesion;
    let phi = params.friction_angle_rad();
    let p_start = mohr_coulomb::apex_pressure(c, phi, tol);
    let pressures = pressure_grid(p_start, p_max, step);

    let mut curves: Vec<MeridianCurve> = Meridian::BOTH
        .iter()
        .map(|&m| sample_curve(m.into(), &pressures, tol, |p| m.q_raw(p, c, phi, tol)))
        .collect();

    // The surface mesh closes the pyramid on the hydrostatic axis at the apex,
    // so both envelopes start from that point in the p-q plane as well.
    if p_start > 0.0 {
        for curve in &mut curves {
            if let Some(first) = curve.points.first_mut().filter(|pt| pt.x == p_start) {
                first.y = 0.0;
            }
        }
    }

    tracing::debug!(p_start, p_max, samples = pressures.len(), "Sampled Mohr-Coulomb meridians");
    MeridianEnvelope { pressures, curves }
}

/// Linear Drucker-Prager envelope from its start pressure to `p_max`.
pub fn drucker_prager_meridian(
    params: &DruckerPragerParams,
    p_max: f64,
    step: f64,
    tol: &GeometryTolerance,
) -> MeridianEnvelope {
    let (m, kd) = (params.slope, params.cohesion_intercept);
    let p_start = drucker_prager::start_pressure(m, kd, tol);
    let pressures = pressure_grid(p_start, p_max, step);

    let curve = sample_curve(EnvelopeBranch::DruckerPrager, &pressures, tol, |p| {
        drucker_prager::q_linear(p, m, kd)
    });

    tracing::debug!(p_start, p_max, samples = pressures.len(), "Sampled Drucker-Prager meridian");
    MeridianEnvelope {
        pressures,
        curves: vec![curve],
    }
}
