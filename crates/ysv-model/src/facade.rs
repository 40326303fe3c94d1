//! Uniform entry point over the supported yield criteria.

use serde::{Deserialize, Serialize};
use ysv_core::{MaterialParameters, VisualizationSettings};
use ysv_geometry::projection::{meridian, pi_plane};
use ysv_geometry::MeridianEnvelope;
use ysv_math::{capped_step, Polyline2};
use ysv_mesh::{drucker_prager_surface, mohr_coulomb_surface, TriangleMesh};

/// Everything a renderer needs for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceViews {
    pub mesh: TriangleMesh,
    pub pi_plane_pressure: f64,
    pub pi_section: Polyline2,
    pub meridian: MeridianEnvelope,
}

/// Dispatches geometry requests to the generator of each model.
///
/// Holds only immutable settings, so one facade can serve any number of
/// parameter sets, from any thread.
#[derive(Debug, Clone, Default)]
pub struct ModelFacade {
    settings: VisualizationSettings,
}

impl ModelFacade {
    /// Build a facade; the settings are sanitized first.
    pub fn new(settings: VisualizationSettings) -> Self {
        Self {
            settings: settings.sanitized(),
        }
    }

    pub fn settings(&self) -> &VisualizationSettings {
        &self.settings
    }

    /// 3D yield surface up to the configured maximum pressure.
    pub fn generate_surface_mesh(&self, params: &MaterialParameters) -> TriangleMesh {
        match params {
            MaterialParameters::MohrCoulomb(p) => mohr_coulomb_surface(p, &self.settings),
            MaterialParameters::DruckerPrager(p) => drucker_prager_surface(p, &self.settings),
        }
    }

    /// Closed π-plane cross-section at mean stress `p0`; empty if the surface
    /// does not reach `p0`.
    pub fn pi_plane_section(&self, params: &MaterialParameters, p0: f64) -> Polyline2 {
        match params {
            MaterialParameters::MohrCoulomb(p) => {
                pi_plane::mohr_coulomb_section(p, p0, &self.settings.tolerance)
            }
            MaterialParameters::DruckerPrager(p) => {
                pi_plane::drucker_prager_section(p, p0, self.settings.pi_circle_points)
            }
        }
    }

    /// Meridian envelope(s) up to `p_max`: compression and extension for
    /// Mohr-Coulomb, a single line for Drucker-Prager.
    ///
    /// The configured step widens so the grid never exceeds
    /// `max_meridian_samples` intervals from the origin to `p_max`.
    pub fn meridian_envelope(&self, params: &MaterialParameters, p_max: f64) -> MeridianEnvelope {
        let step = capped_step(
            p_max,
            self.settings.meridian_step,
            self.settings.max_meridian_samples,
        );
        let tol = &self.settings.tolerance;
        match params {
            MaterialParameters::MohrCoulomb(p) => meridian::mohr_coulomb_meridian(p, p_max, step, tol),
            MaterialParameters::DruckerPrager(p) => {
                meridian::drucker_prager_meridian(p, p_max, step, tol)
            }
        }
    }

    /// Mesh, π-plane section and meridian at the configured pressures.
    pub fn views(&self, params: &MaterialParameters) -> SurfaceViews {
        let p0 = self.settings.pi_plane_pressure;
        let views = SurfaceViews {
            mesh: self.generate_surface_mesh(params),
            pi_plane_pressure: p0,
            pi_section: self.pi_plane_section(params, p0),
            meridian: self.meridian_envelope(params, self.settings.max_pressure),
        };
        tracing::debug!(
            model = %params.kind(),
            triangles = views.mesh.triangle_count(),
            section_points = views.pi_section.len(),
            "Generated surface views"
        );
        views
    }
}
