//! Serializable snapshot of one parameter set and its derived geometry.

use serde::{Deserialize, Serialize};
use ysv_core::{MaterialParameters, Result, VisualizationSettings};
use ysv_geometry::MeridianEnvelope;
use ysv_math::Polyline2;
use ysv_mesh::Mesh3dArrays;

use crate::facade::ModelFacade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub params: MaterialParameters,
    pub settings: VisualizationSettings,
    pub mesh: Mesh3dArrays,
    pub pi_plane_pressure: f64,
    pub pi_section: Polyline2,
    pub meridian: MeridianEnvelope,
}

impl Snapshot {
    pub fn capture(facade: &ModelFacade, params: &MaterialParameters) -> Self {
        let views = facade.views(params);
        Self {
            params: *params,
            settings: facade.settings().clone(),
            mesh: views.mesh.to_mesh3d(),
            pi_plane_pressure: views.pi_plane_pressure,
            pi_section: views.pi_section,
            meridian: views.meridian,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Meridian curves as CSV: one row per sampled pressure, one column per
    /// branch, empty cells where a branch has no envelope.
    pub fn meridian_csv(&self) -> String {
        let pressures = &self.meridian.pressures;
        let columns: Vec<Vec<f64>> = self
            .meridian
            .curves
            .iter()
            .map(|c| c.gapped(pressures))
            .collect();

        let mut csv = String::from("p");
        for curve in &self.meridian.curves {
            csv.push(',');
            csv.push_str(curve.branch.label());
        }
        csv.push('\n');

        for (row, p) in pressures.iter().enumerate() {
            csv.push_str(&p.to_string());
            for column in &columns {
                csv.push(',');
                let q = column[row];
                if q.is_finite() {
                    csv.push_str(&q.to_string());
                }
            }
            csv.push('\n');
        }
        csv
    }
}
