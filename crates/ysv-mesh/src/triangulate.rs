use serde::{Deserialize, Serialize};
use ysv_core::traits::{BoundingBox, Validate};
use ysv_core::{Result, YsvError};
use ysv_math::Point3;

/// Indexed triangle mesh in principal-stress space.
///
/// Faces keep the winding they were generated with; renderers are expected
/// to use flat or double-sided shading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub triangles: Vec<[u32; 3]>,
}

/// Flat per-axis arrays in the layout of a Plotly `mesh3d` trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh3dArrays {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
}

impl TriangleMesh {
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, position: Point3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Append a ring of vertices and return the index of its first vertex.
    pub fn push_ring(&mut self, ring: &[Point3]) -> u32 {
        let start = self.positions.len() as u32;
        self.positions.extend_from_slice(ring);
        start
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Fan-triangulate the `count` consecutive vertices starting at `start`.
    ///
    /// Emits `(start, start+j+1, start+j+2)`, or `(start, start+j+2, start+j+1)`
    /// when `reversed`, for `j` in `0..count-2`.
    pub fn push_fan(&mut self, start: u32, count: usize, reversed: bool) {
        for j in 0..count.saturating_sub(2) as u32 {
            if reversed {
                self.push_triangle(start, start + j + 2, start + j + 1);
            } else {
                self.push_triangle(start, start + j + 1, start + j + 2);
            }
        }
    }

    /// Total area of all faces; degenerate faces contribute zero and faces
    /// with an out-of-range index are skipped.
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .filter_map(|&[a, b, c]| {
                let p0 = *self.positions.get(a as usize)?;
                let p1 = *self.positions.get(b as usize)?;
                let p2 = *self.positions.get(c as usize)?;
                Some(0.5 * (p1 - p0).cross(p2 - p0).length())
            })
            .sum()
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|p| p.is_finite())
    }

    /// Split into flat coordinate and index arrays for a 3D renderer.
    pub fn to_mesh3d(&self) -> Mesh3dArrays {
        Mesh3dArrays {
            x: self.positions.iter().map(|p| p.x).collect(),
            y: self.positions.iter().map(|p| p.y).collect(),
            z: self.positions.iter().map(|p| p.z).collect(),
            i: self.triangles.iter().map(|t| t[0]).collect(),
            j: self.triangles.iter().map(|t| t[1]).collect(),
            k: self.triangles.iter().map(|t| t[2]).collect(),
        }
    }
}

impl Validate for TriangleMesh {
    fn validate(&self) -> Result<()> {
        let n = self.positions.len();
        if let Some((t, tri)) = self
            .triangles
            .iter()
            .enumerate()
            .find(|(_, tri)| tri.iter().any(|&i| i as usize >= n))
        {
            return Err(YsvError::InvalidMesh(format!(
                "triangle {t} {tri:?} indexes past {n} vertices"
            )));
        }
        if let Some(v) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(YsvError::InvalidMesh(format!("vertex {v} is not finite")));
        }
        Ok(())
    }
}

impl BoundingBox for TriangleMesh {
    type Point = Point3;

    fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let (&first, rest) = self.positions.split_first()?;
        Some(
            rest.iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }
}
