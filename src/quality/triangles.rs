//! Quality passes for pure triangle meshes.
//!
//! Every metric here has a closed form on a triangle, so no approximation is
//! involved: inradius is area over semiperimeter, circumradius comes from
//! the edge-length product, and the interior angles come straight from the
//! corner vectors. Warping needs non-adjacent edge pairs and taper has no
//! formula, so both are unsupported on this engine.

use crate::error::{MeshError, Result};
use crate::geometry;
use crate::mesh::{HalfEdgeMesh, MeshIndex};

use super::{scan_faces, FaceQuality, FieldStore, Indicator, Rgba, Summary};

const MESH_KIND: &str = "triangle";

/// Quality indicator engine for triangle meshes.
///
/// Borrows the mesh for its lifetime and owns the per-face fields and colors
/// its passes produce; dropping the engine drops them.
///
/// # Example
///
/// ```
/// use meshgauge::prelude::*;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
///
/// let mut quality = TriangleQuality::new(&mesh);
/// let skew = quality.skewness().unwrap();
/// assert!(skew.min > 0.0 && skew.max <= 1.0);
/// assert!(quality.warping().is_err());
/// ```
#[derive(Debug)]
pub struct TriangleQuality<'m, I: MeshIndex = u32> {
    mesh: &'m HalfEdgeMesh<I>,
    store: FieldStore,
}

impl<'m, I: MeshIndex> TriangleQuality<'m, I> {
    /// Create an engine over a triangle mesh.
    ///
    /// The mesh must consist of valence-3 faces only; use
    /// [`PolygonQuality`](super::PolygonQuality) for anything else.
    pub fn new(mesh: &'m HalfEdgeMesh<I>) -> Self {
        debug_assert!(mesh.is_triangle_mesh(), "mesh has non-triangle faces");
        Self {
            mesh,
            store: FieldStore::new(),
        }
    }

    fn unsupported(&self, indicator: Indicator) -> MeshError {
        MeshError::UnsupportedIndicator {
            indicator,
            mesh_kind: MESH_KIND,
        }
    }
}

impl<I: MeshIndex> FaceQuality for TriangleQuality<'_, I> {
    /// A triangle has no non-adjacent edge pairs, so warping is undefined.
    fn warping(&mut self) -> Result<Summary> {
        Err(self.unsupported(Indicator::Warping))
    }

    fn aspect_ratio(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        scan_faces(mesh, &mut self.store, Indicator::AspectRatio, |f| {
            let [v0, v1, v2] = mesh.face_positions(f);
            let e1 = (v0 - v1).norm();
            let e2 = (v1 - v2).norm();
            let e3 = (v2 - v0).norm();
            let area = geometry::triangle_area(&v0, &v1, &v2);

            let semi_perimeter = (e1 + e2 + e3) / 2.0;
            let inradius = area / semi_perimeter;
            let circumradius = geometry::circumradius(&v0, &v1, &v2);

            if circumradius > f64::MIN_POSITIVE {
                inradius / circumradius
            } else {
                0.0
            }
        })
    }

    fn skewness(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        scan_faces(mesh, &mut self.store, Indicator::Skewness, |f| {
            let [v0, v1, v2] = mesh.face_positions(f);
            let a0 = geometry::angle(&(v1 - v0), &(v2 - v0));
            let a1 = geometry::angle(&(v0 - v1), &(v2 - v1));
            let a2 = geometry::angle(&(v0 - v2), &(v1 - v2));

            let sin_min = a0.min(a1).min(a2).sin();
            let sin_max = a0.max(a1).max(a2).sin();
            sin_min / sin_max
        })
    }

    fn taper(&mut self) -> Result<Summary> {
        Err(self.unsupported(Indicator::Taper))
    }

    fn interpolation_quality(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        scan_faces(mesh, &mut self.store, Indicator::InterpolationQuality, |f| {
            let [v0, v1, v2] = mesh.face_positions(f);
            let e1 = (v0 - v1).norm();
            let e2 = (v1 - v2).norm();
            let e3 = (v2 - v0).norm();
            let area = geometry::triangle_area(&v0, &v1, &v2);

            area / (e1 * e2 * e3).powf(2.0 / 3.0)
        })
    }

    fn mean_ratio(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        scan_faces(mesh, &mut self.store, Indicator::MeanRatio, |f| {
            let [v0, v1, v2] = mesh.face_positions(f);
            let e1 = (v0 - v1).norm_squared();
            let e2 = (v1 - v2).norm_squared();
            let e3 = (v2 - v0).norm_squared();

            3.0 * (e1 * e2 * e3).cbrt() / (e1 + e2 + e3)
        })
    }

    fn shape_regularity(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        scan_faces(mesh, &mut self.store, Indicator::ShapeRegularity, |f| {
            let [v0, v1, v2] = mesh.face_positions(f);
            let e1 = (v0 - v1).norm_squared();
            let e2 = (v1 - v2).norm_squared();
            let e3 = (v2 - v0).norm_squared();
            let area = geometry::triangle_area(&v0, &v1, &v2);

            3.0 * area / (e1 + e2 + e3)
        })
    }

    fn field(&self, indicator: Indicator) -> Option<&[f64]> {
        self.store.field(indicator)
    }

    fn face_colors(&self) -> Option<&[Rgba]> {
        self.store.colors()
    }
}
