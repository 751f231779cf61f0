//! Quality passes for general polygon meshes.
//!
//! Faces of arbitrary valence admit no closed-form inradius or circumradius,
//! so the aspect-ratio pass bounds both with the randomized enclosing-ball
//! solver. Warping and skewness walk the face boundary directly. The
//! remaining indicators have no polygon formula and are unsupported.

use std::f64::consts::PI;

use nalgebra::Vector3;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use smallvec::SmallVec;

use crate::error::{MeshError, Result};
use crate::geometry;
use crate::mesh::{HalfEdgeMesh, MeshIndex};

use super::ball::{face_ball, BallKind};
use super::{scan_faces, FaceQuality, FieldStore, Indicator, Rgba, Summary};

const MESH_KIND: &str = "polygon";

/// Quality indicator engine for general polygon meshes.
///
/// Borrows the mesh for its lifetime and owns the per-face fields and colors
/// its passes produce. The enclosing-ball solver draws pivots from an engine-
/// owned random source; construct with [`with_seed`](PolygonQuality::with_seed)
/// for reproducible runs.
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
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &[vec![0, 1, 2, 3]]).unwrap();
///
/// let mut quality = PolygonQuality::with_seed(&mesh, 7);
/// let warp = quality.warping().unwrap();
/// // A planar face does not deviate from planarity
/// assert!(warp.max.abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct PolygonQuality<'m, I: MeshIndex = u32> {
    mesh: &'m HalfEdgeMesh<I>,
    store: FieldStore,
    rng: SmallRng,
}

impl<'m, I: MeshIndex> PolygonQuality<'m, I> {
    /// Create an engine over a polygon mesh, seeding the pivot source from
    /// system entropy.
    pub fn new(mesh: &'m HalfEdgeMesh<I>) -> Self {
        Self {
            mesh,
            store: FieldStore::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed pivot seed, for reproducible runs.
    pub fn with_seed(mesh: &'m HalfEdgeMesh<I>, seed: u64) -> Self {
        Self {
            mesh,
            store: FieldStore::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn unsupported(&self, indicator: Indicator) -> MeshError {
        MeshError::UnsupportedIndicator {
            indicator,
            mesh_kind: MESH_KIND,
        }
    }
}

impl<I: MeshIndex> FaceQuality for PolygonQuality<'_, I> {
    fn warping(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        scan_faces(mesh, &mut self.store, Indicator::Warping, |f| {
            let edges: SmallVec<[Vector3<f64>; 8]> = mesh
                .face_halfedges(f)
                .map(|he| mesh.edge_vector(he))
                .collect();
            let n = edges.len();

            // Normal versor at each corner, from the incident edge pair
            let normals: SmallVec<[Vector3<f64>; 8]> = (0..n)
                .map(|i| (-edges[i]).cross(&edges[(i + 1) % n]).normalize())
                .collect();

            // Fold the cubed products of all non-adjacent normal pairs
            let mut min_product = f64::MAX;
            for i in 0..n {
                for j in (i + 2)..n {
                    if (j + 1) % n != i {
                        let product = normals[i].dot(&normals[j]);
                        min_product = min_product.min(product * product * product);
                    }
                }
            }

            if min_product == f64::MAX {
                // Valence 3: no non-adjacent pairs, nothing can warp
                0.0
            } else {
                1.0 - min_product
            }
        })
    }

    fn aspect_ratio(&mut self) -> Result<Summary> {
        let mesh = self.mesh;
        let rng = &mut self.rng;
        scan_faces(mesh, &mut self.store, Indicator::AspectRatio, |f| {
            let circumradius = face_ball(mesh, f, BallKind::Circumscribed, rng).radius;
            let inradius = face_ball(mesh, f, BallKind::Inscribed, rng).radius;

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
            let points = mesh.face_points(f);
            let n = points.len();

            // Interior angle at every vertex, walking consecutive triples
            // around the boundary (the last two triples close the cycle)
            let mut min_angle = PI;
            let mut max_angle = 0.0_f64;
            for k in 1..=n {
                let prev = points[k - 1];
                let node = points[k % n];
                let next = points[(k + 1) % n];

                let a = geometry::angle(&(prev - node), &(next - node));
                min_angle = min_angle.min(a);
                max_angle = max_angle.max(a);
            }

            min_angle.sin() / max_angle.sin()
        })
    }

    fn taper(&mut self) -> Result<Summary> {
        Err(self.unsupported(Indicator::Taper))
    }

    fn interpolation_quality(&mut self) -> Result<Summary> {
        Err(self.unsupported(Indicator::InterpolationQuality))
    }

    fn mean_ratio(&mut self) -> Result<Summary> {
        Err(self.unsupported(Indicator::MeanRatio))
    }

    fn shape_regularity(&mut self) -> Result<Summary> {
        Err(self.unsupported(Indicator::ShapeRegularity))
    }

    fn field(&self, indicator: Indicator) -> Option<&[f64]> {
        self.store.field(indicator)
    }

    fn face_colors(&self) -> Option<&[Rgba]> {
        self.store.colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_polygons;
    use nalgebra::Point3;

    fn unit_square_mesh() -> HalfEdgeMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        build_from_polygons(&vertices, &[vec![0, 1, 2, 3]]).unwrap()
    }

    fn quad_cube_mesh() -> HalfEdgeMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let faces = vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![3, 0, 4, 7],
        ];
        build_from_polygons(&vertices, &faces).unwrap()
    }

    #[test]
    fn test_warping_planar_faces_is_zero() {
        let mesh = quad_cube_mesh();
        let mut quality = PolygonQuality::with_seed(&mesh, 1);
        let summary = quality.warping().unwrap();

        assert!(summary.min.abs() < 1e-9);
        assert!(summary.max.abs() < 1e-9);
        assert!(summary.average.abs() < 1e-9);

        // Degenerate range: every face gets the gradient midpoint color
        let midpoint = crate::quality::ColorCoder::new().color_float4(0.5);
        for color in quality.face_colors().unwrap() {
            assert_eq!(*color, midpoint);
        }
    }

    #[test]
    fn test_warping_bent_quad() {
        // Quad with one corner lifted out of plane
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh: HalfEdgeMesh =
            build_from_polygons(&vertices, &[vec![0, 1, 2, 3]]).unwrap();
        let mut quality = PolygonQuality::with_seed(&mesh, 1);
        let summary = quality.warping().unwrap();

        // Two non-adjacent pairs; the smaller cubed product is
        // (n0 . n2)^3 = (1/2)^3, so warping is 1 - 1/8
        assert!((summary.average - 0.875).abs() < 1e-9);
        assert!(summary.min > 0.0);
    }

    #[test]
    fn test_skewness_square_is_one() {
        let mesh = unit_square_mesh();
        let mut quality = PolygonQuality::with_seed(&mesh, 1);
        let summary = quality.skewness().unwrap();
        assert!((summary.average - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_skewness_triangle_face_matches_angles() {
        // The boundary walk also covers valence-3 faces: 90-45-45 triangle
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &[vec![0, 1, 2]]).unwrap();
        let mut quality = PolygonQuality::with_seed(&mesh, 1);
        let summary = quality.skewness().unwrap();

        let expected = 2.0_f64.sqrt() / 2.0;
        assert!((summary.average - expected).abs() < 1e-9);
    }

    #[test]
    fn test_aspect_ratio_values_well_defined() {
        let mesh = quad_cube_mesh();
        let mut quality = PolygonQuality::with_seed(&mesh, 5);
        let summary = quality.aspect_ratio().unwrap();

        assert!(summary.min >= 0.0);
        assert!(summary.max.is_finite());
        assert!(summary.average >= summary.min && summary.average <= summary.max);

        let field = quality.field(Indicator::AspectRatio).unwrap();
        assert_eq!(field.len(), mesh.num_faces());
        for &value in field {
            assert!(value >= summary.min && value <= summary.max);
            assert!(value >= 0.0);
        }
    }

    #[test]
    fn test_aspect_ratio_reproducible_with_seed() {
        let mesh = quad_cube_mesh();

        let a = PolygonQuality::with_seed(&mesh, 123).aspect_ratio().unwrap();
        let b = PolygonQuality::with_seed(&mesh, 123).aspect_ratio().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unsupported_passes_leave_fields_untouched() {
        let mesh = unit_square_mesh();
        let mut quality = PolygonQuality::with_seed(&mesh, 1);

        for indicator in [
            Indicator::Taper,
            Indicator::InterpolationQuality,
            Indicator::MeanRatio,
            Indicator::ShapeRegularity,
        ] {
            assert!(matches!(
                quality.compute(indicator),
                Err(MeshError::UnsupportedIndicator { .. })
            ));
            assert!(quality.field(indicator).is_none());
        }
        assert!(quality.face_colors().is_none());
    }

    #[test]
    fn test_empty_mesh_is_an_error() {
        let mesh = HalfEdgeMesh::<u32>::new();
        let mut quality = PolygonQuality::with_seed(&mesh, 1);
        assert!(matches!(quality.warping(), Err(MeshError::EmptyMesh)));
        assert!(matches!(quality.skewness(), Err(MeshError::EmptyMesh)));
        assert!(matches!(quality.aspect_ratio(), Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_mixed_valence_mesh() {
        // Pentagon sharing an edge with a triangle; every pass covers both
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2, 3, 4], vec![1, 0, 5]];
        let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();

        let mut quality = PolygonQuality::with_seed(&mesh, 2);

        let warp = quality.warping().unwrap();
        let field = quality.field(Indicator::Warping).unwrap();
        assert_eq!(field.len(), 2);
        // Planar pentagon does not warp; the triangle face has no pairs
        assert!(warp.max.abs() < 1e-9);

        // Obtuse corners push sin(min)/sin(max) above 1; the pass only
        // promises finite values and a consistent range
        let skew = quality.skewness().unwrap();
        assert!(skew.min > 0.0);
        assert!(skew.max.is_finite());
        assert!(skew.average >= skew.min && skew.average <= skew.max);
    }
}
