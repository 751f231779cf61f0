//! # Meshgauge
//!
//! Per-face geometric quality indicators for triangle and polygon meshes.
//!
//! Meshgauge computes seven quality indicators — warping, aspect ratio,
//! skewness, taper, interpolation quality, mean ratio, and shape regularity —
//! over the faces of a half-edge mesh, and maps each resulting scalar field
//! to colors for visualization.
//!
//! ## Features
//!
//! - **Half-edge data structure**: O(1) adjacency queries with type-safe
//!   indices, carrying triangle and general polygon faces alike
//! - **Closed-form triangle metrics**: inradius, circumradius, and interior
//!   angles straight from the corner geometry
//! - **Randomized enclosing-ball solver**: circumradius and inradius bounds
//!   for faces of arbitrary valence, deterministic under a fixed seed
//! - **Color coding**: per-face scalar fields normalized to a fixed
//!   cold-to-hot gradient
//!
//! ## Quick Start
//!
//! ```
//! use meshgauge::prelude::*;
//! use nalgebra::Point3;
//!
//! // Build a mesh from a face-vertex list
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![
//!     [0, 2, 1], // bottom
//!     [0, 1, 3], // front
//!     [1, 2, 3], // right
//!     [2, 0, 3], // left
//! ];
//! let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
//!
//! // Pick the engine for the mesh kind and run a pass
//! assert!(mesh.is_triangle_mesh());
//! let mut quality = TriangleQuality::new(&mesh);
//! let summary = quality.skewness().unwrap();
//! println!("skewness: min={} max={} avg={}", summary.min, summary.max, summary.average);
//!
//! // Per-face values and colors of the pass stay on the engine
//! let field = quality.field(Indicator::Skewness).unwrap();
//! let colors = quality.face_colors().unwrap();
//! assert_eq!(field.len(), mesh.num_faces());
//! assert_eq!(colors.len(), mesh.num_faces());
//! ```
//!
//! ## Polygon Meshes
//!
//! General polygon meshes use [`PolygonQuality`](quality::PolygonQuality),
//! which bounds each face's circumradius and inradius with a randomized
//! smallest-enclosing-ball solver instead of closed forms:
//!
//! ```
//! use meshgauge::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &[vec![0, 1, 2, 3]]).unwrap();
//!
//! let mut quality = PolygonQuality::with_seed(&mesh, 42);
//! let warp = quality.warping().unwrap();
//! assert!(warp.max.abs() < 1e-9); // planar face
//! ```
//!
//! Indicators without a formula for a mesh kind (warping on triangles, most
//! closed-form metrics on polygons, taper everywhere) report
//! [`MeshError::UnsupportedIndicator`](error::MeshError::UnsupportedIndicator)
//! and leave their per-face field untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod quality;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use meshgauge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, build_from_triangles, Face, FaceId, HalfEdge, HalfEdgeId,
        HalfEdgeMesh, MeshIndex, Vertex, VertexId,
    };
    pub use crate::quality::{
        FaceQuality, Indicator, PolygonQuality, Rgba, Summary, TriangleQuality,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
