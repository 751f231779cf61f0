//! Core mesh data structures.
//!
//! This module provides the half-edge mesh representation and related types
//! for representing triangle and polygon meshes.
//!
//! # Overview
//!
//! The primary type is [`HalfEdgeMesh`], which represents a mesh using a
//! half-edge (doubly-connected edge list) data structure. Faces are cyclic
//! half-edge loops of valence 3 or more, so triangle meshes and general
//! polygon meshes share one representation; O(1) adjacency queries make it
//! efficient for per-face passes.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`FaceId`] - Identifies a face
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait),
//! allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Construction
//!
//! Meshes are constructed from face-vertex lists:
//!
//! ```
//! use meshgauge::mesh::{HalfEdgeMesh, build_from_polygons};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2, 3]];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
//! assert_eq!(mesh.face_valence(meshgauge::mesh::FaceId::new(0)), 4);
//! ```

mod builder;
mod halfedge;
mod index;

pub use builder::{build_from_polygons, build_from_triangles};
pub use halfedge::{Face, FacePoints, HalfEdge, HalfEdgeMesh, Vertex};
pub use index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
