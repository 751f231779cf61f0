//! Error types for meshgauge.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

use crate::quality::Indicator;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction and quality passes.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// A face has fewer than three vertices.
    #[error("face {face} has valence {valence}, need at least 3")]
    FaceValence {
        /// The face index.
        face: usize,
        /// The number of vertices the face was given.
        valence: usize,
    },

    /// An edge has more than two incident faces.
    #[error("edge ({v0}, {v1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },

    /// The requested indicator has no formula for this mesh kind.
    ///
    /// Warping is only defined for polygon meshes; taper is an extension
    /// point with no formula on either kind; interpolation quality, mean
    /// ratio, and shape regularity only have closed forms on triangles.
    #[error("{indicator} is not implemented for {mesh_kind} meshes")]
    UnsupportedIndicator {
        /// The indicator that was requested.
        indicator: Indicator,
        /// Human-readable mesh kind ("triangle" or "polygon").
        mesh_kind: &'static str,
    },
}
