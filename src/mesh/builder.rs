//! Mesh construction utilities.
//!
//! This module provides functions for building half-edge meshes from
//! face-vertex lists as commonly produced by mesh file loaders and
//! procedural generators. Triangle and general polygon faces are supported.

use std::collections::HashMap;

use log::debug;
use nalgebra::Point3;

use super::halfedge::HalfEdgeMesh;
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// Build a half-edge mesh from vertices and triangle faces.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of triangle faces, each as [v0, v1, v2] indices
///
/// # Returns
/// A half-edge mesh, or an error if the input is invalid.
///
/// # Example
/// ```
/// use meshgauge::mesh::{build_from_triangles, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<HalfEdgeMesh<I>> {
    let face_slices: Vec<&[usize]> = faces.iter().map(|f| f.as_slice()).collect();
    build_faces(vertices, &face_slices, 3)
}

/// Build a half-edge mesh from vertices and polygon faces.
///
/// Faces may have any valence >= 3 and need not all have the same valence.
/// Vertices within each face must be given in a consistent winding order.
///
/// # Example
/// ```
/// use meshgauge::mesh::{build_from_polygons, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2, 3]];
///
/// let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 1);
/// assert!(!mesh.is_triangle_mesh());
/// ```
pub fn build_from_polygons<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[Vec<usize>],
) -> Result<HalfEdgeMesh<I>> {
    let face_slices: Vec<&[usize]> = faces.iter().map(|f| f.as_slice()).collect();
    let avg_valence = if faces.is_empty() {
        3
    } else {
        faces.iter().map(|f| f.len()).sum::<usize>() / faces.len()
    };
    build_faces(vertices, &face_slices, avg_valence)
}

fn build_faces<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[&[usize]],
    halfedges_per_face: usize,
) -> Result<HalfEdgeMesh<I>> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate faces before touching the mesh
    for (fi, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(MeshError::FaceValence {
                face: fi,
                valence: face.len(),
            });
        }
        for (k, &vi) in face.iter().enumerate() {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            if face[k + 1..].contains(&vi) {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
    }

    let mut mesh = HalfEdgeMesh::with_capacity(vertices.len(), faces.len(), halfedges_per_face);

    // Add vertices
    let vertex_ids: Vec<VertexId<I>> = vertices
        .iter()
        .map(|&pos| mesh.add_vertex(pos))
        .collect();

    // Map from directed edge (v0, v1) to half-edge ID
    let mut edge_map: HashMap<(usize, usize), HalfEdgeId<I>> = HashMap::new();

    // First pass: create all half-edges and faces
    for face in faces {
        let n = face.len();
        let first = mesh.num_halfedges();

        // One half-edge per face corner
        let hes: Vec<HalfEdgeId<I>> = (0..n).map(|k| HalfEdgeId::new(first + k)).collect();
        for _ in 0..n {
            mesh.halfedges.push(super::halfedge::HalfEdge::new());
        }

        let face_id = FaceId::<I>::new(mesh.num_faces());
        mesh.faces.push(super::halfedge::Face::new(hes[0]));

        // Link the loop and record directed edges for twin linking
        for k in 0..n {
            let v0 = face[k];
            let v1 = face[(k + 1) % n];

            {
                let he = mesh.halfedge_mut(hes[k]);
                he.origin = vertex_ids[v0];
                he.next = hes[(k + 1) % n];
                he.prev = hes[(k + n - 1) % n];
                he.face = face_id;
            }

            // Will be overwritten for shared vertices
            mesh.vertex_mut(vertex_ids[v0]).halfedge = hes[k];

            if edge_map.insert((v0, v1), hes[k]).is_some() {
                // A directed edge appearing twice means two faces share it
                // with the same winding
                return Err(MeshError::NonManifoldEdge { v0, v1 });
            }
        }
    }

    // Second pass: link twins
    for (&(v0, v1), &he) in &edge_map {
        if let Some(&twin) = edge_map.get(&(v1, v0)) {
            mesh.halfedge_mut(he).twin = twin;
        } else {
            // Boundary edge - create boundary half-edge
            let boundary_he = HalfEdgeId::<I>::new(mesh.num_halfedges());
            mesh.halfedges.push(super::halfedge::HalfEdge::new());

            mesh.halfedge_mut(he).twin = boundary_he;
            {
                let bhe = mesh.halfedge_mut(boundary_he);
                bhe.origin = vertex_ids[v1];
                bhe.twin = he;
                // Face is invalid (boundary)
            }
        }
    }

    // Third pass: link boundary half-edges into loops
    link_boundary_loops(&mut mesh);

    // Fourth pass: ensure boundary vertices point to boundary half-edges
    fix_boundary_vertex_halfedges(&mut mesh);

    debug!(
        "built mesh: {} vertices, {} faces, {} half-edges",
        mesh.num_vertices(),
        mesh.num_faces(),
        mesh.num_halfedges()
    );

    Ok(mesh)
}

/// Link boundary half-edges into proper loops.
fn link_boundary_loops<I: MeshIndex>(mesh: &mut HalfEdgeMesh<I>) {
    // Find all boundary half-edges
    let boundary_hes: Vec<HalfEdgeId<I>> = mesh
        .halfedge_ids()
        .filter(|&he| mesh.is_boundary_halfedge(he))
        .collect();

    // Group by origin vertex for quick lookup
    let mut outgoing: HashMap<usize, HalfEdgeId<I>> = HashMap::new();
    for he in &boundary_hes {
        let origin = mesh.origin(*he).index();
        outgoing.insert(origin, *he);
    }

    // Link next/prev for boundary half-edges
    for &he in &boundary_hes {
        // The next boundary half-edge starts where this one ends
        let dest = mesh.dest(he).index();
        if let Some(&next_he) = outgoing.get(&dest) {
            mesh.halfedge_mut(he).next = next_he;
            mesh.halfedge_mut(next_he).prev = he;
        }
    }
}

/// Ensure boundary vertices point to a boundary half-edge.
fn fix_boundary_vertex_halfedges<I: MeshIndex>(mesh: &mut HalfEdgeMesh<I>) {
    for vid in mesh.vertex_ids().collect::<Vec<_>>() {
        let start_he = mesh.vertex(vid).halfedge;
        if !start_he.is_valid() {
            continue;
        }

        // Walk around the vertex to find a boundary half-edge
        // Uses the same iteration pattern as VertexHalfEdgeIter: twin -> next
        let mut he = start_he;
        loop {
            if mesh.is_boundary_halfedge(he) {
                mesh.vertex_mut(vid).halfedge = he;
                break;
            }
            he = mesh.next(mesh.twin(he));
            if he == start_he {
                break;
            }
        }
    }
}
