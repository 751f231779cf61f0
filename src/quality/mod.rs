//! Per-face quality indicators.
//!
//! This module computes geometric quality indicators over the faces of a
//! mesh and maps each resulting scalar field to colors for visualization.
//! Seven indicators are defined; not every indicator has a formula on every
//! mesh kind, and passes without one report
//! [`MeshError::UnsupportedIndicator`](crate::error::MeshError::UnsupportedIndicator).
//!
//! Two engines implement the [`FaceQuality`] interface:
//!
//! - [`TriangleQuality`] for pure triangle meshes, using closed-form
//!   inradius/circumradius formulas
//! - [`PolygonQuality`] for general polygon meshes, approximating both radii
//!   with the randomized enclosing-ball solver in [`ball`]
//!
//! The caller picks the engine for its mesh kind (see
//! [`HalfEdgeMesh::is_triangle_mesh`](crate::mesh::HalfEdgeMesh::is_triangle_mesh)).
//! Each pass walks every face once, stores the per-face value in a field
//! owned by the engine, folds min/max/average into a [`Summary`], and
//! refreshes the per-face colors from the final range.
//!
//! # Example
//!
//! ```
//! use meshgauge::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
//!
//! let mut quality = TriangleQuality::new(&mesh);
//! let summary = quality.aspect_ratio().unwrap();
//! assert!(summary.min > 0.0 && summary.max <= 0.5);
//!
//! // The per-face field and colors of the pass are kept on the engine
//! let field = quality.field(Indicator::AspectRatio).unwrap();
//! assert_eq!(field.len(), mesh.num_faces());
//! ```

pub mod ball;
mod colors;
mod polygons;
mod triangles;

pub use ball::{face_ball, smallest_enclosing_ball, Ball, BallKind};
pub use colors::{ColorCoder, Rgba};
pub use polygons::PolygonQuality;
pub use triangles::TriangleQuality;

use std::fmt;

use log::debug;

use crate::error::{MeshError, Result};
use crate::mesh::{FaceId, HalfEdgeMesh, MeshIndex};

/// The per-face quality indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Deviation of a face from planarity (polygon meshes).
    Warping,
    /// Inradius over circumradius.
    AspectRatio,
    /// Ratio of the sines of the extreme interior angles.
    Skewness,
    /// Extension point; no formula on either mesh kind.
    Taper,
    /// Area over edge-length product (triangle meshes).
    InterpolationQuality,
    /// Normalized squared-edge-length ratio (triangle meshes).
    MeanRatio,
    /// Area over summed squared edge lengths (triangle meshes).
    ShapeRegularity,
}

impl Indicator {
    /// All indicators, in display order.
    pub const ALL: [Indicator; 7] = [
        Indicator::Warping,
        Indicator::AspectRatio,
        Indicator::Skewness,
        Indicator::Taper,
        Indicator::InterpolationQuality,
        Indicator::MeanRatio,
        Indicator::ShapeRegularity,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Indicator::Warping => "Warping",
            Indicator::AspectRatio => "Aspect ratio",
            Indicator::Skewness => "Skewness",
            Indicator::Taper => "Taper",
            Indicator::InterpolationQuality => "Interpolation quality",
            Indicator::MeanRatio => "Mean ratio",
            Indicator::ShapeRegularity => "Shape regularity",
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics of one quality pass over all faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Smallest per-face value of the pass.
    pub min: f64,
    /// Largest per-face value of the pass.
    pub max: f64,
    /// Arithmetic mean over all faces of the pass.
    pub average: f64,
}

/// Quality passes shared by the triangle and polygon engines.
///
/// The seven indicator methods each run one pass over the mesh's faces and
/// return the pass [`Summary`]. Indicators without a formula for the
/// engine's mesh kind return
/// [`MeshError::UnsupportedIndicator`](crate::error::MeshError::UnsupportedIndicator)
/// and leave their field untouched.
pub trait FaceQuality {
    /// Deviation from planarity per face.
    fn warping(&mut self) -> Result<Summary>;

    /// Inradius over circumradius per face.
    fn aspect_ratio(&mut self) -> Result<Summary>;

    /// `sin(min angle) / sin(max angle)` over the interior angles per face.
    fn skewness(&mut self) -> Result<Summary>;

    /// Taper per face. An extension point: currently unsupported on both
    /// mesh kinds.
    fn taper(&mut self) -> Result<Summary>;

    /// Interpolation quality per face.
    fn interpolation_quality(&mut self) -> Result<Summary>;

    /// Mean ratio per face.
    fn mean_ratio(&mut self) -> Result<Summary>;

    /// Shape regularity per face.
    fn shape_regularity(&mut self) -> Result<Summary>;

    /// Run the pass for the given indicator.
    fn compute(&mut self, indicator: Indicator) -> Result<Summary> {
        match indicator {
            Indicator::Warping => self.warping(),
            Indicator::AspectRatio => self.aspect_ratio(),
            Indicator::Skewness => self.skewness(),
            Indicator::Taper => self.taper(),
            Indicator::InterpolationQuality => self.interpolation_quality(),
            Indicator::MeanRatio => self.mean_ratio(),
            Indicator::ShapeRegularity => self.shape_regularity(),
        }
    }

    /// Per-face values of the last completed pass for `indicator`, indexed
    /// by [`FaceId::index`](crate::mesh::FaceId::index).
    ///
    /// `None` until a pass for that indicator has completed.
    fn field(&self, indicator: Indicator) -> Option<&[f64]>;

    /// Per-face colors of the most recently completed pass.
    ///
    /// `None` until any pass has completed.
    fn face_colors(&self) -> Option<&[Rgba]>;
}

/// Field and color storage shared by the engines.
///
/// One scalar field per indicator plus one color table, all indexed by face.
/// Fields stay empty until their pass completes, so an unsupported or failed
/// pass is observable as an absent field.
#[derive(Debug)]
pub(crate) struct FieldStore {
    fields: [Vec<f64>; 7],
    colors: Vec<Rgba>,
    coder: ColorCoder,
}

impl FieldStore {
    pub(crate) fn new() -> Self {
        Self {
            fields: Default::default(),
            colors: Vec::new(),
            coder: ColorCoder::new(),
        }
    }

    pub(crate) fn field(&self, indicator: Indicator) -> Option<&[f64]> {
        let field = &self.fields[indicator.slot()];
        if field.is_empty() {
            None
        } else {
            Some(field.as_slice())
        }
    }

    pub(crate) fn colors(&self) -> Option<&[Rgba]> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors.as_slice())
        }
    }

    /// Refresh the per-face colors from a completed field and its range.
    ///
    /// When the range is empty (`max == min`) every face maps to the
    /// gradient midpoint.
    fn color_pass(&mut self, indicator: Indicator, min: f64, max: f64) {
        let Self { fields, colors, coder } = self;
        let field = &fields[indicator.slot()];
        let range = max - min;

        colors.clear();
        colors.reserve(field.len());
        for &value in field.iter() {
            let t = if range > 0.0 { (value - min) / range } else { 0.5 };
            colors.push(coder.color_float4(t));
        }
    }
}

/// Run one aggregation pass: evaluate `per_face` on every face, store the
/// values into the indicator's field, fold min/max/average, and refresh the
/// colors from the final range.
pub(crate) fn scan_faces<I, F>(
    mesh: &HalfEdgeMesh<I>,
    store: &mut FieldStore,
    indicator: Indicator,
    mut per_face: F,
) -> Result<Summary>
where
    I: MeshIndex,
    F: FnMut(FaceId<I>) -> f64,
{
    let num_faces = mesh.num_faces();
    if num_faces == 0 {
        return Err(MeshError::EmptyMesh);
    }

    let mut min = f64::MAX;
    let mut max = 0.0_f64;
    let mut sum = 0.0_f64;

    let mut values = Vec::with_capacity(num_faces);
    for f in mesh.face_ids() {
        let value = per_face(f);
        values.push(value);
        sum += value;

        if value > max {
            max = value;
        }
        if value < min {
            min = value;
        }
    }

    store.fields[indicator.slot()] = values;

    let average = sum / num_faces as f64;
    store.color_pass(indicator, min, max);

    debug!(
        "{}: {} faces, min={:.6} max={:.6} average={:.6}",
        indicator, num_faces, min, max, average
    );

    Ok(Summary { min, max, average })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_names() {
        assert_eq!(Indicator::Warping.to_string(), "Warping");
        assert_eq!(Indicator::AspectRatio.to_string(), "Aspect ratio");
        assert_eq!(
            Indicator::InterpolationQuality.to_string(),
            "Interpolation quality"
        );
        assert_eq!(Indicator::ShapeRegularity.to_string(), "Shape regularity");
    }

    #[test]
    fn test_indicator_slots_unique() {
        let mut seen = [false; 7];
        for indicator in Indicator::ALL {
            assert!(!seen[indicator.slot()]);
            seen[indicator.slot()] = true;
        }
    }

    #[test]
    fn test_empty_store() {
        let store = FieldStore::new();
        for indicator in Indicator::ALL {
            assert!(store.field(indicator).is_none());
        }
        assert!(store.colors().is_none());
    }

    #[test]
    fn test_color_pass_degenerate_range() {
        let mut store = FieldStore::new();
        store.fields[Indicator::Skewness.slot()] = vec![1.0; 4];
        store.color_pass(Indicator::Skewness, 1.0, 1.0);

        let midpoint = ColorCoder::new().color_float4(0.5);
        for color in store.colors().unwrap() {
            assert_eq!(*color, midpoint);
        }
    }
}
