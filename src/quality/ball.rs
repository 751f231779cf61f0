//! Smallest enclosing ball of a point set.
//!
//! A randomized incremental (Welzl-style) solver: pick a point at random,
//! solve for the rest, and if the picked point falls outside the resulting
//! ball it must lie on the boundary of the true one, so it moves into the
//! support set and the remainder is solved again. The support set never
//! exceeds 4 points in 3D, and each level either shrinks the candidate set
//! or grows the support, so the recursion terminates in expected linear time.
//!
//! The same recursion runs in an inverted mode ([`BallKind::Inscribed`])
//! where the containment test polarity is flipped: a point must be *excluded*
//! from the ball rather than included. The polygon aspect-ratio pass uses it
//! as its inradius bound, since no exact inradius exists for non-convex or
//! non-planar faces.
//!
//! # Example
//!
//! ```
//! use meshgauge::quality::smallest_enclosing_ball;
//! use nalgebra::Point3;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let points = vec![
//!     Point3::new(-1.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.5, 0.0),
//! ];
//! let mut rng = SmallRng::seed_from_u64(7);
//! let ball = smallest_enclosing_ball(&points, &mut rng);
//! assert!((ball.radius - 1.0).abs() < 1e-9);
//! ```

use nalgebra::Point3;
use rand::Rng;
use smallvec::SmallVec;

use crate::geometry;
use crate::mesh::{FaceId, HalfEdgeMesh, MeshIndex};

/// The support set: points fixed on the boundary of the ball being built.
/// At most 4 points determine a sphere in 3D.
type Support = SmallVec<[Point3<f64>; 4]>;

/// A sphere given by center and radius.
///
/// Transient value produced by the solver; radius 0 denotes a degenerate
/// (point or empty) ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center of the sphere.
    pub center: Point3<f64>,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Ball {
    /// Check whether a point lies inside or on the sphere.
    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (self.center - p).norm() <= self.radius
    }

    /// The ball determined by a support set of 0 to 4 boundary points.
    ///
    /// 0 points give the empty ball, 1 a point, 2 a diameter, 3 the
    /// circumcircle, 4 the circumsphere. Degenerate support (collinear
    /// triples, coplanar quadruples) falls back to radius 0.
    fn from_support(support: &[Point3<f64>]) -> Ball {
        match support {
            [] => Ball {
                center: Point3::origin(),
                radius: 0.0,
            },
            [p] => Ball {
                center: *p,
                radius: 0.0,
            },
            [p, q] => Ball {
                center: Point3::from((p.coords + q.coords) / 2.0),
                radius: (p - q).norm() / 2.0,
            },
            [p, q, r] => match geometry::circumcenter(p, q, r) {
                Some(center) => Ball {
                    center,
                    radius: geometry::circumradius(p, q, r),
                },
                None => Ball {
                    center: *p,
                    radius: 0.0,
                },
            },
            [p, q, r, s] => match geometry::circumcenter4(p, q, r, s) {
                Some(center) => Ball {
                    center,
                    radius: (center - p).norm(),
                },
                None => Ball {
                    center: *p,
                    radius: 0.0,
                },
            },
            _ => unreachable!("support set capped at 4 points"),
        }
    }
}

/// Containment polarity of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    /// Points must lie inside the ball: the true minimal enclosing sphere.
    Circumscribed,
    /// Points must lie outside the ball: the inverted recursion used as the
    /// inradius bound for polygon faces.
    Inscribed,
}

fn solve<R: Rng>(
    mut points: Vec<Point3<f64>>,
    support: Support,
    kind: BallKind,
    rng: &mut R,
) -> Ball {
    if points.is_empty() || support.len() == 4 {
        return Ball::from_support(&support);
    }

    let pick = rng.gen_range(0..points.len());
    let point = points.swap_remove(pick);

    let ball = solve(points.clone(), support.clone(), kind, rng);

    let settled = match kind {
        BallKind::Circumscribed => ball.contains(&point),
        BallKind::Inscribed => !ball.contains(&point),
    };
    if settled {
        return ball;
    }

    // The removed point constrains the boundary: solve again with it fixed
    let mut support = support;
    support.push(point);
    solve(points, support, kind, rng)
}

/// Compute the smallest sphere containing all of `points`.
///
/// The radius is invariant to the point order and to the random pivot
/// sequence; only the solver's path through the recursion changes.
pub fn smallest_enclosing_ball<R: Rng>(points: &[Point3<f64>], rng: &mut R) -> Ball {
    solve(points.to_vec(), Support::new(), BallKind::Circumscribed, rng)
}

/// Run the solver over the vertex positions of a face.
pub fn face_ball<I: MeshIndex, R: Rng>(
    mesh: &HalfEdgeMesh<I>,
    f: FaceId<I>,
    kind: BallKind,
    rng: &mut R,
) -> Ball {
    let points: Vec<Point3<f64>> = mesh.face_vertices(f).map(|v| *mesh.position(v)).collect();
    solve(points, Support::new(), kind, rng)
}
