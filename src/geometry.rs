//! Geometric primitives shared by the quality passes.
//!
//! Small, closed-form helpers over `nalgebra` points and vectors: angles
//! between direction vectors, triangle area, and circumscribed circles and
//! spheres for 3- and 4-point configurations. All of them map degenerate
//! inputs to defined values instead of NaN so the per-face passes never
//! poison their aggregates.

use nalgebra::{Matrix3, Point3, Vector3};

/// Compute the angle in radians between two direction vectors.
///
/// Returns 0 when either vector is (numerically) zero-length. The cosine is
/// clamped to [-1, 1] before `acos`; rounding can push the quotient
/// fractionally outside the interval, where `acos` is undefined.
pub fn angle(d0: &Vector3<f64>, d1: &Vector3<f64>) -> f64 {
    let denorm = d0.norm() * d1.norm();

    if denorm > f64::MIN_POSITIVE {
        let cos = (d0.dot(d1) / denorm).clamp(-1.0, 1.0);
        cos.acos()
    } else {
        0.0
    }
}

/// Compute the area of the triangle (p0, p1, p2).
pub fn triangle_area(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    0.5 * (p1 - p0).cross(&(p2 - p0)).norm()
}

/// Compute the circumradius of the triangle (p0, p1, p2).
///
/// Uses `R = abc / (4A)`. Defined as 0 for degenerate (collinear or
/// zero-area) triangles, which keeps ratio metrics at their defined 0.
pub fn circumradius(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    let a = p1 - p0;
    let b = p2 - p0;
    let cross = a.cross(&b).norm();

    if cross > f64::MIN_POSITIVE {
        a.norm() * b.norm() * (p2 - p1).norm() / (2.0 * cross)
    } else {
        0.0
    }
}

/// Compute the circumcenter of the triangle (p0, p1, p2).
///
/// Returns `None` for degenerate triangles.
pub fn circumcenter(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<Point3<f64>> {
    let a = p1 - p0;
    let b = p2 - p0;
    let n_sq = a.cross(&b).norm_squared();

    if n_sq <= f64::MIN_POSITIVE {
        return None;
    }

    let a_sq = a.norm_squared();
    let b_sq = b.norm_squared();
    let ab = a.dot(&b);

    // Solve |c - p0| = |c - p1| = |c - p2| for c = p0 + alpha*a + beta*b
    let alpha = b_sq * (a_sq - ab) / (2.0 * n_sq);
    let beta = a_sq * (b_sq - ab) / (2.0 * n_sq);

    Some(p0 + a * alpha + b * beta)
}

/// Compute the center of the sphere through four points.
///
/// Solves the perpendicular-bisector system `2(p_i - p0) . c = |p_i|^2 - |p0|^2`
/// for i = 1..3. Returns `None` when the four points are (numerically)
/// coplanar and no unique sphere exists.
pub fn circumcenter4(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
) -> Option<Point3<f64>> {
    let rows = [2.0 * (p1 - p0), 2.0 * (p2 - p0), 2.0 * (p3 - p0)];
    let m = Matrix3::from_rows(&[rows[0].transpose(), rows[1].transpose(), rows[2].transpose()]);

    let p0_sq = p0.coords.norm_squared();
    let rhs = Vector3::new(
        p1.coords.norm_squared() - p0_sq,
        p2.coords.norm_squared() - p0_sq,
        p3.coords.norm_squared() - p0_sq,
    );

    m.lu().solve(&rhs).map(Point3::from)
}

/// Compute the circumradius of the sphere through four points.
///
/// Defined as 0 when the points admit no unique circumsphere.
pub fn circumradius4(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
) -> f64 {
    match circumcenter4(p0, p1, p2, p3) {
        Some(center) => (center - p0).norm(),
        None => 0.0,
    }
}
