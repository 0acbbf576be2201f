//! Directed 3D segment with clamped-projection queries.

use std::fmt;

use nalgebra::{Point3, Vector3};

use super::cfg::MIN_NORM;
use super::error::GeomError;
use super::plane::Plane;

/// Finite segment from `first` to `second`.
///
/// Invariants:
/// - Direction is `second - first`; distance queries ignore the orientation.
/// - `first == second` is allowed (degenerate segment).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub first: Point3<f64>,
    pub second: Point3<f64>,
}

/// Where the orthogonal projection of a query point falls along the segment.
enum Projection {
    BeforeFirst,
    AfterSecond,
    /// Interior parameter `t ∈ (0, 1)`.
    Inside(f64),
}

impl Segment {
    #[inline]
    pub fn new(first: Point3<f64>, second: Point3<f64>) -> Self {
        Self { first, second }
    }

    /// Classify the projection of `p` using `cos_wv = w·v` and `cos_vv = v·v`.
    ///
    /// Ties go to the endpoints: `cos_wv <= 0` is `BeforeFirst`, `cos_vv <= cos_wv`
    /// is `AfterSecond`. A degenerate segment always lands in one of the two.
    fn project(&self, p: Point3<f64>) -> Projection {
        let v = self.second - self.first;
        let w = p - self.first;
        let cos_wv = w.dot(&v);
        let cos_vv = v.dot(&v);
        if cos_wv <= 0.0 {
            Projection::BeforeFirst
        } else if cos_vv <= cos_wv {
            Projection::AfterSecond
        } else {
            Projection::Inside(cos_wv / cos_vv)
        }
    }

    /// Closest point of the segment to `p`.
    pub fn closest_point(&self, p: Point3<f64>) -> Point3<f64> {
        match self.project(p) {
            Projection::BeforeFirst => self.first,
            Projection::AfterSecond => self.second,
            Projection::Inside(b) => self.first + (self.second - self.first) * b,
        }
    }

    /// Euclidean distance from `p` to the segment (not to its supporting line).
    pub fn dist_to_point(&self, p: Point3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    /// True iff the projection of `p` lies strictly inside the open segment.
    ///
    /// This tests the projection parameter only; `p` itself may be far off the line.
    pub fn is_in_between(&self, p: Point3<f64>) -> bool {
        matches!(self.project(p), Projection::Inside(_))
    }

    /// `second - first` split into its largest absolute component and the vector
    /// divided by it, so squaring the components cannot underflow.
    fn scaled_delta(&self) -> (f64, Vector3<f64>) {
        let v = self.second - self.first;
        let scale = v.amax();
        if scale > MIN_NORM {
            (scale, v / scale)
        } else {
            (0.0, Vector3::zeros())
        }
    }

    /// Unit direction `first → second`, or the zero vector for a degenerate segment.
    pub fn dir(&self) -> Vector3<f64> {
        let (_, v) = self.scaled_delta();
        v.try_normalize(MIN_NORM).unwrap_or_else(Vector3::zeros)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        let (scale, v) = self.scaled_delta();
        scale * v.norm()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Two planes through `first` whose intersection is the supporting line.
    ///
    /// Candidate normals zero one coordinate of `d = dir()` at a time:
    /// `n0 = (-dy, dx, 0)`, `n1 = (-dz, 0, dx)`, `n2 = (0, -dz, dy)`. Zero-length
    /// candidates are dropped and the first two survivors (in that order) are kept.
    /// For any non-zero `d` at least two survive.
    pub fn to_planes(&self) -> Result<[Plane; 2], GeomError> {
        let d = self.dir();
        let candidates = [
            Vector3::new(-d.y, d.x, 0.0),
            Vector3::new(-d.z, 0.0, d.x),
            Vector3::new(0.0, -d.z, d.y),
        ];
        let mut normals = candidates.into_iter().filter(|n| n.norm() > MIN_NORM);
        match (normals.next(), normals.next()) {
            (Some(n_a), Some(n_b)) => Ok([
                Plane::new(self.first, n_a)?,
                Plane::new(self.first, n_b)?,
            ]),
            _ => Err(GeomError::degenerate("segment direction")),
        }
    }
}

/// Tab-separated endpoint dump: `"x0 y0 z0\tx1 y1 z1\n"`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.first, &self.second);
        writeln!(f, "{} {} {}\t{} {} {}", a.x, a.y, a.z, b.x, b.y, b.z)
    }
}
