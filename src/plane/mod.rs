//! # Planes
//!
//! A [`Plane`] is a point plus a unit normal. This module also holds the
//! constructions that need both lines and planes: the shortest connection
//! between two skew lines, the conventional "intersection" of two spatial
//! lines (midpoint of that connection), and projection of a point onto a
//! spatial line.
//!
//! ```rust
//! use detgeom::coordinates::Direction3;
//! use detgeom::lines::Line3;
//! use detgeom::plane::Plane;
//!
//! let floor = Plane::through_origin(Direction3::from_components(0.0, 0.0, 1.0));
//! let drop = Line3::from_components(0.0, 0.0, 5.0, 0.0, 0.0, -1.0);
//! let hit = floor.intersection(&drop);
//! assert!(hit.r() < 1e-15);
//! ```

use std::fmt;

use crate::constants::PARALLEL_TOLERANCE;
use crate::coordinates::{Components3, Direction3, Vector3};
use crate::lines::{write_braced, Line3, LineSegment3};
use crate::{not_implemented, GeometryError, Result};

/// Infinite plane through `point` with unit `normal`
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Vector3,
    normal: Direction3,
}

impl Plane {
    pub fn new(point: Vector3, normal: Direction3) -> Self {
        Plane { point, normal }
    }

    /// Plane through `point` containing the directions `d1` and `d2`
    pub fn from_directions(point: Vector3, d1: &Direction3, d2: &Direction3) -> Self {
        Self::new(point, d1.cross_direction(d2))
    }

    pub fn through_origin(normal: Direction3) -> Self {
        Self::new(Vector3::zero(), normal)
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    pub fn normal(&self) -> Direction3 {
        self.normal
    }

    pub fn set_point(&mut self, point: Vector3) -> &mut Self {
        self.point = point;
        self
    }

    pub fn set_normal(&mut self, normal: Direction3) -> &mut Self {
        self.normal = normal;
        self
    }

    /// True when `v` lies in the plane's orientation, `|n · v| < 10ε`
    pub fn is_parallel(&self, v: &impl Components3) -> bool {
        self.is_parallel_within(v, PARALLEL_TOLERANCE)
    }

    pub fn is_parallel_within(&self, v: &impl Components3, tol: f64) -> bool {
        self.normal.dot_prod(v).abs() < tol
    }

    pub fn is_parallel_to_line(&self, l: &Line3) -> bool {
        self.is_parallel(&l.direction())
    }

    /// True when the normals are parallel or anti-parallel
    pub fn is_parallel_to_plane(&self, p: &Plane) -> bool {
        self.normal.is_parallel(&p.normal) || self.normal.is_parallel(&(-p.normal))
    }

    pub fn intersects_line(&self, l: &Line3) -> bool {
        !self.is_parallel_to_line(l)
    }

    pub fn intersects_plane(&self, p: &Plane) -> bool {
        !self.is_parallel_to_plane(p)
    }

    /// Point where `l` crosses the plane
    ///
    /// Solves `t = n · (p − l.point) / (n · l.direction)`. Components are
    /// infinite or NaN when the line is parallel to the plane; check
    /// [`Plane::intersects_line`] first when that matters.
    pub fn intersection(&self, l: &Line3) -> Vector3 {
        let d = l.direction();
        let t = self.normal.dot_prod(&(self.point - l.point())) / self.normal.dot_prod(&d);
        let lp = l.point();
        Vector3::new(
            t.mul_add(d.x(), lp.x()),
            t.mul_add(d.y(), lp.y()),
            t.mul_add(d.z(), lp.z()),
        )
    }

    /// Line along which two planes meet
    ///
    /// Its direction is `n1 × n2`. The anchor point comes from a helper line
    /// in this plane, perpendicular to the result, crossed with `p`.
    pub fn intersection_plane(&self, p: &Plane) -> Line3 {
        let direction = self.normal.cross_direction(&p.normal);
        let toward = Line3::new(self.point, direction.cross_direction(&self.normal));
        Line3::new(p.intersection(&toward), direction)
    }

    /// Foot of the perpendicular dropped from `v` onto the plane
    pub fn projection(&self, v: &impl Components3) -> Vector3 {
        let v = Vector3::new(v.x(), v.y(), v.z());
        let height = self.normal.dot_prod(&(v - self.point));
        let n = self.normal;
        Vector3::new(
            (-height).mul_add(n.x(), v.x()),
            (-height).mul_add(n.y(), v.y()),
            (-height).mul_add(n.z(), v.z()),
        )
    }

    /// Shadow of `l` on the plane
    pub fn projection_line(&self, l: &Line3) -> Line3 {
        let in_plane = l.direction().cross_direction(&self.normal);
        let direction = self.normal.cross_direction(&in_plane);
        Line3::new(self.intersection(l), direction)
    }

    pub fn intersects_segment(&self, _s: &LineSegment3) -> Result<bool> {
        not_implemented("Plane::intersects_segment")
    }

    pub fn intersection_segment(&self, _s: &LineSegment3) -> Result<Vector3> {
        not_implemented("Plane::intersection_segment")
    }

    pub fn projection_segment(&self, _s: &LineSegment3) -> Result<LineSegment3> {
        not_implemented("Plane::projection_segment")
    }
}

impl Default for Plane {
    /// The xy plane
    fn default() -> Self {
        Self::through_origin(Direction3::default())
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, "plane", &[&self.point, &self.normal])
    }
}

/// Shortest segment joining two skew lines
///
/// The segment starts on `l2` and runs along `±(l1.direction × l2.direction)`
/// for the distance of closest approach, so [`LineSegment3::end_point`]
/// lands on `l1` and the length is never negative. Parallel lines have no
/// unique connection and give [`GeometryError::ParallelLines`].
pub fn shortest_connection(l1: &Line3, l2: &Line3) -> Result<LineSegment3> {
    if l1.is_parallel(l2) {
        log::debug!("no shortest connection between {} and {}", l1, l2);
        return Err(GeometryError::ParallelLines(format!("{} and {}", l1, l2)));
    }
    let axb = l1.direction().cross_direction(&l2.direction());
    // l1 extended into a plane that also contains the common perpendicular
    let sheet = Plane::from_directions(l1.point(), &l1.direction(), &axb);
    let start = sheet.intersection(l2);
    let c = l2.point() - l1.point();
    let length = -c.dot_prod(&axb);
    if length < 0.0 {
        Ok(LineSegment3::new(start, -axb, -length))
    } else {
        Ok(LineSegment3::new(start, axb, length))
    }
}

/// Meeting point of two spatial lines, taken as the midpoint of their
/// shortest connection
pub fn intersection(l1: &Line3, l2: &Line3) -> Result<Vector3> {
    Ok(shortest_connection(l1, l2)?.mid_point())
}

/// Foot of the perpendicular dropped from `v` onto `l`
///
/// Built as the crossing of `l` with the plane through `v` normal to `l`.
pub fn projection(v: &impl Components3, l: &Line3) -> Vector3 {
    let through = Vector3::new(v.x(), v.y(), v.z());
    Plane::new(through, l.direction()).intersection(l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_vec_eq(a: &Vector3, b: &Vector3, eps: f64) {
        assert_relative_eq!(a.x(), b.x(), epsilon = eps);
        assert_relative_eq!(a.y(), b.y(), epsilon = eps);
        assert_relative_eq!(a.z(), b.z(), epsilon = eps);
    }

    #[test]
    fn test_vertical_line_hits_floor() {
        let floor = Plane::new(Vector3::zero(), Direction3::from_components(0.0, 0.0, 1.0));
        let l = Line3::from_components(0.0, 0.0, 5.0, 0.0, 0.0, -1.0);
        let p = floor.intersection(&l);
        assert_vec_eq(&p, &Vector3::zero(), 1e-15);
        assert!(floor.intersects_line(&l));
        assert_vec_eq(&l.intersection_plane(&floor), &p, 1e-15);
    }

    #[test]
    fn test_parallel_line_does_not_intersect() {
        let floor = Plane::default();
        let l = Line3::from_components(0.0, 0.0, 1.0, 1.0, 1.0, 0.0);
        assert!(floor.is_parallel_to_line(&l));
        assert!(!floor.intersects_line(&l));
        // n · d is only rounding noise, so the crossing runs off to infinity
        assert!(floor.intersection(&l).r() > 1e12);
    }

    #[test]
    fn test_is_parallel_uses_magnitude() {
        let floor = Plane::default();
        assert!(floor.is_parallel(&Vector3::new(1.0, 0.0, 0.0)));
        assert!(!floor.is_parallel(&Vector3::new(0.0, 0.0, -1.0)));
        assert!(!floor.is_parallel(&Vector3::new(1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_from_directions() {
        let x = Direction3::from_components(1.0, 0.0, 0.0);
        let y = Direction3::from_components(0.0, 1.0, 0.0);
        let p = Plane::from_directions(Vector3::new(0.0, 0.0, 2.0), &x, &y);
        assert_eq!(p.normal().theta(), 0.0);
        assert!(p.is_parallel(&x));
        assert!(p.is_parallel(&y));
    }

    #[test]
    fn test_plane_plane_intersection() {
        let floor = Plane::default();
        let wall = Plane::new(
            Vector3::new(3.0, 0.0, 0.0),
            Direction3::from_components(1.0, 0.0, 0.0),
        );
        assert!(floor.intersects_plane(&wall));
        let seam = floor.intersection_plane(&wall);
        // the seam is the line x = 3, z = 0
        assert_relative_eq!(seam.point().x(), 3.0, epsilon = 1e-14);
        assert_relative_eq!(seam.point().z(), 0.0, epsilon = 1e-14);
        assert_relative_eq!(seam.direction().x().abs(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(seam.direction().y().abs(), 1.0, epsilon = 1e-15);

        let ceiling = Plane::new(Vector3::new(0.0, 0.0, 4.0), -Direction3::default());
        assert!(floor.is_parallel_to_plane(&ceiling));
        assert!(!floor.intersects_plane(&ceiling));
    }

    #[test]
    fn test_point_projection() {
        let p = Plane::new(Vector3::new(0.0, 0.0, 1.0), Direction3::default());
        let foot = p.projection(&Vector3::new(2.0, -3.0, 7.0));
        assert_vec_eq(&foot, &Vector3::new(2.0, -3.0, 1.0), 1e-15);
    }

    #[test]
    fn test_line_projection() {
        let floor = Plane::default();
        let slope = Line3::from_components(0.0, 0.0, 1.0, 1.0, 0.0, -1.0);
        let shadow = floor.projection_line(&slope);
        assert_vec_eq(&shadow.point(), &Vector3::new(1.0, 0.0, 0.0), 1e-15);
        assert_relative_eq!(shadow.direction().z(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(shadow.direction().x().abs(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_shortest_connection_of_skew_lines() {
        let l1 = Line3::from_components(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let l2 = Line3::from_components(5.0, -3.0, 2.0, 0.0, 1.0, 0.0);
        let seg = shortest_connection(&l1, &l2).unwrap();

        assert_vec_eq(&seg.begin_point(), &Vector3::new(5.0, 0.0, 2.0), 1e-14);
        assert_vec_eq(&seg.end_point(), &Vector3::new(5.0, 0.0, 0.0), 1e-14);
        assert_relative_eq!(seg.length(), 2.0, epsilon = 1e-14);
        assert_relative_eq!(seg.length(), l1.doca_line(&l2), epsilon = 1e-14);
        assert_vec_eq(&intersection(&l1, &l2).unwrap(), &Vector3::new(5.0, 0.0, 1.0), 1e-14);
    }

    #[test]
    fn test_shortest_connection_endpoints_lie_on_lines() {
        let mut rng = StdRng::seed_from_u64(2718);
        for _ in 0..100 {
            let mut coord = || rng.gen_range(-5.0..5.0);
            let l1 = Line3::from_components(coord(), coord(), coord(), coord(), coord(), coord());
            let l2 = Line3::from_components(coord(), coord(), coord(), coord(), coord(), coord());
            if l1.is_parallel(&l2) {
                continue;
            }
            let seg = shortest_connection(&l1, &l2).unwrap();
            assert!(l2.doca(&seg.begin_point()) < 1e-9);
            assert!(l1.doca(&seg.end_point()) < 1e-9);
            assert!(seg.length() >= 0.0);
            assert_relative_eq!(seg.length(), l1.doca_line(&l2), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_parallel_lines_have_no_connection() {
        let l1 = Line3::from_components(0.0, 0.0, 0.0, 1.0, 1.0, 0.0);
        let l2 = Line3::from_components(0.0, 0.0, 3.0, -1.0, -1.0, 0.0);
        assert!(matches!(
            shortest_connection(&l1, &l2),
            Err(GeometryError::ParallelLines(_))
        ));
        assert!(intersection(&l1, &l2).is_err());
    }

    #[test]
    fn test_opposite_vertical_lines_have_no_connection() {
        let l1 = Line3::new(Vector3::zero(), Direction3::from_components(0.0, 0.0, -1.0));
        let l2 = Line3::new(Vector3::new(3.0, 4.0, 0.0), -Direction3::default());
        assert!(matches!(
            shortest_connection(&l1, &l2),
            Err(GeometryError::ParallelLines(_))
        ));
    }

    #[test]
    fn test_point_projection_onto_line() {
        let l = Line3::from_components(0.0, 0.0, 0.0, 1.0, 1.0, 0.0);
        let foot = projection(&Vector3::new(2.0, 0.0, 5.0), &l);
        assert_vec_eq(&foot, &Vector3::new(1.0, 1.0, 0.0), 1e-14);
    }

    #[test]
    fn test_unimplemented_segment_queries() {
        let s = LineSegment3::new(Vector3::zero(), Direction3::default(), 1.0);
        let p = Plane::default();
        assert!(matches!(p.intersects_segment(&s), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(p.intersection_segment(&s), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(p.projection_segment(&s), Err(GeometryError::NotImplemented(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Plane::default().to_string(),
            "plane{(0, 0, 0), [0, 0](0, 0, 1)}"
        );
    }
}
